//! Allfeat Website - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the Allfeat marketing website. Page content
//! sits above a footer built from [`footer_core`] sections.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  └── Home (Hero)                                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SiteFooter                                                  │
//! │  └── Footer                                                  │
//! │      └── FooterBlock × N (heading + links)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Compile-time settings
//! - [`components`] - UI components (Hero, Footer, FooterBlock)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Footer data model
pub use footer_core::{FooterBlockData, LinkEntry};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application on `<body>`.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Home/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
        </div>
    }
}
