//! # Footer Core - website footer sections
//!
//! Data model and pure render projection for the footer of the Allfeat
//! marketing website. The Leptos frontend consumes this crate to draw each
//! footer section; everything here is native Rust and tested without a
//! browser.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌───────────────┐     ┌──────────────┐
//! │ footer.json  │────▶│ FooterBlockData  │────▶│ render_block  │────▶│ RenderedBlock│
//! │ (embedded)   │     │ (serde decode)   │     │ (pure)        │     │ (keyed links)│
//! └──────────────┘     └──────────────────┘     └───────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use footer_core::{render_block, FooterBlockData};
//!
//! let block = FooterBlockData::new("Company")
//!     .with_link("About", "/about")
//!     .with_link("Careers", "/careers");
//!
//! let rendered = render_block(&block);
//! assert_eq!(rendered.heading.text, "Company");
//! assert_eq!(rendered.link_count(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Decode errors
//! - [`models`] - Footer section and link entries
//! - [`render`] - Data to view-tree projection
//! - [`styles`] - Fixed style hooks
//! - [`data`] - Embedded site footer content

// Core modules
pub mod error;
pub mod models;

// Rendering
pub mod render;
pub mod styles;

// Site content
pub mod data;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{FooterError, FooterResult};

pub use models::{footer_from_json, FooterBlockData, LinkEntry};

pub use render::{
    keyed_links,
    render_block,
    LinkKey,
    RenderedBlock,
    RenderedHeading,
    RenderedLink,
};

pub use data::site_footer;
