//! Application configuration.
//!
//! Compile-time settings for the website frontend. Footer style hooks
//! live in `footer_core::styles`.

/// Site name, used for the document title.
pub const APP_NAME: &str = "Allfeat";

/// Console log verbosity.
pub const LOG_LEVEL: log::Level = log::Level::Debug;
