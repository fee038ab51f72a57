//! Error types for footer data.
//!
//! Rendering a [`crate::FooterBlockData`] cannot fail. Errors only exist
//! where untyped input is decoded into the model.

use thiserror::Error;

/// Errors while loading footer content.
#[derive(Debug, Error)]
pub enum FooterError {
    /// Malformed footer JSON (missing `name`, non-array `links`, ...).
    #[error("Invalid footer JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The footer document decoded to zero sections.
    #[error("Footer has no sections")]
    EmptyFooter,
}

/// Result type for footer loading.
pub type FooterResult<T> = Result<T, FooterError>;
