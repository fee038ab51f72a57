//! UI Components for the Allfeat website.
//!
//! # Layout Components
//! - [`Hero`] - Landing title and tagline
//! - [`Footer`] - Page footer, one column per section
//! - [`SiteFooter`] - [`Footer`] fed with the embedded site content
//!
//! # Building Blocks
//! - [`FooterBlock`] - A single footer section (heading + links)

mod footer;
mod footer_block;
mod hero;

pub use footer::*;
pub use footer_block::*;
pub use hero::*;
