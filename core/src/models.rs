//! Domain models for footer sections.
//!
//! - [`FooterBlockData`] - One footer section: a heading and its links
//! - [`LinkEntry`] - A single navigable item inside a section
//!
//! Both are plain owned values. The caller builds them, hands them to the
//! view layer and nothing here keeps a reference afterwards.

use serde::{Deserialize, Serialize};

use crate::error::FooterResult;

// =============================================================================
// Link Entry
// =============================================================================

/// One navigable item within a footer section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Visible link text.
    pub label: String,
    /// Destination, either an absolute URL or a site path.
    pub link: String,
}

impl LinkEntry {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

// =============================================================================
// Footer Block
// =============================================================================

/// A footer section: heading label plus an ordered list of links.
///
/// `links` order is the rendered top-to-bottom order. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterBlockData {
    /// Section heading.
    pub name: String,
    /// Links in display order.
    pub links: Vec<LinkEntry>,
}

impl FooterBlockData {
    /// Create a section with no links.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: Vec::new(),
        }
    }

    /// Append a link, keeping insertion order.
    pub fn with_link(mut self, label: impl Into<String>, link: impl Into<String>) -> Self {
        self.links.push(LinkEntry::new(label, link));
        self
    }

    /// Decode a single section from JSON.
    ///
    /// Both `name` and `links` are required; `links` must be an array.
    pub fn from_json(json: &str) -> FooterResult<Self> {
        let block: Self = serde_json::from_str(json)?;
        log::debug!("Decoded footer block '{}' ({} links)", block.name, block.links.len());
        Ok(block)
    }
}

/// Decode a whole footer (an array of sections) from JSON.
pub fn footer_from_json(json: &str) -> FooterResult<Vec<FooterBlockData>> {
    let blocks: Vec<FooterBlockData> = serde_json::from_str(json)?;
    log::debug!("Decoded footer with {} blocks", blocks.len());
    Ok(blocks)
}

// =============================================================================
// Tests
// =============================================================================
