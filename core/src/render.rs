//! Projection of footer data onto a view tree.
//!
//! [`render_block`] maps a [`FooterBlockData`] to a [`RenderedBlock`]: a
//! heading followed by one [`RenderedLink`] per entry, in input order. The
//! Leptos `FooterBlock` component draws exactly this tree, so everything
//! the footer shows can be asserted here without a DOM.
//!
//! # Link identity
//!
//! Each link gets a [`LinkKey`] made of its position and its label. Labels
//! alone are not unique in practice (e.g. two "Docs" links), so keys never
//! collide and duplicated entries are all rendered.

use std::collections::HashSet;

use crate::models::{FooterBlockData, LinkEntry};
use crate::styles::{BLOCK_CLASS, HEADING_CLASS, LINK_CLASS, LINK_LIST_CLASS};

// =============================================================================
// View Tree Types
// =============================================================================

/// Stable identity of a rendered link across re-renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkKey {
    /// Index in `FooterBlockData::links`.
    pub position: usize,
    /// Link label at that index.
    pub label: String,
}

/// Heading element of a footer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHeading {
    pub text: String,
    pub class: &'static str,
}

/// One navigational link element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLink {
    pub key: LinkKey,
    pub label: String,
    pub href: String,
    pub class: &'static str,
}

/// Full view tree of a footer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// Outer container class.
    pub class: &'static str,
    pub heading: RenderedHeading,
    /// Class of the vertical link container.
    pub list_class: &'static str,
    /// Links in input order.
    pub links: Vec<RenderedLink>,
}

impl RenderedBlock {
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Link destinations in rendered order.
    pub fn hrefs(&self) -> Vec<&str> {
        self.links.iter().map(|l| l.href.as_str()).collect()
    }
}

// =============================================================================
// Projection
// =============================================================================

/// Pair every link with its [`LinkKey`], keeping input order.
///
/// Duplicate labels are logged and kept.
pub fn keyed_links(block: &FooterBlockData) -> Vec<(LinkKey, LinkEntry)> {
    let mut seen = HashSet::new();

    block
        .links
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            if !seen.insert(entry.label.as_str()) {
                log::warn!(
                    "Footer block '{}' repeats link label '{}' at position {}",
                    block.name,
                    entry.label,
                    position
                );
            }
            let key = LinkKey {
                position,
                label: entry.label.clone(),
            };
            (key, entry.clone())
        })
        .collect()
}

/// Render one footer section.
///
/// Pure: the input is only read and the same input always yields an equal
/// tree. Heading text and link labels are copied verbatim.
pub fn render_block(block: &FooterBlockData) -> RenderedBlock {
    let links: Vec<RenderedLink> = keyed_links(block)
        .into_iter()
        .map(|(key, entry)| RenderedLink {
            key,
            label: entry.label,
            href: entry.link,
            class: LINK_CLASS,
        })
        .collect();

    log::debug!("Rendered footer block '{}' with {} links", block.name, links.len());

    RenderedBlock {
        class: BLOCK_CLASS,
        heading: RenderedHeading {
            text: block.name.clone(),
            class: HEADING_CLASS,
        },
        list_class: LINK_LIST_CLASS,
        links,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> FooterBlockData {
        FooterBlockData::new("Company")
            .with_link("About", "/about")
            .with_link("Careers", "/careers")
    }

    #[test]
    fn test_company_example() {
        let rendered = render_block(&company());

        assert_eq!(rendered.heading.text, "Company");
        assert_eq!(rendered.link_count(), 2);
        assert_eq!(rendered.links[0].label, "About");
        assert_eq!(rendered.links[0].href, "/about");
        assert_eq!(rendered.links[1].label, "Careers");
        assert_eq!(rendered.links[1].href, "/careers");
    }

    #[test]
    fn test_link_count_and_order_match_input() {
        let block = FooterBlockData::new("Resources")
            .with_link("Docs", "/docs")
            .with_link("Blog", "/blog")
            .with_link("GitHub", "https://github.com/allfeat")
            .with_link("Status", "https://status.allfeat.org");

        let rendered = render_block(&block);

        assert_eq!(rendered.link_count(), block.links.len());
        for (i, entry) in block.links.iter().enumerate() {
            assert_eq!(rendered.links[i].label, entry.label);
            assert_eq!(rendered.links[i].href, entry.link);
            assert_eq!(rendered.links[i].key.position, i);
        }
    }

    #[test]
    fn test_heading_is_verbatim() {
        let name = "  Über uns & <Kontakt>  ";
        let rendered = render_block(&FooterBlockData::new(name));
        assert_eq!(rendered.heading.text, name);
    }

    #[test]
    fn test_render_is_idempotent() {
        let block = company();
        assert_eq!(render_block(&block), render_block(&block.clone()));
    }

    #[test]
    fn test_empty_links() {
        let rendered = render_block(&FooterBlockData::new("Legal"));
        assert_eq!(rendered.heading.text, "Legal");
        assert_eq!(rendered.link_count(), 0);
        assert!(rendered.hrefs().is_empty());
    }

    #[test]
    fn test_duplicate_labels_get_distinct_keys() {
        let block = FooterBlockData::new("Docs")
            .with_link("Guide", "/docs/guide")
            .with_link("Guide", "/docs/v1/guide");

        let rendered = render_block(&block);

        assert_eq!(rendered.link_count(), 2);
        assert_ne!(rendered.links[0].key, rendered.links[1].key);
        assert_eq!(rendered.hrefs(), vec!["/docs/guide", "/docs/v1/guide"]);
    }

    #[test]
    fn test_style_hooks() {
        let rendered = render_block(&company());
        assert_eq!(rendered.class, BLOCK_CLASS);
        assert_eq!(rendered.heading.class, HEADING_CLASS);
        assert_eq!(rendered.list_class, LINK_LIST_CLASS);
        assert!(rendered.links.iter().all(|l| l.class == LINK_CLASS));
    }

    #[test]
    fn test_keyed_links_pairs_entries() {
        let block = company();
        let keyed = keyed_links(&block);

        assert_eq!(keyed.len(), 2);
        assert_eq!(keyed[1].0, LinkKey { position: 1, label: "Careers".into() });
        assert_eq!(keyed[1].1, block.links[1]);
    }
}
