//! Site footer content.
//!
//! The footer sections are embedded at compile time from
//! `data/footer.json` and decoded on demand.

use crate::error::{FooterError, FooterResult};
use crate::models::{footer_from_json, FooterBlockData};

/// Raw footer document.
const SITE_FOOTER_JSON: &str = include_str!("../data/footer.json");

/// Footer sections shown on every page, in column order.
pub fn site_footer() -> FooterResult<Vec<FooterBlockData>> {
    let blocks = footer_from_json(SITE_FOOTER_JSON)?;
    if blocks.is_empty() {
        return Err(FooterError::EmptyFooter);
    }
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_block;

    #[test]
    fn test_site_footer_decodes() {
        let blocks = site_footer().unwrap();
        assert!(!blocks.is_empty());
        assert_eq!(blocks[0].name, "Company");
        assert!(blocks.iter().all(|b| !b.name.is_empty()));
    }

    #[test]
    fn test_site_footer_renders_every_link() {
        for block in site_footer().unwrap() {
            let rendered = render_block(&block);
            assert_eq!(rendered.link_count(), block.links.len());
            assert!(rendered
                .hrefs()
                .iter()
                .all(|href| href.starts_with('/') || href.starts_with("https://")));
        }
    }
}
