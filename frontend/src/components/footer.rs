//! Footer component

use footer_core::{site_footer, styles::FOOTER_GRID_CLASS, FooterBlockData};
use leptos::*;

use super::FooterBlock;

/// Page footer with one [`FooterBlock`] per section, in order.
#[component]
pub fn Footer(blocks: Vec<FooterBlockData>) -> impl IntoView {
    view! {
        <footer>
            <div class=FOOTER_GRID_CLASS>
                {blocks
                    .into_iter()
                    .map(|block_data| view! { <FooterBlock block_data=block_data/> })
                    .collect_view()}
            </div>
        </footer>
    }
}

/// Footer loaded from the embedded site content.
///
/// If the content cannot be decoded the error is logged and the footer is
/// drawn without sections.
#[component]
pub fn SiteFooter() -> impl IntoView {
    let blocks = match site_footer() {
        Ok(blocks) => {
            log::debug!("Loaded {} footer sections", blocks.len());
            blocks
        }
        Err(e) => {
            log::error!("❌ Could not load site footer: {}", e);
            Vec::new()
        }
    };

    view! { <Footer blocks=blocks/> }
}
