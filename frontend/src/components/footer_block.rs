//! Footer section component

use footer_core::{render_block, FooterBlockData, RenderedBlock};
use leptos::*;
use leptos_router::A;

/// One footer column: a heading and a vertical list of links.
///
/// Draws the tree produced by [`render_block`]. Links are keyed by
/// position and label so repeated labels keep their own DOM nodes.
#[component]
pub fn FooterBlock(
    /// Section heading and links, owned by the parent layout
    block_data: FooterBlockData,
) -> impl IntoView {
    let RenderedBlock {
        class,
        heading,
        list_class,
        links,
    } = render_block(&block_data);

    view! {
        <div class=class>
            <div class=heading.class>{heading.text}</div>
            <div class=list_class>
                <For
                    each=move || links.clone()
                    key=|link| link.key.clone()
                    children=move |link| {
                        view! {
                            <A href=link.href class=link.class>
                                {link.label}
                            </A>
                        }
                    }
                />
            </div>
        </div>
    }
}
