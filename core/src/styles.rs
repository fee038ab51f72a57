//! Style hooks for footer markup.
//!
//! Utility classes resolved by the site stylesheet. Only the two role
//! classes ([`HEADING_CLASS`], [`LINK_CLASS`]) carry meaning; the rest is
//! layout.

/// Outer container of one footer section.
pub const BLOCK_CLASS: &str = "mb-10";

/// "Section heading" presentation role.
pub const HEADING_CLASS: &str = "highlightText mb-3";

/// Vertical stack holding the links.
pub const LINK_LIST_CLASS: &str = "flex flex-col gap-3";

/// "Secondary link text" presentation role.
pub const LINK_CLASS: &str = "captionText text-grey-500 hover:text-grey-400";

/// Grid wrapping all footer sections.
pub const FOOTER_GRID_CLASS: &str = "grid grid-cols-2 md:grid-cols-4 gap-8";
