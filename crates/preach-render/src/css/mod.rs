//! CSS generation: rendering palettes to custom properties, then formatting
//! and minifying the result.
//!
//! ```rust
//! use preach_render::css::{format_css, minify_css, render_stylesheet, DEFAULT_PREFIX};
//! use preach_render::palette::{ColorTable, HexColor, Palette};
//!
//! let palette = Palette::from_table(
//!     ColorTable::new()
//!         .group("light", ColorTable::new().color("accent", HexColor::parse("#E4D86C").unwrap()))
//!         .group("dark", ColorTable::new().color("accent", HexColor::parse("#C8C17F").unwrap())),
//! )
//! .unwrap();
//!
//! let raw = render_stylesheet(&palette, DEFAULT_PREFIX).unwrap();
//! let formatted = format_css(&raw).unwrap();
//! let minified = minify_css(&formatted).unwrap();
//!
//! assert!(formatted.contains("--preach-accent: var(--preach-light-accent);"));
//! assert!(minified.ends_with(
//!     "@media (prefers-color-scheme:dark){:root{--preach-accent:var(--preach-dark-accent)}}"
//! ));
//! ```

mod format;
mod minify;
mod render;
pub mod tree;

pub use format::format_css;
pub use minify::minify_css;
pub use render::{
    render_stylesheet, Declaration, StylesheetModel, ThemeSection, VariableNames, DEFAULT_PREFIX,
};
pub use tree::{custom_properties, CustomProperty};
