//! # Preach Render - Palette to CSS Custom Properties
//!
//! `preach-render` turns a palette of named colors into CSS custom-property
//! stylesheets, a color-table script module and a small demo page.
//!
//! This crate is the rendering foundation for the `preach` generator, but it
//! does no I/O of its own: every function takes a palette (or CSS text) and
//! returns a string.
//!
//! ## Core Concepts
//!
//! - [`Palette`]: a validated [`ColorTable`], flat or split into light/dark themes
//! - [`ColorVariant`]: one flattened leaf, `accentHover` → `accent-hover`
//! - [`render_stylesheet`]: theme-specific and adaptive `--preach-*` variables
//! - [`format_css`] / [`minify_css`]: normalize the rendered CSS
//! - [`render_color_module`]: `colors`, `colorsHSL` and `colorsRGB` for scripts
//!
//! ## Quick Start
//!
//! ```rust
//! use preach_render::{builtin_palette, format_css, minify_css, render_stylesheet, DEFAULT_PREFIX};
//!
//! let loaded = builtin_palette().unwrap();
//! let raw = render_stylesheet(&loaded.palette, DEFAULT_PREFIX).unwrap();
//!
//! let css = format_css(&raw).unwrap();
//! let min = minify_css(&css).unwrap();
//!
//! assert!(css.contains("--preach-dark-accent: #c8c17f;"));
//! assert!(css.contains("@media (prefers-color-scheme: dark)"));
//! assert!(min.len() < css.len());
//! ```
//!
//! ## Palettes From YAML
//!
//! ```rust
//! use preach_render::{load_palette_yaml, render_stylesheet, minify_css};
//!
//! let loaded = load_palette_yaml(r##"
//! background: "#1B1C1C"
//! accent: "#C8C17F"
//! "##).unwrap();
//!
//! let css = minify_css(&render_stylesheet(&loaded.palette, "preach-").unwrap()).unwrap();
//! assert_eq!(css, ":root{--preach-background:#1b1c1c;--preach-accent:#c8c17f}");
//! ```

pub mod colorspace;
pub mod css;
pub mod demo;
mod error;
pub mod flatten;
pub mod module;
pub mod palette;
mod templates;

pub use colorspace::{hex_to_hsl, hex_to_rgb, DerivedTables, Hsl, Rgb};
pub use css::{
    custom_properties, format_css, minify_css, render_stylesheet, StylesheetModel, DEFAULT_PREFIX,
};
pub use demo::{render_demo_page, DEMO_SCRIPT};
pub use error::{CssError, PaletteError, RenderError};
pub use flatten::{dash_case, flatten, ColorVariant};
pub use module::render_color_module;
pub use palette::{
    builtin_palette, load_palette_file, load_palette_yaml, ColorNode, ColorTable, HexColor,
    LoadedPalette, Palette, PaletteIssue,
};
