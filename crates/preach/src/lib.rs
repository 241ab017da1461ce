//! # Preach - CSS Palette Generator
//!
//! `preach` renders a color palette into the files a site needs to use it:
//!
//! - `css/preach.css` and `css/preach.min.css`: light, dark and adaptive
//!   `--preach-*` custom properties
//! - `docs/preach.css`, `docs/preach.js`: the stylesheet again, plus the
//!   color table as hex, HSL and RGB for scripts
//! - `docs/index.html`, `docs/main.js`: a swatch page that copies colors to
//!   the clipboard
//!
//! The rendering itself lives in [`preach_render`]; this crate adds
//! configuration, file output and the command-line entry point.
//!
//! ```rust,no_run
//! use preach::{generate, GeneratorConfig};
//!
//! let report = generate(&GeneratorConfig::new().output_root("site")).unwrap();
//! println!("wrote {} files", report.written.len());
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod writer;

pub use config::{GeneratorConfig, PaletteSource};
pub use error::{GenerateError, WriteError};
pub use generate::{build_artifacts, generate, GenerateReport};
pub use writer::{write_artifacts, Artifacts, DemoAssets};

pub use preach_render;
