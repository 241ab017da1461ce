//! Generator configuration.
//!
//! [`GeneratorConfig`] defaults reproduce the classic zero-argument run:
//! the builtin palette, stylesheets in `css/`, the demo in `docs/`, and the
//! `preach-` variable prefix.
//!
//! ```rust
//! use preach::config::{GeneratorConfig, PaletteSource};
//!
//! let config = GeneratorConfig::new()
//!     .palette_file("brand.yaml")
//!     .prefix("brand-")
//!     .demo(false);
//!
//! assert_eq!(config.palette, PaletteSource::File("brand.yaml".into()));
//! assert_eq!(config.css_dir.to_str(), Some("css"));
//! ```

use std::path::{Path, PathBuf};

use preach_render::DEFAULT_PREFIX;

/// Default directory for `preach.css` and `preach.min.css`.
pub const DEFAULT_CSS_DIR: &str = "css";
/// Default directory for the demo page and its assets.
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Where the palette comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PaletteSource {
    /// The palette embedded in `preach-render`.
    #[default]
    Builtin,
    /// A YAML palette file.
    File(PathBuf),
}

/// Settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub palette: PaletteSource,
    pub css_dir: PathBuf,
    pub docs_dir: PathBuf,
    /// Prefix for every CSS variable, e.g. `preach-`.
    pub prefix: String,
    /// Whether to write `index.html` and `main.js` next to the docs stylesheet.
    pub demo: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            palette: PaletteSource::Builtin,
            css_dir: PathBuf::from(DEFAULT_CSS_DIR),
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            prefix: DEFAULT_PREFIX.to_string(),
            demo: true,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the palette from a YAML file instead of the builtin one.
    pub fn palette_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.palette = PaletteSource::File(path.into());
        self
    }

    pub fn css_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.css_dir = dir.into();
        self
    }

    pub fn docs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = dir.into();
        self
    }

    /// Places both output directories under `root`, keeping their default names.
    pub fn output_root(self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.css_dir(root.join(DEFAULT_CSS_DIR))
            .docs_dir(root.join(DEFAULT_DOCS_DIR))
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn demo(mut self, demo: bool) -> Self {
        self.demo = demo;
        self
    }
}
