//! Writing generated artifacts to disk.
//!
//! | File                     | Contents                         |
//! |--------------------------|----------------------------------|
//! | `<css>/preach.css`       | formatted stylesheet             |
//! | `<css>/preach.min.css`   | minified stylesheet              |
//! | `<docs>/preach.css`      | formatted stylesheet (for demo)  |
//! | `<docs>/preach.js`       | color-table module               |
//! | `<docs>/index.html`      | demo page (optional)             |
//! | `<docs>/main.js`         | demo script (optional)           |
//!
//! Every file is overwritten on each run. Directories are created as needed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WriteError;

pub const STYLESHEET_FILE: &str = "preach.css";
pub const MINIFIED_FILE: &str = "preach.min.css";
pub const COLOR_MODULE_FILE: &str = "preach.js";
pub const DEMO_PAGE_FILE: &str = "index.html";
pub const DEMO_SCRIPT_FILE: &str = "main.js";

/// Demo page and script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAssets {
    pub page: String,
    pub script: String,
}

/// Everything one run produces, already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub stylesheet: String,
    pub minified: String,
    pub color_module: String,
    pub demo: Option<DemoAssets>,
}

impl Artifacts {
    /// Target paths and contents, in write order.
    pub fn files<'a>(&'a self, css_dir: &Path, docs_dir: &Path) -> Vec<(PathBuf, &'a str)> {
        let mut files = vec![
            (css_dir.join(STYLESHEET_FILE), self.stylesheet.as_str()),
            (css_dir.join(MINIFIED_FILE), self.minified.as_str()),
            (docs_dir.join(STYLESHEET_FILE), self.stylesheet.as_str()),
            (docs_dir.join(COLOR_MODULE_FILE), self.color_module.as_str()),
        ];
        if let Some(demo) = &self.demo {
            files.push((docs_dir.join(DEMO_PAGE_FILE), demo.page.as_str()));
            files.push((docs_dir.join(DEMO_SCRIPT_FILE), demo.script.as_str()));
        }
        files
    }
}

/// Writes all artifacts and returns the written paths.
///
/// # Errors
///
/// Stops at the first directory or file that cannot be written. Files
/// written before it are kept.
pub fn write_artifacts(
    artifacts: &Artifacts,
    css_dir: &Path,
    docs_dir: &Path,
) -> Result<Vec<PathBuf>, WriteError> {
    ensure_dir(css_dir)?;
    ensure_dir(docs_dir)?;

    let mut written = Vec::new();
    for (path, contents) in artifacts.files(css_dir, docs_dir) {
        fs::write(&path, contents).map_err(|source| WriteError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = contents.len(), "wrote");
        written.push(path);
    }

    Ok(written)
}

fn ensure_dir(dir: &Path) -> Result<(), WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
