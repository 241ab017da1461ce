//! One generator run: load, validate, render, write.
//!
//! Rendering is done entirely in memory before the first file is touched,
//! so a palette or template failure never leaves half-updated outputs.

use std::path::PathBuf;

use indexmap::IndexSet;

use preach_render::flatten::{duplicate_paths, flatten};
use preach_render::{
    builtin_palette, format_css, load_palette_file, minify_css, render_color_module,
    render_demo_page, render_stylesheet, LoadedPalette, Palette, PaletteIssue, DEMO_SCRIPT,
};

use crate::config::{GeneratorConfig, PaletteSource};
use crate::error::GenerateError;
use crate::writer::{self, Artifacts, DemoAssets, DEMO_SCRIPT_FILE, STYLESHEET_FILE};

/// What a successful run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Palette entries skipped while loading.
    pub issues: Vec<PaletteIssue>,
    /// Flattened paths declared more than once, qualified by theme.
    pub duplicates: Vec<String>,
    /// Light paths with no dark counterpart.
    pub missing_dark: Vec<String>,
    /// Number of custom properties in the formatted stylesheet.
    pub variables: usize,
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
}

/// Loads the configured palette.
pub fn load_palette(source: &PaletteSource) -> Result<LoadedPalette, GenerateError> {
    let loaded = match source {
        PaletteSource::Builtin => builtin_palette()?,
        PaletteSource::File(path) => {
            tracing::debug!(path = %path.display(), "loading palette");
            load_palette_file(path)?
        }
    };
    Ok(loaded)
}

/// Renders every artifact for a palette without writing anything.
pub fn build_artifacts(
    palette: &Palette,
    prefix: &str,
    demo: bool,
) -> Result<Artifacts, GenerateError> {
    let stylesheet = format_css(&render_stylesheet(palette, prefix)?)?;
    let minified = minify_css(&stylesheet)?;
    let color_module = render_color_module(palette)?;

    let demo = if demo {
        Some(DemoAssets {
            page: render_demo_page(palette, prefix, STYLESHEET_FILE, DEMO_SCRIPT_FILE)?,
            script: DEMO_SCRIPT.to_string(),
        })
    } else {
        None
    };

    Ok(Artifacts {
        stylesheet,
        minified,
        color_module,
        demo,
    })
}

/// Runs the generator.
///
/// Skipped palette entries, duplicate paths and light colors without a dark
/// counterpart are logged as warnings and returned in the report; none of
/// them stop the run.
///
/// # Errors
///
/// Fails without writing when the palette cannot be loaded or rendered, and
/// stops at the first file that cannot be written.
pub fn generate(config: &GeneratorConfig) -> Result<GenerateReport, GenerateError> {
    let LoadedPalette { palette, issues } = load_palette(&config.palette)?;
    for issue in &issues {
        tracing::warn!(path = %issue.path, "skipped palette entry: {}", issue.message);
    }

    let duplicates = find_duplicates(&palette);
    for path in &duplicates {
        tracing::warn!(path = %path, "color path declared more than once; the last value wins");
    }

    let missing_dark = missing_dark_paths(&palette);
    for path in &missing_dark {
        tracing::warn!(path = %path, "no dark color; the adaptive variable will be undefined in dark mode");
    }

    let artifacts = build_artifacts(&palette, &config.prefix, config.demo)?;
    let variables = preach_render::custom_properties(&artifacts.stylesheet)?.len();
    tracing::debug!(variables, themed = palette.is_themed(), "rendered stylesheet");

    let written = writer::write_artifacts(&artifacts, &config.css_dir, &config.docs_dir)?;

    Ok(GenerateReport {
        issues,
        duplicates,
        missing_dark,
        variables,
        written,
    })
}

fn find_duplicates(palette: &Palette) -> Vec<String> {
    match palette.themes() {
        None => duplicate_paths(&flatten(palette.table())),
        Some(themes) => [("light", &themes.light), ("dark", &themes.dark)]
            .into_iter()
            .flat_map(|(theme, table)| {
                duplicate_paths(&flatten(table))
                    .into_iter()
                    .map(move |path| format!("{}.{}", theme, path))
            })
            .collect(),
    }
}

fn missing_dark_paths(palette: &Palette) -> Vec<String> {
    let Some(themes) = palette.themes() else {
        return Vec::new();
    };
    let dark: IndexSet<String> = flatten(&themes.dark).into_iter().map(|v| v.path).collect();

    let missing: IndexSet<String> = flatten(&themes.light)
        .into_iter()
        .map(|v| v.path)
        .filter(|path| !dark.contains(path))
        .collect();
    missing.into_iter().collect()
}
