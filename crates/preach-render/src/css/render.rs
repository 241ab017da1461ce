//! Rendering palettes to CSS custom-property declarations.
//!
//! # Variable Naming
//!
//! Every variable is prefixed (`preach-` by default). Theme-specific
//! variables splice the theme name right after the prefix, adaptive ones
//! do not:
//!
//! | Kind           | Name                    | Value                          |
//! |----------------|-------------------------|--------------------------------|
//! | light-specific | `--preach-light-accent` | `#e4d86c`                      |
//! | dark-specific  | `--preach-dark-accent`  | `#c8c17f`                      |
//! | adaptive       | `--preach-accent`       | `var(--preach-light-accent)`   |
//!
//! Inside `@media (prefers-color-scheme: dark)` every adaptive variable is
//! re-declared as `var(--preach-dark-<path>)`.
//!
//! The adaptive set is taken from the light theme. A path that only exists
//! in the dark theme still gets its `--preach-dark-*` declaration but no
//! adaptive variable.
//!
//! A flat palette (no themes) produces a single `:root` block with one
//! declaration per color and no media query.

use indexmap::IndexSet;
use serde::Serialize;

use crate::error::RenderError;
use crate::flatten::{flatten, ColorVariant};
use crate::palette::{Palette, DARK, LIGHT};
use crate::templates;

/// Default variable prefix.
pub const DEFAULT_PREFIX: &str = "preach-";

/// A single `name: value` custom property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

/// Declarations of one theme, rendered under a section comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSection {
    pub label: String,
    pub declarations: Vec<Declaration>,
}

/// Builds CSS variable names for a prefix.
#[derive(Debug, Clone, Copy)]
pub struct VariableNames<'a> {
    prefix: &'a str,
}

impl<'a> VariableNames<'a> {
    /// Accepts prefixes made of ASCII letters, digits, `-` and `_`.
    ///
    /// Anything else (`:`, `;`, whitespace, braces) would change the
    /// structure of the generated stylesheet instead of naming a variable.
    pub fn new(prefix: &'a str) -> Result<Self, RenderError> {
        let valid = prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RenderError::InvalidPrefix(prefix.to_string()));
        }
        Ok(Self { prefix })
    }

    fn base<'p>(&self, path: &'p str) -> std::borrow::Cow<'p, str> {
        if path.starts_with(self.prefix) {
            path.into()
        } else {
            format!("{}{}", self.prefix, path).into()
        }
    }

    /// `--preach-<path>`
    pub fn adaptive(&self, path: &str) -> String {
        format!("--{}", self.base(path))
    }

    /// `--preach-<theme>-<path>`
    pub fn themed(&self, theme: &str, path: &str) -> String {
        let base = self.base(path);
        let rest = &base[self.prefix.len()..];
        format!("--{}{}-{}", self.prefix, theme, rest)
    }
}

/// Everything the stylesheet template needs, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StylesheetModel {
    /// Theme-specific blocks (light, then dark). Empty for flat palettes.
    pub themes: Vec<ThemeSection>,
    /// Adaptive declarations in the base `:root` block.
    pub adaptive: Vec<Declaration>,
    /// Adaptive re-declarations for the dark color scheme.
    pub dark_overrides: Vec<Declaration>,
}

impl StylesheetModel {
    /// Computes the declarations for a palette.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidPrefix`] for a prefix that is not made
    /// of CSS identifier characters.
    pub fn build(palette: &Palette, prefix: &str) -> Result<Self, RenderError> {
        let names = VariableNames::new(prefix)?;

        let Some(themes) = palette.themes() else {
            let adaptive = flatten(palette.table())
                .into_iter()
                .map(|v| Declaration {
                    name: names.adaptive(&v.path),
                    value: v.color.to_string(),
                })
                .collect();
            return Ok(Self {
                themes: Vec::new(),
                adaptive,
                dark_overrides: Vec::new(),
            });
        };

        let light = flatten(&themes.light);
        let dark = flatten(&themes.dark);
        let adaptive_paths = unique_paths(&light);

        let redirect = |theme: &str| -> Vec<Declaration> {
            adaptive_paths
                .iter()
                .map(|path| Declaration {
                    name: names.adaptive(path),
                    value: format!("var({})", names.themed(theme, path)),
                })
                .collect()
        };

        Ok(Self {
            themes: vec![
                theme_section("Light Theme", LIGHT, &light, names),
                theme_section("Dark Theme", DARK, &dark, names),
            ],
            adaptive: redirect(LIGHT),
            dark_overrides: redirect(DARK),
        })
    }

    /// All declarations in document order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.themes
            .iter()
            .flat_map(|section| section.declarations.iter())
            .chain(self.adaptive.iter())
            .chain(self.dark_overrides.iter())
    }
}

fn theme_section(
    label: &str,
    theme: &str,
    variants: &[ColorVariant],
    names: VariableNames<'_>,
) -> ThemeSection {
    ThemeSection {
        label: label.to_string(),
        declarations: variants
            .iter()
            .map(|v| Declaration {
                name: names.themed(theme, &v.path),
                value: v.color.to_string(),
            })
            .collect(),
    }
}

fn unique_paths(variants: &[ColorVariant]) -> IndexSet<&str> {
    variants.iter().map(|v| v.path.as_str()).collect()
}

/// Renders the unformatted stylesheet for a palette.
///
/// The output is valid CSS but not normalized; pass it through
/// [`format_css`](super::format_css) or [`minify_css`](super::minify_css).
pub fn render_stylesheet(palette: &Palette, prefix: &str) -> Result<String, RenderError> {
    let model = StylesheetModel::build(palette, prefix)?;
    templates::render(templates::STYLESHEET, &model)
}
