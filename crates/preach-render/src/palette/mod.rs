//! Palettes: named colors, optionally split into light and dark themes.
//!
//! A palette is authored as a YAML mapping of semantic names to hex colors.
//! Mappings may nest, and a key named `DEFAULT` attaches its color to the
//! parent path:
//!
//! ```yaml
//! light:
//!   background: "#FAFAF7"
//!   accent:
//!     DEFAULT: "#E4D86C"
//!     hover: "#D9CD60"
//! dark:
//!   background: "#1B1C1C"
//!   accent:
//!     DEFAULT: "#C8C17F"
//!     hover: "#BDB675"
//! ```
//!
//! When the root carries both a `light` and a `dark` key the palette is
//! *themed* and both must be groups. Otherwise the whole table is a single
//! flat theme, so a flat palette may still name one of its colors `light`
//! or `dark`.
//!
//! Leaves that are not valid hex strings do not abort loading: they are
//! skipped and reported as [`PaletteIssue`]s so the caller can decide how
//! loudly to complain.

mod hex;
mod load;
mod table;

pub use hex::HexColor;
pub use load::{
    builtin_palette, load_palette_file, load_palette_yaml, LoadedPalette, PaletteIssue,
    BUILTIN_PALETTE,
};
pub use table::{ColorNode, ColorTable};

use crate::error::PaletteError;

/// Theme name for the light variant.
pub const LIGHT: &str = "light";
/// Theme name for the dark variant.
pub const DARK: &str = "dark";

/// The light and dark tables of a themed palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePair {
    pub light: ColorTable,
    pub dark: ColorTable,
}

/// A validated palette, ready for flattening and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    source: ColorTable,
    themes: Option<ThemePair>,
}

impl Palette {
    /// Validates a table and detects whether it is themed.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidTheme`] when the table has both a
    /// `light` and a `dark` key but either one is a single color instead of
    /// a group.
    pub fn from_table(table: ColorTable) -> Result<Self, PaletteError> {
        if table.get(LIGHT).is_none() || table.get(DARK).is_none() {
            return Ok(Self::flat(table));
        }

        let light = theme_root(&table, LIGHT)?.clone();
        let dark = theme_root(&table, DARK)?.clone();
        Ok(Self {
            source: table,
            themes: Some(ThemePair { light, dark }),
        })
    }

    /// Treats the whole table as a single theme, without theme detection.
    pub fn flat(table: ColorTable) -> Self {
        Self {
            source: table,
            themes: None,
        }
    }

    /// Returns the table as authored.
    pub fn table(&self) -> &ColorTable {
        &self.source
    }

    /// Returns the light and dark tables for a themed palette.
    pub fn themes(&self) -> Option<&ThemePair> {
        self.themes.as_ref()
    }

    pub fn is_themed(&self) -> bool {
        self.themes.is_some()
    }
}

fn theme_root<'a>(table: &'a ColorTable, theme: &str) -> Result<&'a ColorTable, PaletteError> {
    match table.get(theme) {
        Some(ColorNode::Group(group)) => Ok(group),
        Some(ColorNode::Leaf(color)) => Err(PaletteError::InvalidTheme {
            theme: theme.to_string(),
            message: format!(
                "expected a group of colors, found the color {} \
                 ('{}' and '{}' together mark a themed palette)",
                color, LIGHT, DARK
            ),
        }),
        None => Err(PaletteError::InvalidTheme {
            theme: theme.to_string(),
            message: "theme is missing".to_string(),
        }),
    }
}
