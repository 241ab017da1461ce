//! Validated, normalized hex color values.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::colorspace::{parse_hex, Rgb};
use crate::error::PaletteError;

/// A palette leaf color.
///
/// Accepts `#rrggbb` and the `#rgb` shorthand in any case; always displays
/// as lowercase `#rrggbb`, so two spellings of the same color compare equal
/// and render identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(Rgb);

impl HexColor {
    /// Parses and normalizes a hex color string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use preach_render::palette::HexColor;
    ///
    /// let color = HexColor::parse("#C8C17F").unwrap();
    /// assert_eq!(color.to_string(), "#c8c17f");
    /// assert_eq!(HexColor::parse("#FFF").unwrap().to_string(), "#ffffff");
    /// ```
    pub fn parse(value: &str) -> Result<Self, PaletteError> {
        parse_hex(value).map(HexColor)
    }

    /// Returns the color's channels.
    pub fn rgb(&self) -> Rgb {
        self.0
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        HexColor(rgb)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
