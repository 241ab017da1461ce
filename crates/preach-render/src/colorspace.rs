//! Hex, RGB and HSL conversions for palette colors.
//!
//! Palette values are authored as hex strings. Consumers of the generated
//! color-table module often want the same colors as channel triples, so every
//! leaf is also exposed as [`Rgb`] and [`Hsl`]:
//!
//! ```rust
//! use preach_render::colorspace::{hex_to_hsl, hex_to_rgb, Hsl, Rgb};
//!
//! assert_eq!(hex_to_rgb("#FFFFFF").unwrap(), Rgb { r: 255, g: 255, b: 255 });
//! assert_eq!(hex_to_hsl("#FFFFFF").unwrap(), Hsl { h: 0, s: 0, l: 100 });
//! ```
//!
//! All conversions are pure: the same input always yields the same output.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::PaletteError;
use crate::palette::{ColorNode, ColorTable};

// ─── RGB / HSL types ────────────────────────────────────────────────────────

/// A simple RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An HSL color with integer components.
///
/// `h` is in degrees (`0..360`), `s` and `l` are percentages (`0..=100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Rgb {
    /// Converts to HSL, rounding each component to the nearest integer.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Hsl {
                h: 0,
                s: 0,
                l: percent(l),
            };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl {
            h: ((sector * 60.0).round() as u16) % 360,
            s: percent(s),
            l: percent(l),
        }
    }

    /// Formats as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

// ─── Parsing ────────────────────────────────────────────────────────────────

/// Parses a `#rrggbb` or `#rgb` hex color.
pub fn parse_hex(value: &str) -> Result<Rgb, PaletteError> {
    let invalid = |message: &str| PaletteError::InvalidColor {
        value: value.to_string(),
        message: message.to_string(),
    };

    let hex = value
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| invalid("expected a leading '#'"))?;

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("contains non-hex digits"));
    }

    let channel = |digits: &str| {
        u8::from_str_radix(digits, 16).map_err(|_| invalid("contains non-hex digits"))
    };

    match hex.len() {
        // 3-digit hex: #rgb -> #rrggbb
        3 => Ok(Rgb {
            r: channel(&hex[0..1])? * 17,
            g: channel(&hex[1..2])? * 17,
            b: channel(&hex[2..3])? * 17,
        }),
        6 => Ok(Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        _ => Err(invalid("must be 3 or 6 digits")),
    }
}

/// Converts a hex color string to RGB.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, PaletteError> {
    parse_hex(hex)
}

/// Converts a hex color string to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, PaletteError> {
    parse_hex(hex).map(Rgb::to_hsl)
}

// ─── Derived tables ─────────────────────────────────────────────────────────

/// A derived value, or a group mirroring a palette group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DerivedNode<T> {
    Value(T),
    Group(DerivedTable<T>),
}

/// A palette table with every color replaced by a derived value.
///
/// Keys and nesting are exactly those of the source [`ColorTable`], so any
/// key chain that reaches a color in the palette reaches its derived value
/// here. Serializes as a JSON object in palette order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DerivedTable<T> {
    entries: IndexMap<String, DerivedNode<T>>,
}

impl<T> DerivedTable<T> {
    /// Builds the table by converting every color of `table`.
    pub fn from_table(table: &ColorTable, convert: fn(Rgb) -> T) -> Self {
        let entries = table
            .iter()
            .map(|(key, node)| {
                let derived = match node {
                    ColorNode::Leaf(color) => DerivedNode::Value(convert(color.rgb())),
                    ColorNode::Group(group) => {
                        DerivedNode::Group(DerivedTable::from_table(group, convert))
                    }
                };
                (key.to_string(), derived)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&DerivedNode<T>> {
        self.entries.get(key)
    }

    /// Follows a chain of authored keys down to a derived value.
    pub fn lookup(&self, keys: &[&str]) -> Option<&T> {
        let (first, rest) = keys.split_first()?;
        match (self.get(first)?, rest.is_empty()) {
            (DerivedNode::Value(value), true) => Some(value),
            (DerivedNode::Group(group), false) => group.lookup(rest),
            _ => None,
        }
    }

    /// Iterates top-level entries in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DerivedNode<T>)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// HSL and RGB tables shaped like the palette they were derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedTables {
    pub hsl: DerivedTable<Hsl>,
    pub rgb: DerivedTable<Rgb>,
}

impl DerivedTables {
    /// Computes both tables from a palette table.
    pub fn from_table(table: &ColorTable) -> Self {
        Self {
            hsl: DerivedTable::from_table(table, Rgb::to_hsl),
            rgb: DerivedTable::from_table(table, |rgb| rgb),
        }
    }
}
