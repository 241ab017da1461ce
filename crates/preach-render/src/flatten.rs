//! Flattening nested color tables into dash-case variant paths.
//!
//! Every leaf of a [`ColorTable`] becomes one [`ColorVariant`] whose path is
//! the chain of its keys, each converted to dash-case and joined with `-`:
//!
//! | Table                                 | Path               |
//! |---------------------------------------|--------------------|
//! | `accentHover: "#BDB675"`              | `accent-hover`     |
//! | `light: { textOnAccent: "#25220A" }`  | `light-text-on-accent` |
//! | `primary: { DEFAULT: "#000000" }`     | `primary`          |
//!
//! Traversal is depth-first in key order, so the variant order matches the
//! order the palette was authored in.

use indexmap::IndexSet;
use serde::Serialize;

use crate::palette::{ColorNode, ColorTable, HexColor};

/// Key that attaches its color to the parent path instead of adding a segment.
///
/// Matched case-insensitively.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// One flattened palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorVariant {
    /// Dash-case key path, e.g. `accent-hover`.
    pub path: String,
    pub color: HexColor,
}

/// Flattens a table into variants, depth-first in key order.
///
/// A leaf whose path would be empty (a root-level `DEFAULT`) is dropped.
///
/// ```rust
/// use preach_render::flatten::flatten;
/// use preach_render::palette::{ColorTable, HexColor};
///
/// let table = ColorTable::new().group(
///     "primary",
///     ColorTable::new()
///         .color("DEFAULT", HexColor::parse("#000000").unwrap())
///         .color("onSurface", HexColor::parse("#ffffff").unwrap()),
/// );
///
/// let paths: Vec<String> = flatten(&table).into_iter().map(|v| v.path).collect();
/// assert_eq!(paths, vec!["primary", "primary-on-surface"]);
/// ```
pub fn flatten(table: &ColorTable) -> Vec<ColorVariant> {
    let mut variants = Vec::new();
    flatten_into(table, "", &mut variants);
    variants
}

fn flatten_into(table: &ColorTable, parent: &str, out: &mut Vec<ColorVariant>) {
    for (key, node) in table.iter() {
        let path = child_path(parent, key);
        match node {
            ColorNode::Leaf(color) => {
                if !path.is_empty() {
                    out.push(ColorVariant {
                        path,
                        color: *color,
                    });
                }
            }
            ColorNode::Group(group) => flatten_into(group, &path, out),
        }
    }
}

fn child_path(parent: &str, key: &str) -> String {
    if key.eq_ignore_ascii_case(DEFAULT_KEY) {
        return parent.to_string();
    }

    let segment = dash_case(key);
    match (parent.is_empty(), segment.is_empty()) {
        (_, true) => parent.to_string(),
        (true, false) => segment,
        (false, false) => format!("{}-{}", parent, segment),
    }
}

/// Converts a camelCase, PascalCase or snake_case identifier to dash-case.
///
/// Words break at a lowercase or digit followed by an uppercase letter, at
/// the last capital of an acronym (`HTMLColor` → `html-color`), and at any
/// character that is not alphanumeric.
///
/// ```rust
/// use preach_render::flatten::dash_case;
///
/// assert_eq!(dash_case("textOnAccent"), "text-on-accent");
/// assert_eq!(dash_case("HTMLColor"), "html-color");
/// assert_eq!(dash_case("gray_100"), "gray-100");
/// ```
pub fn dash_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words.join("-")
}

/// Returns paths that occur more than once, in first-seen order.
///
/// Later duplicates silently override earlier ones in CSS, so callers
/// usually want to warn about them.
pub fn duplicate_paths(variants: &[ColorVariant]) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    let mut duplicates: IndexSet<&str> = IndexSet::new();
    for variant in variants {
        if !seen.insert(&variant.path) {
            duplicates.insert(&variant.path);
        }
    }
    duplicates.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn hex(value: &str) -> HexColor {
        HexColor::parse(value).unwrap()
    }

    fn paths(table: &ColorTable) -> Vec<String> {
        flatten(table).into_iter().map(|v| v.path).collect()
    }

    #[test]
    fn test_dash_case() {
        assert_eq!(dash_case("background"), "background");
        assert_eq!(dash_case("accentHover"), "accent-hover");
        assert_eq!(dash_case("textOnAccent"), "text-on-accent");
        assert_eq!(dash_case("AccentBorder"), "accent-border");
        assert_eq!(dash_case("HTMLColor"), "html-color");
        assert_eq!(dash_case("accent2Hover"), "accent2-hover");
        assert_eq!(dash_case("gray100"), "gray100");
        assert_eq!(dash_case("already-dashed"), "already-dashed");
        assert_eq!(dash_case("snake_case key"), "snake-case-key");
        assert_eq!(dash_case("DEFAULT"), "default");
        assert_eq!(dash_case("__"), "");
    }

    #[test]
    fn test_flat_table() {
        let table = ColorTable::new()
            .color("background", hex("#1B1C1C"))
            .color("accentHover", hex("#BDB675"));
        let variants = flatten(&table);
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].path, "background");
        assert_eq!(variants[0].color.to_string(), "#1b1c1c");
        assert_eq!(variants[1].path, "accent-hover");
    }

    #[test]
    fn test_default_key_drops_segment() {
        let table = ColorTable::new().group(
            "primary",
            ColorTable::new().color("DEFAULT", hex("#000000")),
        );
        assert_eq!(paths(&table), vec!["primary"]);
    }

    #[test]
    fn test_default_key_is_case_insensitive() {
        let table = ColorTable::new().group(
            "primary",
            ColorTable::new()
                .color("default", hex("#000000"))
                .color("Default", hex("#111111")),
        );
        assert_eq!(paths(&table), vec!["primary", "primary"]);
    }

    #[test]
    fn test_root_default_is_dropped() {
        let table = ColorTable::new()
            .color("DEFAULT", hex("#000000"))
            .color("text", hex("#ffffff"));
        assert_eq!(paths(&table), vec!["text"]);
    }

    #[test]
    fn test_depth_first_parent_before_children() {
        let table = ColorTable::new()
            .group(
                "light",
                ColorTable::new()
                    .color("accent", hex("#E4D86C"))
                    .group(
                        "accentState",
                        ColorTable::new().color("hover", hex("#D9CD60")),
                    ),
            )
            .color("text", hex("#1B1C1C"));
        assert_eq!(
            paths(&table),
            vec!["light-accent", "light-accent-state-hover", "text"]
        );
    }

    #[test]
    fn test_empty_group_emits_nothing() {
        let table = ColorTable::new().group("empty", ColorTable::new());
        assert!(flatten(&table).is_empty());
    }

    #[test]
    fn test_duplicate_paths() {
        let table = ColorTable::new()
            .color("accentHover", hex("#000000"))
            .group(
                "accent",
                ColorTable::new().color("hover", hex("#111111")),
            )
            .color("text", hex("#222222"));
        assert_eq!(duplicate_paths(&flatten(&table)), vec!["accent-hover"]);
    }

    fn hex_strategy() -> impl Strategy<Value = HexColor> {
        (any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(r, g, b)| HexColor::from(crate::colorspace::Rgb { r, g, b }))
    }

    fn table_strategy() -> impl Strategy<Value = ColorTable> {
        let leaf = prop::collection::vec(("[a-z]{1,5}", hex_strategy()), 1..6).prop_map(
            |entries| {
                entries
                    .into_iter()
                    .fold(ColorTable::new(), |table, (key, color)| {
                        table.color(key, color)
                    })
            },
        );
        leaf.prop_recursive(3, 48, 5, |inner| {
            prop::collection::vec(
                ("[a-z]{1,5}", prop_oneof![
                    hex_strategy().prop_map(ColorNode::Leaf),
                    inner.prop_map(ColorNode::Group),
                ]),
                1..6,
            )
            .prop_map(|entries| {
                let mut table = ColorTable::new();
                for (key, node) in entries {
                    table.insert(key, node);
                }
                table
            })
        })
    }

    proptest! {
        #[test]
        fn test_flatten_renest_round_trip(table in table_strategy()) {
            let variants = flatten(&table);
            let original: BTreeSet<(String, String)> = variants
                .iter()
                .map(|v| (v.path.clone(), v.color.to_string()))
                .collect();

            let renested = ColorTable::from_variants(&variants);
            let recovered: BTreeSet<(String, String)> = flatten(&renested)
                .iter()
                .map(|v| (v.path.clone(), v.color.to_string()))
                .collect();

            prop_assert_eq!(original, recovered);
        }

        #[test]
        fn test_paths_never_empty(table in table_strategy()) {
            prop_assert!(flatten(&table).iter().all(|v| !v.path.is_empty()));
        }
    }
}
