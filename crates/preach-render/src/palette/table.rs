//! The ordered, recursive color table.

use indexmap::IndexMap;
use serde::Serialize;

use super::HexColor;
use crate::flatten::{ColorVariant, DEFAULT_KEY};

/// A node of a [`ColorTable`]: either a color or a nested group.
///
/// Serializes untagged: a leaf as its hex string, a group as an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorNode {
    Leaf(HexColor),
    Group(ColorTable),
}

/// An insertion-ordered mapping from key to [`ColorNode`].
///
/// Key order is significant: it decides declaration order in the generated
/// stylesheet. Re-inserting an existing key replaces its node in place.
///
/// # Example
///
/// ```rust
/// use preach_render::palette::{ColorTable, HexColor};
///
/// let table = ColorTable::new()
///     .color("background", HexColor::parse("#1B1C1C").unwrap())
///     .group(
///         "primary",
///         ColorTable::new().color("DEFAULT", HexColor::parse("#000").unwrap()),
///     );
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorTable {
    entries: IndexMap<String, ColorNode>,
}

impl ColorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color, returning `self` for chaining.
    pub fn color(mut self, key: impl Into<String>, color: HexColor) -> Self {
        self.insert(key, ColorNode::Leaf(color));
        self
    }

    /// Adds a nested group, returning `self` for chaining.
    pub fn group(mut self, key: impl Into<String>, table: ColorTable) -> Self {
        self.insert(key, ColorNode::Group(table));
        self
    }

    /// Inserts a node, returning the node it replaced.
    pub fn insert(&mut self, key: impl Into<String>, node: ColorNode) -> Option<ColorNode> {
        self.entries.insert(key.into(), node)
    }

    pub fn get(&self, key: &str) -> Option<&ColorNode> {
        self.entries.get(key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut ColorNode> {
        self.entries.get_mut(key)
    }

    /// Returns the nested group stored under `key`, if any.
    pub fn get_group(&self, key: &str) -> Option<&ColorTable> {
        match self.get(key) {
            Some(ColorNode::Group(table)) => Some(table),
            _ => None,
        }
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-nests flattened variants by splitting their paths on `-`.
    ///
    /// A path that is both a color and a parent of other colors (`accent`
    /// next to `accent-hover`) keeps its own color under a `DEFAULT` key, so
    /// flattening the result yields the same set of paths again.
    pub fn from_variants(variants: &[ColorVariant]) -> Self {
        let mut root = ColorTable::new();
        for variant in variants {
            let segments: Vec<&str> = variant
                .path
                .split('-')
                .filter(|segment| !segment.is_empty())
                .collect();
            root.insert_path(&segments, variant.color);
        }
        root
    }

    fn insert_path(&mut self, segments: &[&str], color: HexColor) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };

        if rest.is_empty() {
            if let Some(ColorNode::Group(group)) = self.get_mut(first) {
                group.insert(DEFAULT_KEY, ColorNode::Leaf(color));
                return;
            }
            self.insert(*first, ColorNode::Leaf(color));
            return;
        }

        match self.get(first) {
            Some(ColorNode::Group(_)) => {}
            Some(ColorNode::Leaf(existing)) => {
                let promoted = ColorTable::new().color(DEFAULT_KEY, *existing);
                self.insert(*first, ColorNode::Group(promoted));
            }
            None => {
                self.insert(*first, ColorNode::Group(ColorTable::new()));
            }
        }

        if let Some(ColorNode::Group(group)) = self.get_mut(first) {
            group.insert_path(rest, color);
        }
    }
}
