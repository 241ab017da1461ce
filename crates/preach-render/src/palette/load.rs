//! YAML palette loading.

use std::fmt;
use std::path::Path;

use super::{ColorNode, ColorTable, HexColor, Palette};
use crate::error::PaletteError;

/// The palette shipped with preach.
pub const BUILTIN_PALETTE: &str = include_str!("../../palettes/preach.yaml");

/// An entry skipped while loading a palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteIssue {
    /// Dotted key path of the skipped entry, as authored (`dark.accent`).
    pub path: String,
    /// Why it was skipped.
    pub message: String,
}

impl fmt::Display for PaletteIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A validated palette together with the entries dropped while loading it.
#[derive(Debug, Clone)]
pub struct LoadedPalette {
    pub palette: Palette,
    pub issues: Vec<PaletteIssue>,
}

/// Loads the builtin preach palette.
pub fn builtin_palette() -> Result<LoadedPalette, PaletteError> {
    load_palette_yaml(BUILTIN_PALETTE)
}

/// Loads a palette from a YAML file.
///
/// # Errors
///
/// Returns a [`PaletteError`] if the file cannot be read, is not a YAML
/// mapping, or has malformed themes.
pub fn load_palette_file<P: AsRef<Path>>(path: P) -> Result<LoadedPalette, PaletteError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| PaletteError::Load {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    load_palette_yaml(&content).map_err(|err| match err {
        PaletteError::Parse { path: None, message } => PaletteError::Parse {
            path: Some(path.to_path_buf()),
            message,
        },
        other => other,
    })
}

/// Loads a palette from YAML content.
///
/// Key order is preserved. Entries that are neither a hex string nor a
/// mapping are skipped and reported in [`LoadedPalette::issues`].
///
/// # Example
///
/// ```rust
/// use preach_render::palette::load_palette_yaml;
///
/// let loaded = load_palette_yaml(r##"
/// background: "#1B1C1C"
/// accent: "#C8C17F"
/// broken: 42
/// "##).unwrap();
///
/// assert_eq!(loaded.palette.table().len(), 2);
/// assert_eq!(loaded.issues.len(), 1);
/// assert_eq!(loaded.issues[0].path, "broken");
/// ```
pub fn load_palette_yaml(yaml: &str) -> Result<LoadedPalette, PaletteError> {
    let root: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| PaletteError::Parse {
        path: None,
        message: e.to_string(),
    })?;

    let mapping = root.as_mapping().ok_or_else(|| PaletteError::Parse {
        path: None,
        message: "palette must be a YAML mapping".to_string(),
    })?;

    let mut issues = Vec::new();
    let table = parse_mapping(mapping, "", &mut issues);
    let palette = Palette::from_table(table)?;

    Ok(LoadedPalette { palette, issues })
}

fn parse_mapping(
    mapping: &serde_yaml::Mapping,
    parent: &str,
    issues: &mut Vec<PaletteIssue>,
) -> ColorTable {
    let mut table = ColorTable::new();

    for (key, value) in mapping {
        let Some(name) = key.as_str() else {
            issues.push(PaletteIssue {
                path: if parent.is_empty() { "<root>".to_string() } else { parent.to_string() },
                message: format!("key must be a string, got {}", describe(key)),
            });
            continue;
        };

        let path = if parent.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", parent, name)
        };

        match value {
            serde_yaml::Value::String(s) => match HexColor::parse(s) {
                Ok(color) => {
                    table.insert(name, ColorNode::Leaf(color));
                }
                Err(err) => issues.push(PaletteIssue {
                    path,
                    message: err.to_string(),
                }),
            },
            serde_yaml::Value::Mapping(nested) => {
                let group = parse_mapping(nested, &path, issues);
                table.insert(name, ColorNode::Group(group));
            }
            other => issues.push(PaletteIssue {
                path,
                message: format!("expected a hex color or a mapping, got {}", describe(other)),
            }),
        }
    }

    table
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten;

    #[test]
    fn test_builtin_palette_is_clean() {
        let loaded = builtin_palette().unwrap();
        assert!(loaded.issues.is_empty(), "issues: {:?}", loaded.issues);

        let themes = loaded.palette.themes().unwrap();
        let light: Vec<String> = flatten(&themes.light).into_iter().map(|v| v.path).collect();
        let dark: Vec<String> = flatten(&themes.dark).into_iter().map(|v| v.path).collect();
        assert_eq!(light, dark);
        assert_eq!(light.len(), 31);
        assert_eq!(light[0], "background");
        assert!(light.contains(&"text-on-accent".to_string()));
    }

    #[test]
    fn test_builtin_dark_values() {
        let loaded = builtin_palette().unwrap();
        let dark = &loaded.palette.themes().unwrap().dark;
        assert_eq!(
            dark.get("accent"),
            Some(&ColorNode::Leaf(HexColor::parse("#C8C17F").unwrap()))
        );
    }

    #[test]
    fn test_preserves_key_order() {
        let loaded = load_palette_yaml(
            r##"
zeta: "#000000"
alpha: "#111111"
mid: "#222222"
"##,
        )
        .unwrap();
        let keys: Vec<&str> = loaded.palette.table().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_nested_issue_paths() {
        let loaded = load_palette_yaml(
            r##"
light:
  accent: "#E4D86C"
  broken: "not a color"
dark:
  accent: "#C8C17F"
  list: [1, 2]
"##,
        )
        .unwrap();

        let paths: Vec<&str> = loaded.issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["light.broken", "dark.list"]);
        assert!(loaded.issues[1].message.contains("a sequence"));
        assert!(loaded.palette.is_themed());
    }

    #[test]
    fn test_not_a_mapping() {
        let err = load_palette_yaml("- one\n- two\n").unwrap_err();
        assert!(matches!(err, PaletteError::Parse { .. }));
    }

    #[test]
    fn test_invalid_theme_root() {
        let err = load_palette_yaml(
            r##"
light: "#FFFFFF"
dark:
  accent: "#C8C17F"
"##,
        )
        .unwrap_err();
        assert!(matches!(err, PaletteError::InvalidTheme { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_palette_file("/definitely/not/here/palette.yaml").unwrap_err();
        assert!(matches!(err, PaletteError::Load { .. }));
    }
}
