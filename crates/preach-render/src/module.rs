//! The color-table script module served next to the demo page.
//!
//! `preach.js` exposes three constants:
//!
//! - `colors`: the palette as authored (nested, normalized hex values)
//! - `colorsHSL`: `colors` with every hex value replaced by `{ h, s, l }`
//! - `colorsRGB`: `colors` with every hex value replaced by `{ r, g, b }`
//!
//! The derived tables share the keys and nesting of `colors`, so
//! `colorsHSL.light.accentHover` is the HSL form of `colors.light.accentHover`.

use serde::Serialize;

use crate::colorspace::DerivedTables;
use crate::error::RenderError;
use crate::palette::Palette;
use crate::templates;

#[derive(Serialize)]
struct ModuleContext {
    colors: String,
    hsl: String,
    rgb: String,
}

/// Renders the `preach.js` color-table module for a palette.
pub fn render_color_module(palette: &Palette) -> Result<String, RenderError> {
    let derived = DerivedTables::from_table(palette.table());
    let context = ModuleContext {
        colors: serde_json::to_string_pretty(palette.table())?,
        hsl: serde_json::to_string_pretty(&derived.hsl)?,
        rgb: serde_json::to_string_pretty(&derived.rgb)?,
    };
    templates::render(templates::COLOR_MODULE, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{ColorTable, HexColor};

    fn palette() -> Palette {
        Palette::from_table(
            ColorTable::new()
                .group(
                    "light",
                    ColorTable::new().color("textOnAccent", HexColor::parse("#FFFFFF").unwrap()),
                )
                .group(
                    "dark",
                    ColorTable::new().color("textOnAccent", HexColor::parse("#000000").unwrap()),
                ),
        )
        .unwrap()
    }

    #[test]
    fn test_exports() {
        let module = render_color_module(&palette()).unwrap();
        assert!(module.contains("export const colors = {"));
        assert!(module.contains("export const colorsHSL = {"));
        assert!(module.contains("export const colorsRGB = {"));
    }

    #[test]
    fn test_colors_keep_authored_keys() {
        let module = render_color_module(&palette()).unwrap();
        assert!(module.contains(r##""textOnAccent": "#ffffff""##));
    }

    #[test]
    fn test_derived_tables_use_authored_keys() {
        let module = render_color_module(&palette()).unwrap();
        let hsl = exported(&module, "colorsHSL");
        assert_eq!(hsl["light"]["textOnAccent"]["l"], 100);
        assert_eq!(exported(&module, "colorsRGB")["dark"]["textOnAccent"]["r"], 0);
        assert!(!module.contains("text-on-accent"));
    }

    #[test]
    fn test_every_color_key_resolves_in_derived_tables() {
        let yaml = r##"
background: "#1B1C1C"
accentHover: "#BDB675"
primary:
  DEFAULT: "#000000"
  onSurface: "#FFFFFF"
"##;
        for palette in [
            crate::palette::load_palette_yaml(yaml).unwrap().palette,
            crate::palette::builtin_palette().unwrap().palette,
        ] {
            let module = render_color_module(&palette).unwrap();
            let colors = exported(&module, "colors");
            let hsl = exported(&module, "colorsHSL");
            let rgb = exported(&module, "colorsRGB");

            let mut pointers = Vec::new();
            leaf_pointers(&colors, String::new(), &mut pointers);
            assert!(!pointers.is_empty());
            for pointer in pointers {
                assert!(
                    hsl.pointer(&pointer).and_then(|v| v.get("h")).is_some(),
                    "colorsHSL is missing {}",
                    pointer
                );
                assert!(
                    rgb.pointer(&pointer).and_then(|v| v.get("r")).is_some(),
                    "colorsRGB is missing {}",
                    pointer
                );
            }
        }
    }

    fn exported(module: &str, name: &str) -> serde_json::Value {
        let marker = format!("export const {} = ", name);
        let start = module.find(&marker).unwrap() + marker.len();
        let rest = &module[start..];
        let end = rest.find(";\n").unwrap();
        serde_json::from_str(&rest[..end]).unwrap()
    }

    fn leaf_pointers(value: &serde_json::Value, prefix: String, out: &mut Vec<String>) {
        match value {
            serde_json::Value::Object(map) => {
                for (key, child) in map {
                    leaf_pointers(child, format!("{}/{}", prefix, key), out);
                }
            }
            _ => out.push(prefix),
        }
    }
}
