//! The static demo page.
//!
//! The page shows one swatch per adaptive variable and one per
//! theme-specific color. Swatches follow the DOM contract of the demo
//! script ([`DEMO_SCRIPT`]):
//!
//! - `data-color="--preach-accent"`: copy the live value of the variable
//! - `data-color="#c8c17f/dark-accent"`: copy the hex value
//!
//! A `#copy-css` button copies the whole stylesheet.

use serde::Serialize;

use crate::css::VariableNames;
use crate::error::RenderError;
use crate::flatten::flatten;
use crate::palette::{Palette, DARK, LIGHT};
use crate::templates;

/// Browser script wiring swatch clicks to the clipboard.
pub const DEMO_SCRIPT: &str = include_str!("../assets/main.js");

/// A clickable color swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub label: String,
    /// `data-color` attribute value.
    pub data_color: String,
    /// CSS `background` value.
    pub background: String,
}

/// A titled group of swatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwatchSection {
    pub title: String,
    pub swatches: Vec<Swatch>,
}

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    prefix: &'a str,
    stylesheet: &'a str,
    script: &'a str,
    sections: Vec<SwatchSection>,
}

/// Builds the swatch sections for a palette.
pub fn swatch_sections(
    palette: &Palette,
    prefix: &str,
) -> Result<Vec<SwatchSection>, RenderError> {
    let names = VariableNames::new(prefix)?;

    let adaptive_source = match palette.themes() {
        Some(themes) => &themes.light,
        None => palette.table(),
    };
    let adaptive = SwatchSection {
        title: "Adaptive".to_string(),
        swatches: flatten(adaptive_source)
            .into_iter()
            .map(|v| {
                let variable = names.adaptive(&v.path);
                Swatch {
                    label: v.path,
                    background: format!("var({})", variable),
                    data_color: variable,
                }
            })
            .collect(),
    };

    let Some(themes) = palette.themes() else {
        return Ok(vec![adaptive]);
    };

    let fixed = |title: &str, theme: &str, table| SwatchSection {
        title: title.to_string(),
        swatches: flatten(table)
            .into_iter()
            .map(|v| {
                let label = format!("{}-{}", theme, v.path);
                Swatch {
                    data_color: format!("{}/{}", v.color, label),
                    background: v.color.to_string(),
                    label,
                }
            })
            .collect(),
    };

    Ok(vec![
        adaptive,
        fixed("Light", LIGHT, &themes.light),
        fixed("Dark", DARK, &themes.dark),
    ])
}

/// Renders `index.html`, linking the given stylesheet and script files.
pub fn render_demo_page(
    palette: &Palette,
    prefix: &str,
    stylesheet: &str,
    script: &str,
) -> Result<String, RenderError> {
    let context = PageContext {
        title: "preach",
        prefix,
        stylesheet,
        script,
        sections: swatch_sections(palette, prefix)?,
    };
    templates::render(templates::DEMO_PAGE, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{ColorTable, HexColor};

    fn hex(value: &str) -> HexColor {
        HexColor::parse(value).unwrap()
    }

    fn themed() -> Palette {
        Palette::from_table(
            ColorTable::new()
                .group("light", ColorTable::new().color("accent", hex("#E4D86C")))
                .group("dark", ColorTable::new().color("accent", hex("#C8C17F"))),
        )
        .unwrap()
    }

    #[test]
    fn test_themed_sections() {
        let sections = swatch_sections(&themed(), "preach-").unwrap();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].swatches[0].data_color, "--preach-accent");
        assert_eq!(sections[0].swatches[0].background, "var(--preach-accent)");
        assert_eq!(sections[2].swatches[0].data_color, "#c8c17f/dark-accent");
        assert_eq!(sections[2].swatches[0].label, "dark-accent");
    }

    #[test]
    fn test_flat_sections() {
        let palette = Palette::from_table(ColorTable::new().color("text", hex("#EDEEEE"))).unwrap();
        let sections = swatch_sections(&palette, "preach-").unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].swatches[0].data_color, "--preach-text");
    }

    #[test]
    fn test_page_contract() {
        let page = render_demo_page(&themed(), "preach-", "preach.css", "main.js").unwrap();
        assert!(page.contains(r#"id="copy-css""#));
        assert!(page.contains(r#"data-color="--preach-accent""#));
        assert!(page.contains(r#"href="preach.css""#));
        assert!(page.contains(r#"<script type="module" src="main.js">"#));
    }

    #[test]
    fn test_script_reads_data_color() {
        assert!(DEMO_SCRIPT.contains("dataset.color"));
        assert!(DEMO_SCRIPT.contains("copy-css"));
    }

    #[test]
    fn test_page_rejects_invalid_prefix() {
        let err = render_demo_page(&themed(), "x\"><script>-", "preach.css", "main.js")
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidPrefix(_)));
    }
}
