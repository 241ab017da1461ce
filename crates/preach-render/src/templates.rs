//! Shared MiniJinja environment for the generated artifacts.
//!
//! All templates are embedded in the binary. Auto-escaping is chosen from the
//! template name: `.html` templates are HTML-escaped, everything else
//! (CSS, JavaScript) is emitted verbatim.

use minijinja::{AutoEscape, Environment};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::RenderError;

pub(crate) const STYLESHEET: (&str, &str) = (
    "stylesheet.css",
    include_str!("../templates/stylesheet.css.j2"),
);
pub(crate) const COLOR_MODULE: (&str, &str) =
    ("preach.js", include_str!("../templates/preach.js.j2"));
pub(crate) const DEMO_PAGE: (&str, &str) =
    ("index.html", include_str!("../templates/index.html.j2"));

static ENVIRONMENT: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_auto_escape_callback(|name| {
        if name.ends_with(".html") {
            AutoEscape::Html
        } else {
            AutoEscape::None
        }
    });
    env
});

/// Renders one of the embedded templates.
pub(crate) fn render<S: Serialize>(
    (name, source): (&str, &str),
    context: S,
) -> Result<String, RenderError> {
    Ok(ENVIRONMENT.render_named_str(name, source, context)?)
}
