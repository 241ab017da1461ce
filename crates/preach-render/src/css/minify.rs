//! Minification for generated stylesheets.

use super::tree::{join, parse, Node};
use crate::error::CssError;

/// Minifies CSS.
///
/// Comments and insignificant whitespace are removed, as is the final
/// semicolon of each block. Values are kept as written.
///
/// ```rust
/// use preach_render::css::minify_css;
///
/// let minified = minify_css(":root {\n  /* accent */\n  --preach-accent: #c8c17f;\n}\n").unwrap();
/// assert_eq!(minified, ":root{--preach-accent:#c8c17f}");
/// ```
pub fn minify_css(css: &str) -> Result<String, CssError> {
    let nodes = parse(css)?;
    let mut out = String::new();
    write_compact(&mut out, &nodes);
    Ok(out)
}

fn write_compact(out: &mut String, nodes: &[Node]) {
    let items: Vec<&Node> = nodes
        .iter()
        .filter(|node| !matches!(node, Node::Comment(_) | Node::Blank))
        .collect();

    for (i, node) in items.iter().enumerate() {
        let last = i + 1 == items.len();
        match node {
            Node::Declaration { name, value } => {
                out.push_str(name);
                out.push(':');
                out.push_str(&join(value, true));
                if !last {
                    out.push(';');
                }
            }
            Node::Statement(fragments) => {
                out.push_str(&join(fragments, true));
                out.push(';');
            }
            Node::Rule { prelude, children } => {
                out.push_str(&join(prelude, true));
                out.push('{');
                write_compact(out, children);
                out.push('}');
            }
            Node::Comment(_) | Node::Blank => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_drops_whitespace_and_comments() {
        let css = ":root {\n  /* Light Theme */\n  --preach-light-accent: #e4d86c;\n\n  --preach-accent: var(--preach-light-accent);\n}\n";
        assert_eq!(
            minify_css(css).unwrap(),
            ":root{--preach-light-accent:#e4d86c;--preach-accent:var(--preach-light-accent)}"
        );
    }

    #[test]
    fn test_minify_media_query() {
        let css = "@media (prefers-color-scheme: dark) {\n  :root {\n    --preach-accent: var(--preach-dark-accent);\n  }\n}\n";
        assert_eq!(
            minify_css(css).unwrap(),
            "@media (prefers-color-scheme:dark){:root{--preach-accent:var(--preach-dark-accent)}}"
        );
    }

    #[test]
    fn test_minify_keeps_descendant_combinator() {
        assert_eq!(
            minify_css("a  :hover , b > c { color : red ; }").unwrap(),
            "a :hover,b > c{color:red}"
        );
    }

    #[test]
    fn test_minify_is_stable() {
        let once = minify_css(":root { --a: #fff; --b: #000; }").unwrap();
        assert_eq!(minify_css(&once).unwrap(), once);
    }
}
