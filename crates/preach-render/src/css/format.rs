//! Pretty-printing for generated stylesheets.

use super::tree::{join, parse, Node};
use crate::error::CssError;

const INDENT: &str = "  ";

/// Reformats CSS with one item per line and two-space indentation.
///
/// Comments are kept, runs of blank lines collapse to one, top-level rules
/// are separated by a blank line, and the output ends with a newline.
///
/// ```rust
/// use preach_render::css::format_css;
///
/// let formatted = format_css(":root{--preach-text:#edeeee;--preach-muted:#b2b4b4}").unwrap();
/// assert_eq!(
///     formatted,
///     ":root {\n  --preach-text: #edeeee;\n  --preach-muted: #b2b4b4;\n}\n"
/// );
/// ```
pub fn format_css(css: &str) -> Result<String, CssError> {
    let nodes = parse(css)?;
    let mut out = String::new();
    write_nodes(&mut out, &nodes, 0);
    Ok(out)
}

fn write_nodes(out: &mut String, nodes: &[Node], depth: usize) {
    let indent = INDENT.repeat(depth);
    let mut first = true;
    let mut blank = false;

    for node in nodes {
        if let Node::Blank = node {
            blank = true;
            continue;
        }

        let top_level_rule = depth == 0 && matches!(node, Node::Rule { .. });
        if !first && (blank || top_level_rule) {
            out.push('\n');
        }
        first = false;
        blank = false;

        match node {
            Node::Comment(text) => {
                out.push_str(&format!("{}/* {} */\n", indent, text));
            }
            Node::Declaration { name, value } => {
                out.push_str(&format!("{}{}: {};\n", indent, name, join(value, false)));
            }
            Node::Statement(fragments) => {
                out.push_str(&format!("{}{};\n", indent, join(fragments, false)));
            }
            Node::Rule { prelude, children } => {
                out.push_str(&format!("{}{} {{\n", indent, join(prelude, false)));
                write_nodes(out, children, depth + 1);
                out.push_str(&format!("{}}}\n", indent));
            }
            Node::Blank => {}
        }
    }
}
