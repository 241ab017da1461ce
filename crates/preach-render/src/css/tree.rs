//! A minimal CSS syntax tree for reformatting stylesheets.
//!
//! The tree is built on top of `cssparser`'s tokenizer, so comments, strings,
//! escapes and nested blocks are handled the way a browser would handle
//! them. It keeps only what the formatter and minifier need: rules with their
//! preludes, declarations, comments, and the blank lines separating them.
//! Selectors and values stay as token fragments; nothing is interpreted.

use cssparser::{ParseError, Parser, ParserInput, ToCss, Token};

use crate::error::CssError;

type Failure<'i> = ParseError<'i, ()>;

/// A piece of a prelude or value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A serialized token.
    Text(String),
    /// One or more whitespace characters.
    Space,
}

/// A node of a parsed stylesheet or block body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A comment, without its delimiters and surrounding whitespace.
    Comment(String),
    /// An empty line between two items.
    Blank,
    /// `name: value`
    Declaration { name: String, value: Vec<Fragment> },
    /// `prelude { children }`, for both qualified rules and at-rules.
    Rule {
        prelude: Vec<Fragment>,
        children: Vec<Node>,
    },
    /// Anything else terminated by `;`, e.g. `@import url(a.css)`.
    Statement(Vec<Fragment>),
}

/// Parses CSS text into nodes.
pub fn parse(css: &str) -> Result<Vec<Node>, CssError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    parse_items(&mut parser).map_err(CssError::from)
}

fn parse_items<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Vec<Node>, Failure<'i>> {
    let mut nodes = Vec::new();
    let mut pending: Vec<Fragment> = Vec::new();

    loop {
        let token = match input.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(ws) => {
                if !pending.is_empty() {
                    pending.push(Fragment::Space);
                } else if ws.matches('\n').count() > 1
                    && !matches!(nodes.last(), None | Some(Node::Blank))
                {
                    nodes.push(Node::Blank);
                }
            }
            // comments inside a prelude or value are dropped
            Token::Comment(text) => {
                if pending.is_empty() {
                    nodes.push(Node::Comment(text.trim().to_string()));
                }
            }
            Token::Semicolon => {
                if let Some(node) = finish_item(std::mem::take(&mut pending)) {
                    nodes.push(node);
                }
            }
            Token::CurlyBracketBlock => {
                let children = input.parse_nested_block(|nested| parse_items(nested))?;
                nodes.push(Node::Rule {
                    prelude: trim(std::mem::take(&mut pending)),
                    children,
                });
            }
            other => push_token(input, &other, &mut pending)?,
        }
    }

    if let Some(node) = finish_item(pending) {
        nodes.push(node);
    }
    if matches!(nodes.last(), Some(Node::Blank)) {
        nodes.pop();
    }

    Ok(nodes)
}

fn push_token<'i, 't>(
    input: &mut Parser<'i, 't>,
    token: &Token<'i>,
    pending: &mut Vec<Fragment>,
) -> Result<(), Failure<'i>> {
    let closing = match token {
        Token::Function(_) | Token::ParenthesisBlock => Some(")"),
        Token::SquareBracketBlock => Some("]"),
        Token::CurlyBracketBlock => Some("}"),
        _ => None,
    };

    pending.push(Fragment::Text(token.to_css_string()));

    if let Some(closing) = closing {
        input.parse_nested_block(|nested| collect_fragments(nested, pending))?;
        pending.push(Fragment::Text(closing.to_string()));
    }

    Ok(())
}

fn collect_fragments<'i, 't>(
    input: &mut Parser<'i, 't>,
    pending: &mut Vec<Fragment>,
) -> Result<(), Failure<'i>> {
    loop {
        let token = match input.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };

        match token {
            Token::WhiteSpace(_) => pending.push(Fragment::Space),
            Token::Comment(_) => {}
            other => push_token(input, &other, pending)?,
        }
    }
}

fn finish_item(pending: Vec<Fragment>) -> Option<Node> {
    let fragments = trim(pending);
    if fragments.is_empty() {
        return None;
    }

    let is_at_rule = matches!(fragments.first(), Some(Fragment::Text(t)) if t.starts_with('@'));
    let colon = fragments
        .iter()
        .position(|f| matches!(f, Fragment::Text(t) if t == ":"));

    match colon {
        Some(colon) if !is_at_rule => Some(Node::Declaration {
            name: join(&fragments[..colon], true),
            value: trim(fragments[colon + 1..].to_vec()),
        }),
        _ => Some(Node::Statement(fragments)),
    }
}

fn trim(mut fragments: Vec<Fragment>) -> Vec<Fragment> {
    while matches!(fragments.last(), Some(Fragment::Space)) {
        fragments.pop();
    }
    let leading = fragments
        .iter()
        .take_while(|f| matches!(f, Fragment::Space))
        .count();
    fragments.drain(..leading);
    fragments
}

/// Joins fragments into text, collapsing whitespace.
///
/// Spaces never follow `(` or precede `)` and `,`. In `compact` mode they are
/// also dropped after `:` and `,`.
pub fn join(fragments: &[Fragment], compact: bool) -> String {
    let mut out = String::new();
    let mut pending_space = false;

    for fragment in fragments {
        match fragment {
            Fragment::Space => pending_space = true,
            Fragment::Text(text) => {
                if pending_space && !out.is_empty() && !tight(&out, text, compact) {
                    out.push(' ');
                }
                pending_space = false;
                out.push_str(text);
            }
        }
    }

    out
}

fn tight(before: &str, next: &str, compact: bool) -> bool {
    if before.ends_with('(') || next.starts_with(')') || next.starts_with(',') {
        return true;
    }
    compact && (before.ends_with(':') || before.ends_with(','))
}

/// A custom property (`--name: value`) found in a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CustomProperty {
    /// Compact preludes of the enclosing rules, outermost first.
    pub scope: Vec<String>,
    pub name: String,
    /// Compact value text.
    pub value: String,
}

/// Lists every custom property declaration, in document order.
///
/// Formatting differences do not affect the result, so it can be used to
/// check that two renditions of a stylesheet declare the same variables.
///
/// ```rust
/// use preach_render::css::custom_properties;
///
/// let props = custom_properties(":root { --preach-accent: #c8c17f; color: red }").unwrap();
/// assert_eq!(props.len(), 1);
/// assert_eq!(props[0].scope, vec![":root"]);
/// assert_eq!(props[0].value, "#c8c17f");
/// ```
pub fn custom_properties(css: &str) -> Result<Vec<CustomProperty>, CssError> {
    let nodes = parse(css)?;
    let mut found = Vec::new();
    collect_custom_properties(&nodes, &mut Vec::new(), &mut found);
    Ok(found)
}

fn collect_custom_properties(
    nodes: &[Node],
    scope: &mut Vec<String>,
    found: &mut Vec<CustomProperty>,
) {
    for node in nodes {
        match node {
            Node::Declaration { name, value } if name.starts_with("--") => {
                found.push(CustomProperty {
                    scope: scope.clone(),
                    name: name.clone(),
                    value: join(value, true),
                });
            }
            Node::Rule { prelude, children } => {
                scope.push(join(prelude, true));
                collect_custom_properties(children, scope, found);
                scope.pop();
            }
            _ => {}
        }
    }
}
