//! Directive parsing: template string → directive tree.
//!
//! Templates are scanned left to right into a flat sequence of [`Node`]s;
//! block directives carry their body as a nested sequence, so a parsed
//! template is a tree. Blocks of the same kind nest to arbitrary depth —
//! a close tag is matched against its opener by depth counting, not by a
//! first-match scan.
//!
//! Parsing never fails. An opener with no matching close tag, or a close
//! tag with no opener, is not a directive at all: it stays in the output as
//! literal text, and a [`ParseWarning`] records it for strict-mode
//! diagnostics.

use regex::Regex;
use std::sync::LazyLock;

/// One node of a parsed template.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    /// Literal text, emitted verbatim.
    Text(String),
    /// `{{key}}` — HTML-escaped interpolation.
    Escaped { key: String },
    /// `{{{key}}}` — raw interpolation, for pre-sanitized HTML blobs.
    Raw { key: String },
    /// `{{#each key}} body {{/each}}` — loop over a context array.
    Each { key: String, body: Vec<Node> },
    /// `{{#if_active "tag" key}} body {{/if_active}}` — emitted when the
    /// key's value is exactly the tag string.
    IfActive {
        tag: String,
        key: String,
        body: Vec<Node>,
    },
    /// `{{#if key}} body {{/if}}` — emitted when the key's value is truthy.
    If { key: String, body: Vec<Node> },
}

/// A structural problem noticed while parsing.
///
/// Warnings never affect output; the renderer logs them when strict mode
/// is on.
#[derive(Debug, Clone)]
pub(crate) struct ParseWarning {
    /// Byte offset of the offending tag in the outermost template.
    pub offset: usize,
    /// Human-readable description naming the directive.
    pub message: String,
}

static RAW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{\{\{(\w+)\}\}\}").expect("raw interpolation pattern"));
static ESCAPED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{\{(\w+)\}\}").expect("escaped interpolation pattern"));
static EACH_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{\{#each\s+(\w+)\}\}").expect("each open pattern"));
static EACH_OPEN_ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{#each\s+\w+\}\}").expect("each open-any pattern"));
static IF_ACTIVE_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\{\{#if_active\s+"([^"]+)"\s+(\w+)\}\}"#).expect("if_active open pattern")
});
static IF_ACTIVE_OPEN_ANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{#if_active\s+"[^"]+"\s+\w+\}\}"#).expect("if_active open-any pattern")
});
static IF_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{\{#if\s+(\w+)\}\}").expect("if open pattern"));
static IF_OPEN_ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{#if\s+\w+\}\}").expect("if open-any pattern"));

const EACH_CLOSE: &str = "{{/each}}";
const IF_ACTIVE_CLOSE: &str = "{{/if_active}}";
const IF_CLOSE: &str = "{{/if}}";

/// Parse a template into a node tree plus any structural warnings.
pub(crate) fn parse(template: &str) -> (Vec<Node>, Vec<ParseWarning>) {
    let mut warnings = Vec::new();
    let nodes = parse_slice(template, 0, &mut warnings);
    (nodes, warnings)
}

/// Parse one slice of the template. `base` is the slice's byte offset in
/// the outermost template, used to report absolute warning offsets.
fn parse_slice(input: &str, base: usize, warnings: &mut Vec<ParseWarning>) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut pos = 0;

    while pos < input.len() {
        let Some(brace) = input[pos..].find("{{") else {
            text.push_str(&input[pos..]);
            break;
        };
        text.push_str(&input[pos..pos + brace]);
        pos += brace;
        let rest = &input[pos..];

        // Block directives first, then raw before escaped so triple braces
        // are never half-eaten by the double-brace pattern.
        if let Some(caps) = EACH_OPEN_RE.captures(rest) {
            let open_len = caps.get(0).map_or(0, |m| m.len());
            match find_block_end(input, pos + open_len, &EACH_OPEN_ANY, EACH_CLOSE) {
                Some((body_end, after_close)) => {
                    flush_text(&mut nodes, &mut text);
                    let body =
                        parse_slice(&input[pos + open_len..body_end], base + pos + open_len, warnings);
                    nodes.push(Node::Each {
                        key: caps[1].to_string(),
                        body,
                    });
                    pos = after_close;
                    continue;
                }
                None => {
                    warnings.push(ParseWarning {
                        offset: base + pos,
                        message: format!("unclosed {{{{#each {}}}}} directive", &caps[1]),
                    });
                    // fall through: the opener stays literal
                }
            }
        } else if let Some(caps) = IF_ACTIVE_OPEN_RE.captures(rest) {
            let open_len = caps.get(0).map_or(0, |m| m.len());
            match find_block_end(input, pos + open_len, &IF_ACTIVE_OPEN_ANY, IF_ACTIVE_CLOSE) {
                Some((body_end, after_close)) => {
                    flush_text(&mut nodes, &mut text);
                    let body =
                        parse_slice(&input[pos + open_len..body_end], base + pos + open_len, warnings);
                    nodes.push(Node::IfActive {
                        tag: caps[1].to_string(),
                        key: caps[2].to_string(),
                        body,
                    });
                    pos = after_close;
                    continue;
                }
                None => {
                    warnings.push(ParseWarning {
                        offset: base + pos,
                        message: format!("unclosed {{{{#if_active \"{}\"}}}} directive", &caps[1]),
                    });
                }
            }
        } else if let Some(caps) = IF_OPEN_RE.captures(rest) {
            let open_len = caps.get(0).map_or(0, |m| m.len());
            match find_block_end(input, pos + open_len, &IF_OPEN_ANY, IF_CLOSE) {
                Some((body_end, after_close)) => {
                    flush_text(&mut nodes, &mut text);
                    let body =
                        parse_slice(&input[pos + open_len..body_end], base + pos + open_len, warnings);
                    nodes.push(Node::If {
                        key: caps[1].to_string(),
                        body,
                    });
                    pos = after_close;
                    continue;
                }
                None => {
                    warnings.push(ParseWarning {
                        offset: base + pos,
                        message: format!("unclosed {{{{#if {}}}}} directive", &caps[1]),
                    });
                }
            }
        } else if let Some(caps) = RAW_RE.captures(rest) {
            flush_text(&mut nodes, &mut text);
            nodes.push(Node::Raw {
                key: caps[1].to_string(),
            });
            pos += caps.get(0).map_or(0, |m| m.len());
            continue;
        } else if let Some(caps) = ESCAPED_RE.captures(rest) {
            flush_text(&mut nodes, &mut text);
            nodes.push(Node::Escaped {
                key: caps[1].to_string(),
            });
            pos += caps.get(0).map_or(0, |m| m.len());
            continue;
        } else if rest.starts_with("{{/") {
            // A close tag with no matching opener at this level.
            let tag_end = rest.find("}}").map_or(rest.len(), |i| i + 2);
            warnings.push(ParseWarning {
                offset: base + pos,
                message: format!("stray close tag {}", &rest[..tag_end]),
            });
        } else if rest.starts_with("{{#") {
            warnings.push(ParseWarning {
                offset: base + pos,
                message: "malformed block directive".to_string(),
            });
        }

        // Not a directive (or a malformed one): `{{` is literal text.
        text.push_str("{{");
        pos += 2;
    }

    flush_text(&mut nodes, &mut text);
    nodes
}

fn flush_text(nodes: &mut Vec<Node>, text: &mut String) {
    if !text.is_empty() {
        nodes.push(Node::Text(std::mem::take(text)));
    }
}

/// Find the close tag matching an already-consumed opener.
///
/// `from` points just past the opener. Returns the body end offset (start
/// of the close tag) and the offset just past the close tag. Nested openers
/// of the same kind between `from` and a candidate close tag push the depth
/// up, so the close tag of an inner block is never mistaken for the outer
/// one.
fn find_block_end(
    input: &str,
    from: usize,
    open_any: &Regex,
    close: &str,
) -> Option<(usize, usize)> {
    let mut depth: usize = 1;
    let mut cursor = from;

    loop {
        let rel = input[cursor..].find(close)?;
        let close_start = cursor + rel;
        depth += open_any.find_iter(&input[cursor..close_start]).count();
        depth -= 1;
        if depth == 0 {
            return Some((close_start, close_start + close.len()));
        }
        cursor = close_start + close.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_one_node() {
        let (nodes, warnings) = parse("<p>hello</p>");
        assert_eq!(nodes, vec![Node::Text("<p>hello</p>".to_string())]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_interpolations() {
        let (nodes, _) = parse("a {{x}} b {{{y}}} c");
        assert_eq!(
            nodes,
            vec![
                Node::Text("a ".to_string()),
                Node::Escaped {
                    key: "x".to_string()
                },
                Node::Text(" b ".to_string()),
                Node::Raw {
                    key: "y".to_string()
                },
                Node::Text(" c".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_each_matches_by_depth() {
        let (nodes, warnings) = parse("{{#each a}}X{{#each b}}Y{{/each}}Z{{/each}}");
        assert!(warnings.is_empty());
        let Node::Each {
            key,
            body,
        } = &nodes[0]
        else {
            panic!("expected each node, got {nodes:?}");
        };
        assert_eq!(key, "a");
        assert_eq!(body.len(), 3);
        assert!(matches!(&body[1], Node::Each { key, .. } if key == "b"));
    }

    #[test]
    fn test_if_open_does_not_match_if_active() {
        let (nodes, warnings) = parse(r#"{{#if_active "mice" activePage}}here{{/if_active}}"#);
        assert!(warnings.is_empty());
        assert!(matches!(
            &nodes[0],
            Node::IfActive { tag, key, .. } if tag == "mice" && key == "activePage"
        ));
    }

    #[test]
    fn test_unclosed_block_stays_literal() {
        let (nodes, warnings) = parse("{{#if show}}no close");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("unclosed"));
        // the opener text survives verbatim
        let rendered: String = nodes
            .iter()
            .map(|n| match n {
                Node::Text(t) => t.clone(),
                other => panic!("expected only text nodes, got {other:?}"),
            })
            .collect();
        assert_eq!(rendered, "{{#if show}}no close");
    }

    #[test]
    fn test_stray_close_tag_stays_literal() {
        let (nodes, warnings) = parse("a{{/each}}b");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("stray close tag"));
        let rendered: String = nodes
            .iter()
            .map(|n| match n {
                Node::Text(t) => t.clone(),
                other => panic!("unexpected node {other:?}"),
            })
            .collect();
        assert_eq!(rendered, "a{{/each}}b");
    }

    #[test]
    fn test_css_braces_are_not_directives() {
        let (nodes, warnings) = parse("body { color: red; } {{name}}");
        assert!(warnings.is_empty());
        assert!(matches!(&nodes[1], Node::Escaped { key } if key == "name"));
    }

    #[test]
    fn test_three_level_if_nesting() {
        let (nodes, warnings) =
            parse("{{#if a}}1{{#if b}}2{{#if c}}3{{/if}}{{/if}}{{/if}}");
        assert!(warnings.is_empty());
        let Node::If {
            body, ..
        } = &nodes[0]
        else {
            panic!("expected if node");
        };
        let Node::If {
            body: inner, ..
        } = &body[1]
        else {
            panic!("expected nested if node");
        };
        assert!(matches!(&inner[1], Node::If { key, .. } if key == "c"));
    }
}
