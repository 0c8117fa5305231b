//! Template rendering engine.
//!
//! This module provides the [`Renderer`] that resolves a parsed directive
//! tree against a [`RenderContext`] and produces the output string. The
//! renderer is pure and fail-soft: for a given (template, context) pair it
//! always produces output, missing keys degrade to empty text, and
//! malformed directive syntax passes through as literal text.
//!
//! Resolution is depth-first and left to right, so output ordering exactly
//! matches the textual ordering of directives in the template. Loop bodies
//! are rendered against a derived context (element fields, or `this` for
//! scalar elements, overlaid on the outer context); conditional bodies are
//! rendered against the outer context itself.

use serde_json::Value;

use super::context::RenderContext;
use super::parser::{self, Node};

/// HTML-escape the five reserved characters `& < > " '`.
///
/// Used for every `{{key}}` substitution; raw `{{{key}}}` substitutions
/// bypass it for HTML blobs the caller already built and escaped.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The template renderer.
///
/// Stateless apart from the strict-mode flag; one instance is shared across
/// every page render of a build. Strict mode adds warn-level diagnostics
/// for structural template problems and missing keys without changing the
/// output in any way.
///
/// # Examples
///
/// ```
/// use stackgen::templating::{RenderContext, Renderer};
///
/// let renderer = Renderer::new();
/// let mut ctx = RenderContext::new();
/// ctx.insert("name", "World");
/// ctx.insert("show", true);
///
/// let out = renderer.render("<p>{{#if show}}Hello {{name}}{{/if}}</p>", &ctx);
/// assert_eq!(out, "<p>Hello World</p>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    strict: bool,
}

impl Renderer {
    /// Create a renderer with strict diagnostics off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict diagnostics.
    ///
    /// When on, malformed/unmatched directives and missing-key lookups are
    /// reported via warn-level logs naming the directive and its byte
    /// offset. Output is identical either way.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Resolve a template against a context.
    ///
    /// Never fails: every input produces some output. See the module docs
    /// for the resolution semantics.
    #[must_use]
    pub fn render(&self, template: &str, context: &RenderContext) -> String {
        let (nodes, warnings) = parser::parse(template);
        if self.strict {
            for warning in &warnings {
                tracing::warn!(offset = warning.offset, "template: {}", warning.message);
            }
        }

        let mut out = String::with_capacity(template.len());
        self.render_nodes(&nodes, context, &mut out);
        out
    }

    fn render_nodes(&self, nodes: &[Node], context: &RenderContext, out: &mut String) {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Escaped {
                    key,
                } => {
                    if let Some(value) = self.lookup(context, key) {
                        out.push_str(&escape_html(&value_to_string(value)));
                    }
                }
                Node::Raw {
                    key,
                } => {
                    if let Some(value) = self.lookup(context, key) {
                        out.push_str(&value_to_string(value));
                    }
                }
                Node::Each {
                    key,
                    body,
                } => self.render_each(key, body, context, out),
                Node::IfActive {
                    tag,
                    key,
                    body,
                } => {
                    let active = matches!(
                        context.get(key),
                        Some(Value::String(current)) if current == tag
                    );
                    if active {
                        self.render_nodes(body, context, out);
                    }
                }
                Node::If {
                    key,
                    body,
                } => {
                    if is_truthy(context.get(key)) {
                        self.render_nodes(body, context, out);
                    }
                }
            }
        }
    }

    fn render_each(&self, key: &str, body: &[Node], context: &RenderContext, out: &mut String) {
        let Some(Value::Array(items)) = self.lookup(context, key) else {
            return;
        };

        // Iteration outputs are concatenated in array order, no separator.
        for item in items {
            match item {
                Value::Object(fields) => {
                    let derived = context.overlay_object(fields);
                    self.render_nodes(body, &derived, out);
                }
                scalar => {
                    let derived = context.overlay_scalar(scalar.clone());
                    self.render_nodes(body, &derived, out);
                }
            }
        }
    }

    /// Look up a key, treating JSON null like a missing key. Strict mode
    /// reports lookups that found nothing.
    fn lookup<'ctx>(&self, context: &'ctx RenderContext, key: &str) -> Option<&'ctx Value> {
        match context.get(key) {
            Some(Value::Null) | None => {
                if self.strict {
                    tracing::warn!("template: no value for key '{key}'");
                }
                None
            }
            Some(value) => Some(value),
        }
    }
}

/// Truthiness for `{{#if}}`: empty strings, zero, `false` and null/missing
/// are falsy; any other defined value (including empty arrays and objects)
/// is truthy.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// String form of a context value for interpolation.
///
/// Strings pass through unchanged; numbers drop a redundant `.0`; booleans
/// print as `true`/`false`; arrays join their elements with commas. Objects
/// have no useful string form and produce empty output.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 9.007_199_254_740_992e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Null | Value::Object(_) => String::new(),
    }
}
