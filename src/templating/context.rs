//! Render context: the key/value data a template is resolved against.
//!
//! A context maps string keys to JSON values. Generators build one context
//! per output page, pass it into a render call, and discard it; the renderer
//! never mutates a context, it only derives new ones when entering loop
//! bodies.

use serde_json::{Map, Value};

use crate::constants::LOOP_SCALAR_KEY;

/// Key/value data for one render call.
///
/// Values are [`serde_json::Value`]s: scalars (strings, numbers, booleans),
/// arrays of scalars or of objects (for loop directives), or anything else
/// the caller wants to thread through. Absent keys are always permitted —
/// lookups of missing keys render as empty output, never as an error.
///
/// # Examples
///
/// ```
/// use stackgen::templating::RenderContext;
///
/// let mut ctx = RenderContext::new();
/// ctx.insert("heroTitle", "Best Gaming Mice (UK)");
/// ctx.insert("items", vec!["a", "b", "c"]);
/// assert!(ctx.get("heroTitle").is_some());
/// assert!(ctx.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    entries: Map<String, Value>,
}

impl RenderContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under a key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether a key is present (its value may still be null).
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the context has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derive the per-iteration context for an object loop element: the
    /// element's fields overlaid on this context. Outer keys stay visible
    /// unless shadowed by a field of the same name.
    #[must_use]
    pub(crate) fn overlay_object(&self, fields: &Map<String, Value>) -> Self {
        let mut entries = self.entries.clone();
        for (key, value) in fields {
            entries.insert(key.clone(), value.clone());
        }
        Self {
            entries,
        }
    }

    /// Derive the per-iteration context for a scalar loop element: the
    /// reserved `this` key bound to the element value.
    #[must_use]
    pub(crate) fn overlay_scalar(&self, value: Value) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(LOOP_SCALAR_KEY.to_string(), value);
        Self {
            entries,
        }
    }
}

impl From<Map<String, Value>> for RenderContext {
    fn from(entries: Map<String, Value>) -> Self {
        Self {
            entries,
        }
    }
}
