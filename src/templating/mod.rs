//! Lightweight HTML templating engine for page generation.
//!
//! This module provides the string-template engine every page generator
//! renders through, plus the template cache and the fixed-order page
//! assembler built on top of it.
//!
//! # Template Syntax
//!
//! ```text
//! {{varName}}                     — variable substitution (HTML-escaped)
//! {{{varName}}}                   — raw/unescaped output (for HTML blobs
//!                                   like pre-built card markup or JSON-LD)
//! {{#each arrayName}}...{{/each}} — loop over an array; use {{this}} for
//!                                   scalar elements or {{propName}} for
//!                                   object element properties
//! {{#if varName}}...{{/if}}       — conditional block (truthy check)
//! {{#if_active "slug" varName}}...{{/if_active}}
//!                                 — emitted when varName's value equals
//!                                   the quoted slug exactly
//! ```
//!
//! Every directive body may contain any other directive, to unbounded
//! nesting depth; blocks of the same kind are matched by depth, so an
//! inner `{{/if}}` never closes an outer `{{#if}}`.
//!
//! # Semantics
//!
//! - Rendering is pure: no side effects, no shared state between calls.
//! - Missing context keys render as empty output — never an error.
//! - Truthiness follows the data: `false`, `0`, `""` and null/missing are
//!   falsy; everything else defined is truthy.
//! - Loop bodies see a derived context — the element's own fields (or the
//!   reserved `this` binding for scalar elements) overlaid on the outer
//!   context, outer keys visible unless shadowed.
//! - Malformed or unmatched directive syntax is left in the output as
//!   literal text. With [`Renderer::with_strict`] enabled, each such span
//!   (and each missing-key lookup) is reported via a warn-level log naming
//!   the directive and its byte offset; output is unchanged.
//!
//! # Page Assembly
//!
//! [`PageAssembler`] composes full pages: the shared partials (`head`,
//! `header`, `sidebar`, `footer`, `bottom-nav`) are rendered individually
//! against the same context as the page body, then concatenated around the
//! page-wrapper lines in a fixed order. Partial files are loaded through a
//! [`TemplateCache`] constructed at process start and passed down — a
//! missing partial is a hard error naming the path.
//!
//! # Examples
//!
//! ```
//! use stackgen::templating::{RenderContext, Renderer};
//!
//! let renderer = Renderer::new();
//! let mut ctx = RenderContext::new();
//! ctx.insert("items", vec!["a", "b"]);
//!
//! let out = renderer.render("{{#each items}}<li>{{this}}</li>{{/each}}", &ctx);
//! assert_eq!(out, "<li>a</li><li>b</li>");
//! ```

pub mod cache;
pub mod context;
mod parser;
pub mod page;
pub mod renderer;


pub use cache::TemplateCache;
pub use context::RenderContext;
pub use page::PageAssembler;
pub use renderer::{escape_html, Renderer};
