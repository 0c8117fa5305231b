//! stackgen - static-site generator for affiliate product-comparison sites
//!
//! stackgen reads JSON product, collection, comparison and guide data from
//! a site directory, validates it, and renders static HTML pages through a
//! small mustache-like template engine.
//!
//! # Architecture Overview
//!
//! A build is a linear pipeline:
//!
//! 1. **Validate** — every data file is checked up front and all problems
//!    reported at once; any error aborts the build before a page is written
//! 2. **Generate** — category, comparison and guide pages are rendered one
//!    page per record, each through the same path: shape a flat render
//!    context from the data, pre-build the raw HTML blobs (cards, tables,
//!    structured data), and assemble partials + body into a document
//! 3. **Sitemap** — a fixed static-page table plus one entry per article
//!
//! The template engine at the center is pure and fail-soft: rendering
//! never errors, missing keys degrade to empty output, and all I/O
//! (template cache, output writing) lives outside it.
//!
//! # Core Modules
//!
//! - [`templating`] - The template engine, template cache and page assembler
//! - [`data`] - Serde models, JSON loaders and the aggregating validator
//! - [`site`] - Page generators (categories, comparisons, guides, sitemap)
//! - [`cli`] - Command-line interface (`build`, `validate`, `generate`)
//! - [`config`] - Optional `site.toml` with identity and layout settings
//! - [`core`] - Error types and user-facing error reporting
//! - [`utils`] - Atomic file writing and directory helpers
//!
//! # Template Syntax
//!
//! ```text
//! {{varName}}                       escaped substitution
//! {{{varName}}}                     raw substitution
//! {{#each items}}...{{/each}}       loop ({{this}} for scalar elements)
//! {{#if flag}}...{{/if}}            truthy conditional
//! {{#if_active "slug" var}}...{{/if_active}}   exact-match conditional
//! ```
//!
//! # Site Layout
//!
//! ```text
//! <site>/
//!   site.toml                    optional configuration
//!   _data/products.json          product catalogue
//!   _data/collections.json      product groupings and editorial order
//!   _data/comparisons.json      comparison articles
//!   _data/guides.json           guide articles
//!   _data/categories.json       per-category page copy
//!   _templates/category.html    page body templates
//!   _templates/comparison.html
//!   _templates/guide.html
//!   _templates/_partials/       head, header, sidebar, footer, bottom-nav
//! ```
//!
//! # Example
//!
//! ```no_run
//! use stackgen::templating::{RenderContext, Renderer};
//!
//! let renderer = Renderer::new();
//! let mut ctx = RenderContext::new();
//! ctx.insert("heroTitle", "Best Gaming Mice (UK)");
//!
//! let html = renderer.render("<h1>{{heroTitle}}</h1>", &ctx);
//! assert_eq!(html, "<h1>Best Gaming Mice (UK)</h1>");
//! ```

// Core functionality modules
pub mod cli;
pub mod config;
pub mod core;
pub mod templating;

// Data and generation
pub mod data;
pub mod site;

// Supporting modules
pub mod constants;
pub mod utils;
