//! Page assembly: partials + body → one document string.
//!
//! A full page is the concatenation of independently rendered fragments in
//! a fixed order: the `head`, `header` and `sidebar` partials, the page
//! wrapper's opening line, the rendered body template, the `footer`
//! partial, the wrapper's closing line, and the `bottom-nav` partial — all
//! rendered against the same context and joined with newlines. The
//! assembler performs no directive resolution itself; it calls the renderer
//! once per fragment and joins the results.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::constants::{
    PAGE_WRAPPER_CLOSE, PAGE_WRAPPER_OPEN, PARTIALS_BEFORE_BODY, PARTIAL_BOTTOM_NAV,
    PARTIAL_FOOTER, TEMPLATE_EXT,
};

use super::cache::TemplateCache;
use super::context::RenderContext;
use super::renderer::Renderer;

/// Assembles full pages from a body template and the shared partials.
///
/// Borrows the build's renderer and template cache; partials are loaded by
/// name from the partials directory (a missing partial aborts the page
/// build with the offending path).
pub struct PageAssembler<'a> {
    renderer: &'a Renderer,
    cache: &'a mut TemplateCache,
    partials_dir: PathBuf,
}

impl<'a> PageAssembler<'a> {
    /// Create an assembler over a partials directory.
    pub fn new(
        renderer: &'a Renderer,
        cache: &'a mut TemplateCache,
        partials_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            renderer,
            cache,
            partials_dir: partials_dir.into(),
        }
    }
}

impl PageAssembler<'_> {
    fn partial(&mut self, name: &str, context: &RenderContext) -> Result<String> {
        let path = self.partials_dir.join(format!("{name}.{TEMPLATE_EXT}"));
        let template = self
            .cache
            .get(&path)
            .with_context(|| format!("Failed to load partial '{name}'"))?;
        Ok(self.renderer.render(&template, context))
    }

    /// Assemble one page: render every partial and the body against the
    /// same context and join the pieces in the fixed page order.
    pub fn assemble(&mut self, body_template: &str, context: &RenderContext) -> Result<String> {
        let mut pieces = Vec::with_capacity(PARTIALS_BEFORE_BODY.len() + 5);

        for &name in PARTIALS_BEFORE_BODY {
            pieces.push(self.partial(name, context)?);
        }
        pieces.push(PAGE_WRAPPER_OPEN.to_string());
        pieces.push(self.renderer.render(body_template, context));
        pieces.push(self.partial(PARTIAL_FOOTER, context)?);
        pieces.push(PAGE_WRAPPER_CLOSE.to_string());
        pieces.push(self.partial(PARTIAL_BOTTOM_NAV, context)?);

        Ok(pieces.join("\n"))
    }
}
