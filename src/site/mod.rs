//! Site generation: data records → rendered HTML pages on disk.
//!
//! Each generator loads its data, pre-builds the HTML blobs its template
//! slots in raw (product cards, tables, structured data), shapes a flat
//! render context, and assembles one page per record through the shared
//! renderer and partials. Generators are independent of each other; the
//! `build` command runs them in a fixed order after validation.

pub mod cards;
pub mod categories;
pub mod comparisons;
pub mod guides;
pub mod sitemap;

use anyhow::Result;
use std::path::Path;

use crate::config::{SiteConfig, SitePaths};
use crate::templating::{PageAssembler, RenderContext, Renderer, TemplateCache};
use crate::utils::fs::safe_write;

/// Everything a generator needs for one build: configuration, resolved
/// paths, the renderer, and the template cache. Constructed once per
/// process and passed down explicitly.
pub struct SiteEnv {
    pub config: SiteConfig,
    pub paths: SitePaths,
    pub renderer: Renderer,
    pub cache: TemplateCache,
}

impl SiteEnv {
    /// Set up the environment for a site directory: load `site.toml` (or
    /// defaults) and resolve the directory layout.
    pub fn new(site_dir: &Path) -> Result<Self> {
        let config = SiteConfig::load(site_dir)?;
        let paths = config.resolve(site_dir);
        Ok(Self {
            config,
            paths,
            renderer: Renderer::new(),
            cache: TemplateCache::new(),
        })
    }

    /// Assemble one full page from a body template and context.
    pub(crate) fn assemble_page(&mut self, body: &str, context: &RenderContext) -> Result<String> {
        let mut assembler =
            PageAssembler::new(&self.renderer, &mut self.cache, self.paths.partials_dir.clone());
        assembler.assemble(body, context)
    }

    /// Write a rendered page under the output directory.
    pub(crate) fn write_output(&self, relative: &str, content: &str) -> Result<()> {
        safe_write(&self.paths.output_dir.join(relative), content)
    }
}

/// Strip a ` | Site Name` suffix from a page title, for structured data
/// that wants the bare title.
pub(crate) fn strip_title_suffix(title: &str, site_name: &str) -> String {
    title
        .strip_suffix(&format!(" | {site_name}"))
        .unwrap_or(title)
        .to_string()
}

/// JS-style number formatting for structured-data prices: integral values
/// print without a decimal point.
pub(crate) fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_title_suffix() {
        assert_eq!(
            strip_title_suffix("Best Gaming Mice UK 2026 | Stack Pick", "Stack Pick"),
            "Best Gaming Mice UK 2026"
        );
        assert_eq!(strip_title_suffix("No suffix", "Stack Pick"), "No suffix");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(119.0), "119");
        assert_eq!(format_price(119.05), "119.05");
    }
}
