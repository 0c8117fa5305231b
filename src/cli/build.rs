//! Full site build: validate, then every generator in a fixed sequence.
//!
//! Mirrors what CI runs: validation first (any error aborts the build
//! before a single page is written), then category pages, comparison
//! pages, guide pages, and the sitemap, in that order. A failing step
//! aborts the run with a non-zero exit.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;
use std::time::Instant;

use crate::core::SiteError;
use crate::data::validation::run_validation;
use crate::site::{categories, comparisons, guides, sitemap, SiteEnv};

use super::validate::print_text_report;

/// Command to build the whole site.
#[derive(Args)]
pub struct BuildCommand {
    /// Skip validation (not recommended; useful when iterating on templates)
    #[arg(long)]
    skip_validation: bool,
}

impl BuildCommand {
    /// Run the build.
    pub fn execute(&self, site_dir: &Path) -> Result<()> {
        let start = Instant::now();
        println!("\nstackgen build starting...\n");

        let mut env = SiteEnv::new(site_dir)?;

        // Step 1: validate data
        if self.skip_validation {
            println!("Step 1 — Validation skipped (--skip-validation)");
        } else {
            println!("Step 1 — Validating data...");
            let report = run_validation(&env.paths);
            print_text_report(&report, false);
            if !report.is_valid() {
                eprintln!("Build aborted: fix validation errors above.\n");
                return Err(SiteError::ValidationFailed {
                    count: report.errors.len(),
                }
                .into());
            }
        }

        // Step 2: category pages
        println!("Step 2 — Generating category pages...");
        categories::generate(&mut env).context("Category generation failed")?;

        // Step 3: comparison pages
        println!("\nStep 3 — Generating comparison pages...");
        comparisons::generate(&mut env).context("Comparison generation failed")?;

        // Step 4: guide pages
        println!("\nStep 4 — Generating guide pages...");
        guides::generate(&mut env).context("Guide generation failed")?;

        // Step 5: sitemap
        println!("\nStep 5 — Generating sitemap...");
        sitemap::generate(&mut env).context("Sitemap generation failed")?;

        let (hits, misses) = env.cache.stats();
        tracing::debug!("Template cache: {hits} hits, {misses} misses");

        let elapsed = start.elapsed().as_secs_f64();
        println!("\n{} Build complete in {elapsed:.2}s\n", "✓".green());
        Ok(())
    }
}
