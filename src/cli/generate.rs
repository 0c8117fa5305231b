//! Run a single generator standalone.
//!
//! Each generator is independently invocable, matching the build steps
//! one-to-one. No validation runs first — this is the fast path for
//! iterating on one page type; run `stackgen validate` or a full build
//! before publishing.

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::Path;

use crate::site::{categories, comparisons, guides, sitemap, SiteEnv};

/// Which generator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerateTarget {
    /// Category pages (<slug>/index.html)
    Categories,
    /// Comparison pages (comparisons/<slug>/index.html)
    Comparisons,
    /// Guide pages (guides/<slug>/index.html)
    Guides,
    /// sitemap.xml
    Sitemap,
}

/// Command to run one generator.
#[derive(Args)]
pub struct GenerateCommand {
    /// The generator to run
    #[arg(value_enum)]
    target: GenerateTarget,
}

impl GenerateCommand {
    /// Run the selected generator.
    pub fn execute(&self, site_dir: &Path) -> Result<()> {
        let mut env = SiteEnv::new(site_dir)?;

        match self.target {
            GenerateTarget::Categories => categories::generate(&mut env)?,
            GenerateTarget::Comparisons => comparisons::generate(&mut env)?,
            GenerateTarget::Guides => guides::generate(&mut env)?,
            GenerateTarget::Sitemap => sitemap::generate(&mut env)?,
        };
        Ok(())
    }
}
