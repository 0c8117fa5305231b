//! Site configuration management.
//!
//! This module handles the optional per-site configuration file (`site.toml`)
//! which stores the site identity (base URL, names used in structured data)
//! and overrides for the directory layout. When the file is absent every
//! field falls back to a default that reproduces the conventional layout:
//!
//! ```text
//! <site>/
//!   site.toml                 (optional)
//!   _data/*.json              data files
//!   _templates/*.html         page body templates
//!   _templates/_partials/     head/header/sidebar/footer/bottom-nav
//!   <slug>/index.html         generated output, at the site root
//! ```
//!
//! # File Format
//!
//! ```toml
//! base-url = "https://stackpick.co.uk"
//! site-name = "Stack Pick"
//! publisher = "Stack Pick"
//!
//! data-dir = "_data"
//! templates-dir = "_templates"
//! partials-dir = "_templates/_partials"
//! output-dir = "."
//! ```
//!
//! All directory fields are interpreted relative to the site directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::SiteError;

/// Name of the configuration file looked up in the site directory.
pub const CONFIG_FILE: &str = "site.toml";

/// Site-wide configuration with directory layout and identity settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SiteConfig {
    /// Base URL used for sitemap entries and structured-data breadcrumbs.
    /// No trailing slash.
    pub base_url: String,

    /// Human-readable site name.
    pub site_name: String,

    /// Organization name used as author/publisher in Article structured data.
    pub publisher: String,

    /// Directory holding the JSON data files, relative to the site root.
    pub data_dir: PathBuf,

    /// Directory holding page body templates, relative to the site root.
    pub templates_dir: PathBuf,

    /// Directory holding the shared partials, relative to the site root.
    pub partials_dir: PathBuf,

    /// Directory generated pages are written under, relative to the site
    /// root. The default writes pages directly at the root, next to the
    /// data and template directories.
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://stackpick.co.uk".to_string(),
            site_name: "Stack Pick".to_string(),
            publisher: "Stack Pick".to_string(),
            data_dir: PathBuf::from("_data"),
            templates_dir: PathBuf::from("_templates"),
            partials_dir: PathBuf::from("_templates/_partials"),
            output_dir: PathBuf::from("."),
        }
    }
}

impl SiteConfig {
    /// Load configuration from `site.toml` in the given site directory.
    ///
    /// A missing file is not an error; defaults are used. A present but
    /// malformed file is a hard error naming the problem.
    pub fn load(site_dir: &Path) -> Result<Self> {
        let path = site_dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content).map_err(|e| SiteError::ConfigError {
            message: format!("{}: {}", path.display(), e),
        })?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve the configured directories against the site root, producing
    /// absolute paths for the rest of the build to use.
    #[must_use]
    pub fn resolve(&self, site_dir: &Path) -> SitePaths {
        SitePaths {
            data_dir: site_dir.join(&self.data_dir),
            templates_dir: site_dir.join(&self.templates_dir),
            partials_dir: site_dir.join(&self.partials_dir),
            output_dir: site_dir.join(&self.output_dir),
        }
    }
}

/// Absolute directory paths for one build, derived from [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct SitePaths {
    /// Absolute path to the data directory.
    pub data_dir: PathBuf,
    /// Absolute path to the body-template directory.
    pub templates_dir: PathBuf,
    /// Absolute path to the partials directory.
    pub partials_dir: PathBuf,
    /// Absolute path to the output directory.
    pub output_dir: PathBuf,
}

impl SitePaths {
    /// Path of a data file by name (e.g. `products.json`).
    #[must_use]
    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Path of a page body template by stem (e.g. `category`).
    #[must_use]
    pub fn template(&self, stem: &str) -> PathBuf {
        self.templates_dir
            .join(format!("{stem}.{}", crate::constants::TEMPLATE_EXT))
    }
}
