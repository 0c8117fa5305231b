//! Template cache keyed by file path.
//!
//! Template and partial files are read from disk once per process and
//! served from memory afterwards. The cache is constructed at process start
//! and passed down explicitly to whoever needs template content — there is
//! no module-level state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::SiteError;

/// Read-once cache of template file contents.
///
/// A missing file is a hard failure carrying the path: a page cannot be
/// assembled without its structural fragments.
#[derive(Debug, Default)]
pub struct TemplateCache {
    templates: HashMap<PathBuf, String>,
    hits: usize,
    misses: usize,
}

impl TemplateCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a template's content, reading the file on first access.
    pub fn get(&mut self, path: &Path) -> Result<String, SiteError> {
        if let Some(content) = self.templates.get(path) {
            self.hits += 1;
            return Ok(content.clone());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SiteError::TemplateNotFound {
                    path: path.display().to_string(),
                }
            } else {
                SiteError::IoError(e)
            }
        })?;

        tracing::debug!("Loaded template {} ({} bytes)", path.display(), content.len());
        self.misses += 1;
        self.templates.insert(path.to_path_buf(), content.clone());
        Ok(content)
    }

    /// Cache statistics as (hits, misses).
    #[must_use]
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }
}
