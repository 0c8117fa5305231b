//! Error handling for stackgen
//!
//! This module provides the error types and user-friendly error reporting for
//! the site generator. The error system is designed around two core
//! principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`SiteError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! Common standard library errors are automatically converted:
//! - [`std::io::Error`] → [`SiteError::IoError`]
//! - [`toml::de::Error`] → [`SiteError::TomlError`]
//! - [`serde_json::Error`] → [`SiteError::JsonError`]
//!
//! Use [`user_friendly_error`] to convert any error into a user-friendly
//! format with contextual suggestions before displaying it to the CLI user.
//!
//! # Examples
//!
//! ```rust,no_run
//! use stackgen::core::{SiteError, ErrorContext};
//!
//! let error = SiteError::DataFileNotFound {
//!     path: "_data/products.json".to_string(),
//! };
//! let context = ErrorContext::new(error)
//!     .with_suggestion("Check that the site directory contains a _data/ folder");
//!
//! // Display with colors in terminal
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for stackgen operations
///
/// Each variant represents a specific failure mode and carries enough
/// context (file paths, slugs, reasons) for the CLI layer to produce an
/// actionable message. Renderer-level problems never appear here: the
/// template engine is fail-soft by contract and degrades to empty output
/// instead of erroring.
#[derive(Error, Debug)]
pub enum SiteError {
    /// A required data file is missing from the data directory
    #[error("Data file not found: {path}")]
    DataFileNotFound {
        /// Path of the missing file, relative to the site directory
        path: String,
    },

    /// A data file exists but does not contain valid JSON
    #[error("Invalid JSON in {file}: {reason}")]
    DataParseError {
        /// The offending file
        file: String,
        /// Parser message
        reason: String,
    },

    /// Data validation found one or more problems
    ///
    /// Individual problems are printed by the validator before this error
    /// is raised; the variant only carries the count.
    #[error("Data validation failed with {count} error(s)")]
    ValidationFailed {
        /// Number of validation errors found
        count: usize,
    },

    /// A page template or partial is missing
    ///
    /// A missing structural fragment (e.g. no footer partial) is a visible,
    /// significant defect, so this is a hard failure for the page build.
    #[error("Template file not found: {path}")]
    TemplateNotFound {
        /// Path of the missing template file
        path: String,
    },

    /// A required collection or record is missing from the data
    #[error("Missing data record: {what}")]
    MissingRecord {
        /// Description of what was expected (e.g. the `all-picks` collection)
        what: String,
    },

    /// Configuration file issues
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What went wrong
        message: String,
    },

    /// General file system operation failure
    #[error("File system error: {operation}")]
    FileSystemError {
        /// The operation that failed (e.g. "create directory", "write file")
        operation: String,
        /// Path involved in the operation
        path: String,
    },

    /// IO error from [`std::io::Error`]
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error from [`toml::de::Error`]
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON error from [`serde_json::Error`]
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Catch-all for errors without a dedicated variant
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// An error paired with a user-facing suggestion and optional details.
///
/// The CLI layer converts every failure into an `ErrorContext` before
/// displaying it, so users see the error, a green actionable suggestion
/// where one exists, and dimmed details.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: SiteError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`SiteError`]
    #[must_use]
    pub const fn new(error: SiteError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    ///
    /// Suggestions should be actionable steps. They are displayed in green
    /// in the terminal to draw attention.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details about the error
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{} {}", "✗".red().bold(), self.error.to_string().red());
        if let Some(details) = &self.details {
            eprintln!("  {}", details.dimmed());
        }
        if let Some(suggestion) = &self.suggestion {
            eprintln!("  {} {}", "→".green(), suggestion.green());
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\n  {details}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {suggestion}")?;
        }
        Ok(())
    }
}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions
///
/// This is the main entry point for converting arbitrary errors into
/// user-friendly messages for CLI display. It recognizes the generator's
/// own error types as well as common IO failures.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(site_error) = error.downcast_ref::<SiteError>() {
        return create_error_context(site_error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(SiteError::Other {
                    message: format!("{error:#}"),
                })
                .with_suggestion("Check file ownership and permissions in the site directory");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(SiteError::Other {
                    message: format!("{error:#}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    ErrorContext::new(SiteError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: &SiteError) -> ErrorContext {
    let (suggestion, details) = match error {
        SiteError::DataFileNotFound {
            ..
        } => (
            Some("Check that the site directory contains a _data/ folder with the four JSON data files"),
            Some("stackgen expects products.json, collections.json, comparisons.json and guides.json"),
        ),
        SiteError::DataParseError {
            ..
        } => (
            Some("Fix the JSON syntax error reported above, then re-run the build"),
            None,
        ),
        SiteError::ValidationFailed {
            ..
        } => (
            Some("Fix the validation errors listed above, then re-run the build"),
            None,
        ),
        SiteError::TemplateNotFound {
            ..
        } => (
            Some("Check the _templates/ directory; every page needs its body template and the five partials"),
            Some("Partials: head, header, sidebar, footer, bottom-nav"),
        ),
        SiteError::MissingRecord {
            ..
        } => (
            Some("Add the missing record to the data files"),
            None,
        ),
        SiteError::ConfigError {
            ..
        } => (Some("Check the site.toml syntax and field names"), None),
        _ => (None, None),
    };

    let mut ctx = ErrorContext::new(SiteError::Other {
        message: error.to_string(),
    });
    if let Some(s) = suggestion {
        ctx = ctx.with_suggestion(s);
    }
    if let Some(d) = details {
        ctx = ctx.with_details(d);
    }
    ctx
}
