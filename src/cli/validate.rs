//! Validate the site's JSON data files.
//!
//! Performs the same validation the `build` command runs first, standalone:
//! loads every data file, aggregates all problems, and reports them at
//! once. Supports text output (the default, with ✓/✗ markers) and JSON for
//! automation, plus a strict mode that treats warnings as errors for CI.
//!
//! # Examples
//!
//! ```bash
//! stackgen validate
//! stackgen validate --strict
//! stackgen validate --format json
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde_json::json;
use std::path::Path;

use crate::config::SiteConfig;
use crate::core::SiteError;
use crate::data::validation::{run_validation, ValidationReport};

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with ✓/✗ markers
    Text,
    /// Machine-readable JSON object
    Json,
}

/// Command to validate the data directory.
#[derive(Args)]
pub struct ValidateCommand {
    /// Treat warnings as errors (for CI)
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ValidateCommand {
    /// Run validation and exit non-zero (via error) when the data is bad.
    pub fn execute(&self, site_dir: &Path) -> Result<()> {
        let config = SiteConfig::load(site_dir)?;
        let paths = config.resolve(site_dir);

        let report = run_validation(&paths);
        let ok = if self.strict {
            report.is_valid_strict()
        } else {
            report.is_valid()
        };

        match self.format {
            OutputFormat::Text => print_text_report(&report, self.strict),
            OutputFormat::Json => print_json_report(&report, ok),
        }

        if ok {
            Ok(())
        } else {
            let count = report.errors.len()
                + if self.strict {
                    report.warnings.len()
                } else {
                    0
                };
            Err(SiteError::ValidationFailed {
                count,
            }
            .into())
        }
    }
}

/// Print the report the way the build log does: every problem, then either
/// per-file counts or the error total.
pub(crate) fn print_text_report(report: &ValidationReport, strict: bool) {
    println!("\nValidating data...\n");

    for error in &report.errors {
        println!("  {} {error}", "✗".red());
    }
    for warning in &report.warnings {
        if strict {
            println!("  {} {warning}", "✗".red());
        } else {
            println!("  {} {warning}", "⚠".yellow());
        }
    }

    if report.is_valid() && (!strict || report.warnings.is_empty()) {
        for (file, count) in &report.counts {
            println!("  {} {file} — {count} record(s)", "✓".green());
        }
        println!("\n{} All data valid.\n", "✓".green());
    } else {
        let total = report.errors.len()
            + if strict {
                report.warnings.len()
            } else {
                0
            };
        let plural = if total == 1 {
            ""
        } else {
            "s"
        };
        println!(
            "\n{} {total} validation error{plural} found. Fix before building.\n",
            "✗".red()
        );
    }
}

fn print_json_report(report: &ValidationReport, ok: bool) {
    let counts: serde_json::Map<String, serde_json::Value> = report
        .counts
        .iter()
        .map(|(file, count)| (file.clone(), json!(count)))
        .collect();

    let output = json!({
        "valid": ok,
        "errors": report.errors,
        "warnings": report.warnings,
        "counts": counts,
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}
