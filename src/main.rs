//! stackgen CLI entry point
//!
//! Handles command-line argument parsing, error display, and command
//! execution. The CLI supports:
//! - `build` - Validate data and generate every page plus the sitemap
//! - `validate` - Validate the data directory standalone
//! - `generate` - Run a single generator (categories/comparisons/guides/sitemap)

use anyhow::Result;
use clap::Parser;
use stackgen::cli;
use stackgen::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to a user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
