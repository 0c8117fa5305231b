//! Command-line interface for stackgen.
//!
//! The CLI provides three commands:
//!
//! - `build` — validate the data, then run every generator in a fixed
//!   sequence, aborting the run if validation fails or a step errors
//! - `validate` — validate the data directory standalone, with text or
//!   JSON output and an optional strict mode for CI
//! - `generate <target>` — run one generator standalone (categories,
//!   comparisons, guides or sitemap), without validating first
//!
//! # Global Options
//!
//! All commands support:
//! - `--site-dir` - Site directory to operate on (defaults to the current
//!   directory)
//! - `--verbose` - Enable debug output
//! - `--quiet` - Suppress all output except errors
//!
//! # Examples
//!
//! ```bash
//! # Full build of the site in the current directory
//! stackgen build
//!
//! # Validate another site's data, strictly, as JSON
//! stackgen --site-dir ../shop validate --strict --format json
//!
//! # Regenerate just the sitemap
//! stackgen generate sitemap
//! ```

mod build;
mod generate;
pub mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI structure.
///
/// Global flags are available to all subcommands; verbosity maps onto the
/// tracing filter (`--verbose` ≙ debug, `--quiet` ≙ errors only), with
/// `RUST_LOG` taking precedence when set.
#[derive(Parser)]
#[command(
    name = "stackgen",
    about = "Static-site generator for affiliate product-comparison sites",
    version,
    long_about = "stackgen reads JSON product, collection, comparison and guide data, \
validates it, and renders static HTML pages through a small template engine."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Site directory containing _data/, _templates/ and site.toml
    ///
    /// Defaults to the current working directory.
    #[arg(short, long, global = true, env = "STACKGEN_SITE_DIR")]
    site_dir: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Validate data, then generate every page and the sitemap
    Build(build::BuildCommand),

    /// Validate the JSON data files without generating anything
    Validate(validate::ValidateCommand),

    /// Run a single generator without validating first
    Generate(generate::GenerateCommand),
}

impl Cli {
    /// Execute the parsed command.
    pub fn execute(self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let site_dir = match self.site_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        tracing::debug!("Site directory: {}", site_dir.display());

        match self.command {
            Commands::Build(cmd) => cmd.execute(&site_dir),
            Commands::Validate(cmd) => cmd.execute(&site_dir),
            Commands::Generate(cmd) => cmd.execute(&site_dir),
        }
    }
}

/// Initialize the tracing subscriber.
///
/// An explicit `RUST_LOG` wins; otherwise the level comes from the
/// verbosity flags. Repeated initialization (e.g. in tests) is ignored.
fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stackgen={default_level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_reach_subcommands() {
        let cli = Cli::try_parse_from(["stackgen", "build", "--site-dir", "/tmp/site", "-v"])
            .unwrap();
        assert_eq!(cli.site_dir, Some(PathBuf::from("/tmp/site")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_validate_flags() {
        let cli =
            Cli::try_parse_from(["stackgen", "validate", "--strict", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Validate(cmd) => {
                assert!(cmd.strict);
            }
            _ => panic!("expected validate command"),
        }
    }
}
