//! Reelrank main entry point
//!
//! Starts the interactive menu. The tool needs no arguments; an optional
//! TOML config file can override the source URL, output paths, and page
//! size.

use anyhow::Context;
use clap::Parser;
use reelrank::config::{load_config, validate, Config};
use reelrank::shell::run_shell;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Reelrank: a movie score mining tool
///
/// Fetches a movie-review listing page, ranks the titles by score, and
/// saves them as CSV and JSON. Saved records can be browsed page by page
/// from the same menu.
#[derive(Parser, Debug)]
#[command(name = "reelrank")]
#[command(version = "1.0.0")]
#[command(about = "A movie score mining tool", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => {
            let config = Config::default();
            validate(&config).context("built-in defaults failed validation")?;
            config
        }
    };

    run_shell(&config).await.context("shell loop failed")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Defaults to warnings only so log lines stay out of the interactive
/// menu; `-v` and friends open the tap.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("reelrank=warn"),
            1 => EnvFilter::new("reelrank=info,warn"),
            2 => EnvFilter::new("reelrank=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
