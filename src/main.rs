//! Asset-Atlas main entry point
//!
//! This is the command-line interface for the Asset-Atlas site crawler.

use anyhow::Context;
use asset_atlas::config::{load_config_with_hash, validate, Config, OutputFormat};
use asset_atlas::crawler::crawl_site;
use asset_atlas::output::write_report;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Asset-Atlas: a same-origin site crawler
///
/// Asset-Atlas crawls a website breadth-first from a seed URL, following only
/// links on the seed's host, and reports the stylesheets, images and scripts
/// used by every page it visits.
#[derive(Parser, Debug)]
#[command(name = "asset-atlas")]
#[command(version)]
#[command(about = "A same-origin site crawler", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(value_name = "SEED")]
    seed: String,

    /// Maximum number of pages to visit (overrides the config file)
    #[arg(short = 'n', long, value_name = "N")]
    max_pages: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Report format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Crawl without rendering a report
    #[arg(long)]
    no_report: bool,

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

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_effective_config(&cli)?;

    let report = match crawl_site(&config, &cli.seed).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e).context(format!("could not crawl {}", cli.seed));
        }
    };

    tracing::info!(
        "Visited {} pages ({} processed, {} unreachable, {} failed)",
        report.pages.len(),
        report.processed,
        report.unreachable,
        report.failed
    );

    if cli.no_report {
        return Ok(());
    }

    let output_path = config.output.path.as_ref().map(PathBuf::from);
    write_report(&report, config.output.format, output_path.as_deref())
        .context("failed to write report")?;

    Ok(())
}

/// Loads the config file (if any) and applies command-line overrides
fn load_effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(output) = &cli.output {
        config.output.path = Some(output.display().to_string());
    }

    validate(&config).context("invalid settings")?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("asset_atlas=info,warn"),
            1 => EnvFilter::new("asset_atlas=debug,info"),
            2 => EnvFilter::new("asset_atlas=trace,debug"),
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
