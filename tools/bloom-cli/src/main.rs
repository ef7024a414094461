//! Bloom CLI: feed operation streams to a Bloom filter

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

use bloom_cli::app;
use bloom_cli::Args;
use bloom_filters::Metrics;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only prompts and answers
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "Starting bloom-cli");

    let metrics = Arc::new(Metrics::new());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = app::run(
        &args,
        &mut stdin.lock(),
        &mut stdout.lock(),
        Arc::clone(&metrics),
    )?;
    debug!(?outcome, "Finished");

    if args.stats {
        let snapshot = serde_json::to_string_pretty(&metrics.snapshot())
            .context("Failed to serialize metrics")?;
        eprintln!("{}", snapshot);
    }

    Ok(())
}
