//! download-test-vectors - refresh the ACVP vectors under tests/vectors

use acvp_vectors::cli::Cli;
use acvp_vectors::{run, HttpVectorSource};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.resolve_config().context("Failed to load configuration")?;
    let source = HttpVectorSource::new()?;

    let outcomes = run(&config, &cli.overrides(), source)
        .with_context(|| format!("Failed to refresh vectors in {}", config.output_dir.display()))?;

    for (dataset, outcome) in &outcomes {
        info!("{}: {:?}", dataset, outcome);
    }

    println!("OK");
    Ok(())
}
