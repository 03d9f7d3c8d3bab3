//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic.

use crate::config::FetcherConfig;
use crate::error::VectorError;
use crate::fetcher::LocalOverrides;
use clap::Parser;
use std::path::PathBuf;

/// Download and filter NIST ACVP SLH-DSA test vectors
#[derive(Parser, Debug)]
#[command(name = "download-test-vectors")]
#[command(about = "Fetch SLH-DSA ACVP test vectors and keep the SHA2-128s groups", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to local keygen JSON (raw ACVP) to use instead of download
    #[arg(long, value_name = "PATH")]
    pub keygen: Option<PathBuf>,

    /// Path to local signing JSON (raw ACVP) to use instead of download
    #[arg(long, value_name = "PATH")]
    pub signing: Option<PathBuf>,

    /// Path to local verifying JSON (raw ACVP) to use instead of download
    #[arg(long, value_name = "PATH")]
    pub verifying: Option<PathBuf>,

    /// Output directory (overrides the config file)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn overrides(&self) -> LocalOverrides {
        LocalOverrides {
            keygen: self.keygen.clone(),
            signing: self.signing.clone(),
            verifying: self.verifying.clone(),
        }
    }

    /// Config file (or defaults) with command-line overrides applied
    pub fn resolve_config(&self) -> Result<FetcherConfig, VectorError> {
        let mut config = match &self.config {
            Some(path) => FetcherConfig::load(path)?,
            None => FetcherConfig::default(),
        };

        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }

        Ok(config)
    }
}
