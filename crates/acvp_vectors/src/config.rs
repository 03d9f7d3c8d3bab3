//! Fetcher configuration
//!
//! Optional TOML file; every field falls back to its default so a partial
//! file is fine. Without a file the defaults reproduce the pinned download.

use crate::error::VectorError;
use crate::filter::{ParameterSetFilter, SUPPORTED_SUFFIX};
use crate::resource::{Dataset, RemoteResource, DEFAULT_BASE_URL, PINNED_REVISION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "tests/vectors";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Where the filtered `*.json` and `*.json.etag` files go
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Raw content root of the ACVP-Server repository
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// ACVP-Server commit to fetch from
    #[serde(default = "default_revision")]
    pub revision: String,

    /// Parameter-set suffix of the groups to keep
    #[serde(default = "default_suffix")]
    pub parameter_set_suffix: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_revision() -> String {
    PINNED_REVISION.to_string()
}

fn default_suffix() -> String {
    SUPPORTED_SUFFIX.to_string()
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            base_url: default_base_url(),
            revision: default_revision(),
            parameter_set_suffix: default_suffix(),
        }
    }
}

impl FetcherConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, VectorError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            VectorError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
            .map_err(|e| VectorError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn resource(&self, dataset: Dataset) -> RemoteResource {
        RemoteResource::new(dataset, &self.base_url, &self.revision)
    }

    pub fn output_path(&self, dataset: Dataset) -> PathBuf {
        self.output_dir.join(dataset.output_file_name())
    }

    pub fn filter(&self) -> ParameterSetFilter {
        ParameterSetFilter::new(self.parameter_set_suffix.clone())
    }
}
