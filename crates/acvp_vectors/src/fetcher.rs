//! Vector fetcher
//!
//! Downloads each ACVP document only when its ETag differs from the one
//! stored next to the previous output, filters it, and writes the result.
//! Datasets are processed one after another; the first failure stops the run.

use crate::config::FetcherConfig;
use crate::error::VectorError;
use crate::filter::ParameterSetFilter;
use crate::http::VectorSource;
use crate::resource::{Dataset, RemoteResource};
use crate::store;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What happened to one output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Output rewritten with this many groups
    Updated { groups: usize },

    /// Stored token matched; nothing read or written
    Unchanged,
}

/// Whether a download with `fresh` must replace the output stored under `stored`
///
/// An empty stored token always refreshes, even when `fresh` is empty too.
pub fn needs_refresh(stored: &str, fresh: &str) -> bool {
    stored.is_empty() || stored != fresh
}

pub struct VectorFetcher<S: VectorSource> {
    source: S,
    filter: ParameterSetFilter,
}

impl<S: VectorSource> VectorFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            filter: ParameterSetFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: ParameterSetFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Download `resource` into `output` unless the stored ETag is current
    pub fn fetch_if_changed(
        &self,
        resource: &RemoteResource,
        output: &Path,
    ) -> Result<FetchOutcome, VectorError> {
        println!("Downloading test vectors from {} ...", resource.url);

        let stored = store::read_stored_token(output);
        let document = self.source.get(&resource.url)?;
        let fresh = document.etag().to_string();

        let outcome = if needs_refresh(&stored, &fresh) {
            debug!(
                dataset = %resource.dataset,
                stored = %stored,
                fresh = %fresh,
                "Token changed, reading body"
            );
            let raw = document.read_body()?;
            let groups = self.filter.filter_document(&raw)?;
            store::persist(&groups, output, Some(&fresh))?;
            FetchOutcome::Updated {
                groups: groups.len(),
            }
        } else {
            info!(dataset = %resource.dataset, etag = %fresh, "Test vectors unchanged");
            FetchOutcome::Unchanged
        };

        println!("test vectors saved to {}", output.display());
        Ok(outcome)
    }

    /// Filter a pre-downloaded raw ACVP document into `output`, no token
    pub fn fetch_from_local_override(
        &self,
        local: &Path,
        output: &Path,
    ) -> Result<FetchOutcome, VectorError> {
        let raw = fs::read(local).map_err(|e| match e.kind() {
            ErrorKind::NotFound => VectorError::FileNotFound(local.to_path_buf()),
            _ => VectorError::filesystem(local, e),
        })?;

        let groups = self.filter.filter_document(&raw)?;
        store::persist(&groups, output, None)?;

        info!(
            "Filtered {} test groups from {} into {}",
            groups.len(),
            local.display(),
            output.display()
        );
        Ok(FetchOutcome::Updated {
            groups: groups.len(),
        })
    }
}

/// Local raw ACVP files replacing the download, per dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalOverrides {
    pub keygen: Option<PathBuf>,
    pub signing: Option<PathBuf>,
    pub verifying: Option<PathBuf>,
}

impl LocalOverrides {
    pub fn get(&self, dataset: Dataset) -> Option<&Path> {
        match dataset {
            Dataset::Keygen => self.keygen.as_deref(),
            Dataset::Signing => self.signing.as_deref(),
            Dataset::Verifying => self.verifying.as_deref(),
        }
    }
}

/// Refresh all three datasets in order
///
/// Creates the output directory first. Stops at the first error; files
/// already written for earlier datasets are left in place.
pub fn run<S: VectorSource>(
    config: &FetcherConfig,
    overrides: &LocalOverrides,
    source: S,
) -> Result<Vec<(Dataset, FetchOutcome)>, VectorError> {
    fs::create_dir_all(&config.output_dir)
        .map_err(|e| VectorError::filesystem(&config.output_dir, e))?;

    let fetcher = VectorFetcher::new(source).with_filter(config.filter());
    let mut outcomes = Vec::with_capacity(Dataset::ALL.len());

    for dataset in Dataset::ALL {
        let output = config.output_path(dataset);
        let outcome = match overrides.get(dataset) {
            Some(local) => fetcher.fetch_from_local_override(local, &output)?,
            None => fetcher.fetch_if_changed(&config.resource(dataset), &output)?,
        };
        outcomes.push((dataset, outcome));
    }

    Ok(outcomes)
}
