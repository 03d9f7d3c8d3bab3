//! Remote ACVP resources
//!
//! The three SLH-DSA datasets published by the NIST ACVP server, pinned to a
//! fixed revision of the `usnistgov/ACVP-Server` repository.

use std::fmt;

/// Raw GitHub content root for the ACVP server repository
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/usnistgov/ACVP-Server";

/// Pinned ACVP-Server commit the vectors are taken from
pub const PINNED_REVISION: &str = "d98cad66639bf9d0822129c4bcae7a169fcf9ca6";

/// Logical vector dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Keygen,
    Signing,
    Verifying,
}

impl Dataset {
    /// Processing order
    pub const ALL: [Dataset; 3] = [Dataset::Keygen, Dataset::Signing, Dataset::Verifying];

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Keygen => "keygen",
            Dataset::Signing => "signing",
            Dataset::Verifying => "verifying",
        }
    }

    /// Directory name under `gen-val/json-files`
    pub fn acvp_directory(&self) -> &'static str {
        match self {
            Dataset::Keygen => "SLH-DSA-keyGen-FIPS205",
            Dataset::Signing => "SLH-DSA-sigGen-FIPS205",
            Dataset::Verifying => "SLH-DSA-sigVer-FIPS205",
        }
    }

    /// File name of the filtered output, e.g. `keygen.json`
    pub fn output_file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A downloadable vector document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResource {
    pub dataset: Dataset,
    pub url: String,
}

impl RemoteResource {
    pub fn new(dataset: Dataset, base_url: &str, revision: &str) -> Self {
        let url = format!(
            "{}/{}/gen-val/json-files/{}/internalProjection.json",
            base_url.trim_end_matches('/'),
            revision,
            dataset.acvp_directory()
        );
        Self { dataset, url }
    }

    /// Resource at the pinned revision on GitHub
    pub fn pinned(dataset: Dataset) -> Self {
        Self::new(dataset, DEFAULT_BASE_URL, PINNED_REVISION)
    }
}
