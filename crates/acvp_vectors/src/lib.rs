//! ACVP test vectors for the SLH-DSA SHA2-128s implementation
//!
//! Fetches the NIST ACVP keyGen/sigGen/sigVer documents, keeps the
//! SHA2-128s test groups and stores them under `tests/vectors/` with the
//! ETag of each download.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod http;
pub mod resource;
pub mod store;

pub use config::FetcherConfig;
pub use error::VectorError;
pub use fetcher::{run, FetchOutcome, LocalOverrides, VectorFetcher};
pub use filter::{filter_document, is_supported_parameter_set, ParameterSetFilter};
pub use http::{HttpVectorSource, RemoteDocument, VectorSource};
pub use resource::{Dataset, RemoteResource};
pub use store::persist;
