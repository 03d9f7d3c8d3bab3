//! HTTP transport for ACVP documents
//!
//! `VectorSource` is the seam between the fetch logic and the network. The
//! response body is handed back unread so callers can skip it entirely when
//! the ETag says nothing changed.

use crate::error::VectorError;
use reqwest::header::ETAG;
use std::io::Read;
use tracing::debug;

/// Response to a GET: the ETag and a not-yet-consumed body
pub struct RemoteDocument {
    url: String,
    etag: String,
    body: Box<dyn Read>,
}

impl RemoteDocument {
    pub fn new(url: impl Into<String>, etag: Option<String>, body: Box<dyn Read>) -> Self {
        Self {
            url: url.into(),
            etag: etag.unwrap_or_default(),
            body,
        }
    }

    /// ETag header value, empty when the server sent none
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Read the full response body
    pub fn read_body(mut self) -> Result<Vec<u8>, VectorError> {
        let mut bytes = Vec::new();
        self.body
            .read_to_end(&mut bytes)
            .map_err(|e| VectorError::network(&self.url, format!("Failed to read body: {}", e)))?;
        Ok(bytes)
    }
}

/// Anything that can GET a vector document
pub trait VectorSource {
    fn get(&self, url: &str) -> Result<RemoteDocument, VectorError>;
}

/// Real source backed by a blocking `reqwest` client
pub struct HttpVectorSource {
    client: reqwest::blocking::Client,
}

impl HttpVectorSource {
    pub fn new() -> Result<Self, VectorError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| VectorError::network("", format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl VectorSource for HttpVectorSource {
    fn get(&self, url: &str) -> Result<RemoteDocument, VectorError> {
        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                VectorError::network(url, "Request timed out")
            } else {
                VectorError::network(url, format!("Request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(VectorError::network(url, format!("HTTP {}", status)));
        }

        let etag = response
            .headers()
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        debug!("GET {} -> {} (etag: {:?})", url, status, etag);

        Ok(RemoteDocument::new(url, etag, Box::new(response)))
    }
}
