//! Parameter-set filtering of ACVP documents
//!
//! An ACVP document is an object with a `testGroups` array. Every group names
//! its `parameterSet`; only groups for the supported parameter set are kept.
//! Kept groups are passed through as raw JSON values, untouched.

use crate::error::VectorError;
use serde_json::Value;

/// Suffix of the only parameter set the implementation supports
pub const SUPPORTED_SUFFIX: &str = "SHA2-128s";

/// Keeps test groups whose parameter set ends with a given suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSetFilter {
    suffix: String,
}

impl Default for ParameterSetFilter {
    fn default() -> Self {
        Self::new(SUPPORTED_SUFFIX)
    }
}

impl ParameterSetFilter {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Case-sensitive suffix match, no normalization
    pub fn matches(&self, parameter_set: &str) -> bool {
        parameter_set.ends_with(&self.suffix)
    }

    /// Parse a raw ACVP document and return the matching groups in source order
    pub fn filter_document(&self, raw: &[u8]) -> Result<Vec<Value>, VectorError> {
        let document: Value = serde_json::from_slice(raw)?;

        let groups = document
            .get("testGroups")
            .ok_or_else(|| VectorError::MalformedInput("missing field `testGroups`".to_string()))?
            .as_array()
            .ok_or_else(|| {
                VectorError::MalformedInput("`testGroups` is not an array".to_string())
            })?;

        let mut kept = Vec::new();
        for (index, group) in groups.iter().enumerate() {
            let parameter_set = group
                .get("parameterSet")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    VectorError::MalformedInput(format!(
                        "test group {} has no string `parameterSet`",
                        index
                    ))
                })?;

            if self.matches(parameter_set) {
                kept.push(group.clone());
            }
        }

        tracing::debug!(
            total = groups.len(),
            kept = kept.len(),
            suffix = %self.suffix,
            "Filtered test groups"
        );

        Ok(kept)
    }
}

/// True iff `parameter_set` ends with `SHA2-128s`
pub fn is_supported_parameter_set(parameter_set: &str) -> bool {
    parameter_set.ends_with(SUPPORTED_SUFFIX)
}

/// Filter a raw ACVP document down to the supported parameter set
pub fn filter_document(raw: &[u8]) -> Result<Vec<Value>, VectorError> {
    ParameterSetFilter::default().filter_document(raw)
}
