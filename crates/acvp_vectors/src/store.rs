//! On-disk vector files and their cache tokens
//!
//! A filtered vector file `keygen.json` is accompanied by `keygen.json.etag`
//! holding the raw ETag of the download it came from. Writes truncate in
//! place; a crash mid-write can leave a partial file.

use crate::error::VectorError;
use serde_json::Value;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// `<output>.etag`
pub fn etag_path(output: &Path) -> PathBuf {
    let mut name = OsString::from(output.as_os_str());
    name.push(".etag");
    PathBuf::from(name)
}

/// Previously stored ETag, or an empty string when there is none
///
/// A missing or unreadable token file is the normal first-run state.
pub fn read_stored_token(output: &Path) -> String {
    let path = etag_path(output);
    match fs::read_to_string(&path) {
        Ok(token) => token,
        Err(e) => {
            debug!("No stored token at {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Write `groups` as a JSON array to `path`, plus the token if non-empty
pub fn persist(groups: &[Value], path: &Path, token: Option<&str>) -> Result<(), VectorError> {
    let file = File::create(path).map_err(|e| VectorError::filesystem(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, groups).map_err(|e| {
        VectorError::filesystem(path, std::io::Error::new(std::io::ErrorKind::Other, e))
    })?;
    writer
        .flush()
        .map_err(|e| VectorError::filesystem(path, e))?;

    if let Some(token) = token.filter(|t| !t.is_empty()) {
        let token_path = etag_path(path);
        fs::write(&token_path, token).map_err(|e| VectorError::filesystem(&token_path, e))?;
        debug!("Stored token {:?} at {}", token, token_path.display());
    }

    Ok(())
}
