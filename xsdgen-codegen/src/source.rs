//! Schema sources and output locations.
//!
//! Thin wrappers over the network and filesystem used around a generation
//! run: fetching a remote schema, enumerating local schema files and
//! preparing the output directory.

use crate::error::CodegenError;
use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns true if `s` is an absolute URL with both a scheme and a host.
#[must_use]
pub fn is_valid_url(s: &str) -> bool {
    Url::parse(s).is_ok_and(|url| url.host_str().is_some_and(|host| !host.is_empty()))
}

/// Fetches a schema over HTTP.
///
/// A response outside the 2xx range yields an empty body rather than an
/// error; only transport failures are reported.
///
/// # Errors
/// Returns `CodegenError::Fetch` if the request cannot be sent or the body
/// cannot be read.
pub fn fetch_schema(url: &str) -> Result<Vec<u8>, CodegenError> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        tracing::debug!("Fetching {} returned {}, using empty schema", url, status);
        return Ok(Vec::new());
    }
    let body = response.bytes()?;
    tracing::debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}

/// Lists schema files under `path`.
///
/// A file yields itself. A directory yields every entry below it, itself
/// included, in file name order, followed by the directory path again.
///
/// # Errors
/// Returns an IO error if `path` does not exist, or a walk error if an entry
/// cannot be read.
pub fn list_files(path: &Path) -> Result<Vec<PathBuf>, CodegenError> {
    let metadata = fs::metadata(path)?;
    let mut files = Vec::new();
    if metadata.is_dir() {
        for entry in WalkDir::new(path).sort_by_file_name() {
            files.push(entry?.into_path());
        }
    }
    files.push(path.to_path_buf());
    Ok(files)
}

/// Creates the output directory and its parents if missing.
///
/// An empty path means "current directory" and is left alone.
///
/// # Errors
/// Returns an IO error if the directory cannot be created.
pub fn prepare_output_dir(path: &Path) -> Result<(), CodegenError> {
    if path.as_os_str().is_empty() || path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path)?;
    tracing::debug!("Created output directory {}", path.display());
    Ok(())
}
