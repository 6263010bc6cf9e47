//! Generic loader for JSON array files.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use rac_core::errors::{DomainError, DomainResult};

/// A JSON file holding an array of records.
///
/// The file on disk is the source of truth; `load` reads and parses it in
/// full on every call. IO and parse failures both surface as
/// [`DomainError::Database`].
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store over the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole file into a vector of records
    pub async fn load<T: DeserializeOwned>(&self) -> DomainResult<Vec<T>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            DomainError::Database {
                message: format!("failed to read {}: {e}", self.path.display()),
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| DomainError::Database {
            message: format!("malformed store {}: {e}", self.path.display()),
        })
    }
}
