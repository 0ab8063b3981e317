//! Key store persistence.
//!
//! This module provides the durable storage for API key records:
//! - The whole record set is loaded once at startup
//! - The whole record set is rewritten on every mutation
//!
//! Records are kept in a single JSON file keyed by key hash. Writes go to a
//! temporary file first and are renamed into place, so an interrupted write
//! never replaces the previous state with a truncated file.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::{error::AppError, models::api_key::ApiKeyRecord};

/// File-backed store for the API key registry.
#[derive(Debug)]
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    /// Create a store backed by the given file path.
    ///
    /// The file does not need to exist yet; it is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load all records from the backing file.
    ///
    /// - Missing file: returns an empty map (first run)
    /// - Unreadable or corrupt file: logs a warning and returns an empty map,
    ///   so a damaged store never prevents the service from starting
    pub async fn load(&self) -> HashMap<String, ApiKeyRecord> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return HashMap::new();
            }
            Err(e) => {
                tracing::warn!("Could not read key store {}: {}", self.path.display(), e);
                return HashMap::new();
            }
        };

        match serde_json::from_slice(&contents) {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!("Could not parse key store {}: {}", self.path.display(), e);
                HashMap::new()
            }
        }
    }

    /// Persist the full record set to the backing file.
    ///
    /// The serialized set is written to `<path>.tmp` and renamed over the
    /// target, so readers either see the old state or the new state.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails. Callers
    /// must surface this rather than swallow it: a silently failed write would
    /// make issued keys vanish on the next restart.
    pub async fn persist(&self, keys: &HashMap<String, ApiKeyRecord>) -> Result<(), AppError> {
        let contents = serde_json::to_vec_pretty(keys)?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &contents).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }
}
