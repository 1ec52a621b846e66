//! JSON file backend.
//!
//! The whole collection lives in one JSON object mapping patient id to the
//! record fields (see [`StoredPatient`]). Every operation reads the whole file
//! and every mutation rewrites it.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::core::PatientStorage;
use crate::error::{BackendError, StorageResult};
use crate::types::{Collection, StoredPatient};

/// Storage backend over a single JSON file.
pub struct JsonFileBackend {
    path: PathBuf,
    config: JsonFileBackendConfig,
    /// Serializes load-mutate-save cycles within this process.
    write_lock: Mutex<()>,
}

impl Debug for JsonFileBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileBackend")
            .field("path", &self.path)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Configuration for the JSON file backend.
#[derive(Debug, Clone)]
pub struct JsonFileBackendConfig {
    /// Write to a sibling temp file and rename it over the target.
    ///
    /// When false the file is rewritten in place.
    pub atomic_replace: bool,

    /// Pretty-print the file.
    pub pretty: bool,
}

impl Default for JsonFileBackendConfig {
    fn default() -> Self {
        Self {
            atomic_replace: true,
            pretty: true,
        }
    }
}

impl JsonFileBackend {
    /// Opens a backend over `path`. The file is not touched until first use.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::with_config(path, JsonFileBackendConfig::default())
    }

    /// Creates a backend with custom configuration.
    pub fn with_config<P: AsRef<Path>>(path: P, config: JsonFileBackendConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with an empty collection if it does not exist.
    ///
    /// Returns true if the file was created.
    pub async fn init(&self) -> StorageResult<bool> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => Ok(false),
            Ok(false) => {
                info!(path = %self.path.display(), "Creating empty data file");
                self.write(&Collection::new()).await?;
                Ok(true)
            }
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> crate::error::StorageError {
        BackendError::Io {
            path: self.path.clone(),
            source,
        }
        .into()
    }

    async fn read(&self) -> StorageResult<Collection> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "Data file missing");
                return Err(BackendError::Missing {
                    path: self.path.clone(),
                }
                .into());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let stored: BTreeMap<String, StoredPatient> =
            serde_json::from_slice(&bytes).map_err(|source| BackendError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), records = stored.len(), "Loaded collection");

        Ok(stored
            .into_iter()
            .map(|(id, patient)| (id.clone(), patient.into_record(id)))
            .collect())
    }

    async fn write(&self, collection: &Collection) -> StorageResult<()> {
        let stored: BTreeMap<&str, StoredPatient> = collection
            .iter()
            .map(|(id, record)| (id.as_str(), StoredPatient::from(record)))
            .collect();

        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(&stored)
        } else {
            serde_json::to_vec(&stored)
        }
        .map_err(|e| BackendError::Serialization {
            message: e.to_string(),
        })?;

        if self.config.atomic_replace {
            let tmp = self.temp_path();
            tokio::fs::write(&tmp, &bytes)
                .await
                .map_err(|e| self.io_error(e))?;
            tokio::fs::rename(&tmp, &self.path)
                .await
                .map_err(|e| self.io_error(e))?;
        } else {
            tokio::fs::write(&self.path, &bytes)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        debug!(path = %self.path.display(), records = collection.len(), "Saved collection");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl PatientStorage for JsonFileBackend {
    fn backend_name(&self) -> &'static str {
        "json-file"
    }

    async fn load(&self) -> StorageResult<Collection> {
        self.read().await
    }

    async fn save(&self, collection: &Collection) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write(collection).await
    }

    async fn modify<T, F>(&self, f: F) -> StorageResult<T>
    where
        T: Send,
        F: FnOnce(&mut Collection) -> StorageResult<T> + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.read().await?;
        let out = f(&mut collection)?;
        self.write(&collection).await?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_sibling() {
        let backend = JsonFileBackend::open("/data/pat.json");
        assert_eq!(backend.temp_path(), PathBuf::from("/data/pat.json.tmp"));
    }

    #[test]
    fn test_default_config() {
        let config = JsonFileBackendConfig::default();
        assert!(config.atomic_replace);
        assert!(config.pretty);
    }
}
