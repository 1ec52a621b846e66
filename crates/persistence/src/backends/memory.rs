//! In-memory backend.
//!
//! Holds the collection in process memory. Used by tests and for ephemeral
//! runs where nothing should touch the disk.

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::core::PatientStorage;
use crate::error::StorageResult;
use crate::types::{Collection, PatientRecord};

/// Storage backend over an in-process collection.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    collection: RwLock<Collection>,
    write_lock: Mutex<()>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend seeded with `records`.
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PatientRecord>,
    {
        let collection = records.into_iter().map(|r| (r.id.clone(), r)).collect();
        Self {
            collection: RwLock::new(collection),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl PatientStorage for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn load(&self) -> StorageResult<Collection> {
        Ok(self.collection.read().clone())
    }

    async fn save(&self, collection: &Collection) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        *self.collection.write() = collection.clone();
        Ok(())
    }

    async fn modify<T, F>(&self, f: F) -> StorageResult<T>
    where
        T: Send,
        F: FnOnce(&mut Collection) -> StorageResult<T> + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.collection.read().clone();
        let out = f(&mut collection)?;
        *self.collection.write() = collection;
        Ok(out)
    }
}
