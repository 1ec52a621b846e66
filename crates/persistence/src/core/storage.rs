//! Core record storage trait.
//!
//! This module defines the [`PatientStorage`] trait. A backend supplies the
//! three primitive operations (`load`, `save` and `modify`); every other
//! operation is provided on top of them, so each one is a full
//! load-mutate-save cycle with no long-lived cache.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ResourceError, StorageError, StorageResult};
use crate::types::{Collection, PatientRecord, PatientUpdate};

/// Storage trait for the patient collection.
///
/// # Concurrency
///
/// Implementations serialize their own `modify` cycles with an in-process
/// lock, so two requests in the same process cannot interleave a
/// load-mutate-save. Nothing guards against another process writing the same
/// backing store; callers must not assume atomicity beyond a single call.
///
/// # Example
///
/// ```ignore
/// use vitals_persistence::core::PatientStorage;
/// use vitals_persistence::schema::validate_create;
///
/// async fn example<S: PatientStorage>(storage: &S) -> StorageResult<()> {
///     let record = validate_create(&serde_json::json!({
///         "id": "P001", "name": "Ananya", "age": 28, "gender": "female",
///         "contact": "987", "address": "Guwahati",
///         "height_cm": 165.0, "weight_kg": 90.0
///     }))?;
///     storage.create(record).await?;
///
///     let read = storage.get("P001").await?;
///     assert_eq!(read.bmi(), Some(33.06));
///
///     storage.delete("P001").await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait PatientStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Reads the entire collection.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend` - if the backing store is absent, unreadable
    ///   or malformed. There is no fallback to an empty collection.
    async fn load(&self) -> StorageResult<Collection>;

    /// Overwrites the entire collection.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend` - on I/O failure. Not retried.
    async fn save(&self, collection: &Collection) -> StorageResult<()>;

    /// Runs one load-mutate-save cycle under the backend's write lock.
    ///
    /// The collection is saved only if `f` succeeds; on error nothing is
    /// written and the error is returned unchanged.
    async fn modify<T, F>(&self, f: F) -> StorageResult<T>
    where
        T: Send,
        F: FnOnce(&mut Collection) -> StorageResult<T> + Send;

    /// Returns the whole collection.
    async fn list(&self) -> StorageResult<Collection> {
        self.load().await
    }

    /// Reads a record by id.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - if no record has this id
    async fn get(&self, id: &str) -> StorageResult<PatientRecord> {
        let mut collection = self.load().await?;
        collection
            .remove(id)
            .ok_or_else(|| StorageError::not_found(id))
    }

    /// Inserts or fully replaces a record. No uniqueness check.
    async fn put(&self, record: PatientRecord) -> StorageResult<()> {
        self.modify(move |collection| {
            collection.insert(record.id.clone(), record);
            Ok(())
        })
        .await
    }

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(AlreadyExists)` - if the id is taken
    async fn create(&self, record: PatientRecord) -> StorageResult<PatientRecord> {
        self.modify(move |collection| {
            if collection.contains_key(&record.id) {
                return Err(ResourceError::AlreadyExists {
                    id: record.id.clone(),
                }
                .into());
            }
            debug!(id = %record.id, "Inserting patient");
            collection.insert(record.id.clone(), record.clone());
            Ok(record)
        })
        .await
    }

    /// Applies a partial update and returns the updated record.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - if no record has this id
    async fn patch(&self, id: &str, update: PatientUpdate) -> StorageResult<PatientRecord> {
        self.modify(move |collection| {
            let record = collection
                .get_mut(id)
                .ok_or_else(|| StorageError::not_found(id))?;
            record.apply(update);
            Ok(record.clone())
        })
        .await
    }

    /// Removes a record and returns it.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - if no record has this id
    async fn delete(&self, id: &str) -> StorageResult<PatientRecord> {
        self.modify(move |collection| {
            collection
                .remove(id)
                .ok_or_else(|| StorageError::not_found(id))
        })
        .await
    }

    /// Returns the number of records.
    async fn count(&self) -> StorageResult<usize> {
        Ok(self.load().await?.len())
    }
}
