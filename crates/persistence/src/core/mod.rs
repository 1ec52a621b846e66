//! Core storage traits.
//!
//! - [`PatientStorage`] - whole-collection load/save with CRUD built on top
//!
//! # Example: Implementing a Storage Backend
//!
//! A backend only has to provide `load`, `save` and `modify`:
//!
//! ```ignore
//! use async_trait::async_trait;
//! use vitals_persistence::core::PatientStorage;
//! use vitals_persistence::error::StorageResult;
//! use vitals_persistence::types::Collection;
//!
//! struct NullBackend;
//!
//! #[async_trait]
//! impl PatientStorage for NullBackend {
//!     fn backend_name(&self) -> &'static str {
//!         "null"
//!     }
//!
//!     async fn load(&self) -> StorageResult<Collection> {
//!         Ok(Collection::new())
//!     }
//!
//!     async fn save(&self, _collection: &Collection) -> StorageResult<()> {
//!         Ok(())
//!     }
//!
//!     async fn modify<T, F>(&self, f: F) -> StorageResult<T>
//!     where
//!         T: Send,
//!         F: FnOnce(&mut Collection) -> StorageResult<T> + Send,
//!     {
//!         let mut collection = self.load().await?;
//!         let out = f(&mut collection)?;
//!         self.save(&collection).await?;
//!         Ok(out)
//!     }
//! }
//! ```

mod storage;

pub use storage::PatientStorage;
