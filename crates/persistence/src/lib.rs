//! Vitals Persistence Layer
//!
//! This crate holds the core of the Vitals patient record service: the record
//! schema with its validation rules and derived BMI, the storage trait with
//! its backends, and the query engine used to filter, sort and paginate
//! listings.
//!
//! # Architecture
//!
//! - [`types`] - Records, partial updates, rendered views, the [`Gender`](types::Gender) enum
//! - [`schema`] - Validation entry points and [`compute_bmi`](schema::compute_bmi)
//! - [`core`] - The [`PatientStorage`] trait
//! - [`backends`] - JSON file and in-memory implementations
//! - [`query`] - Filtering, sorting and pagination
//! - [`error`] - Error types for all operations
//!
//! # Quick Start
//!
//! ```no_run
//! use vitals_persistence::backends::JsonFileBackend;
//! use vitals_persistence::core::PatientStorage;
//! use vitals_persistence::query::{self, PatientFilter};
//! use vitals_persistence::schema::validate_create;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = JsonFileBackend::open("pat.json");
//! backend.init().await?;
//!
//! let record = validate_create(&json!({
//!     "id": "P001",
//!     "name": "Ananya Verma",
//!     "age": 28,
//!     "gender": "female",
//!     "contact": "9876543210",
//!     "address": "Guwahati",
//!     "height_cm": 165.0,
//!     "weight_kg": 90.0
//! }))?;
//! backend.create(record).await?;
//!
//! let records: Vec<_> = backend.list().await?.into_values().collect();
//! let adults = query::filter(&records, &PatientFilter {
//!     min_age: 18,
//!     ..Default::default()
//! })?;
//! assert_eq!(adults[0].bmi(), Some(33.06));
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Each backend serializes its own load-mutate-save cycles with an in-process
//! lock. Several processes sharing one data file can still lose updates.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod query;
pub mod schema;
pub mod types;

// Re-export commonly used types at crate root
pub use core::PatientStorage;
pub use error::{StorageError, StorageResult};
pub use types::{Collection, Gender, Page, PatientRecord, PatientUpdate, PatientView};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
