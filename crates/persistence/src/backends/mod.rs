//! Storage backend implementations.
//!
//! | Backend | Description |
//! |---------|-------------|
//! | [`JsonFileBackend`] | One JSON file, rewritten wholesale on every mutation |
//! | [`MemoryBackend`] | In-process collection for tests and ephemeral runs |
//!
//! # Example
//!
//! ```no_run
//! use vitals_persistence::backends::JsonFileBackend;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = JsonFileBackend::open("pat.json");
//! backend.init().await?;
//! # Ok(())
//! # }
//! ```

pub mod json_file;
pub mod memory;

pub use json_file::{JsonFileBackend, JsonFileBackendConfig};
pub use memory::MemoryBackend;
