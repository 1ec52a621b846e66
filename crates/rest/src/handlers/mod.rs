//! HTTP request handlers for the patient record API.
//!
//! - [`home`] - Service banner
//! - [`health`] - Health, liveness and readiness probes
//! - [`read`] - List every record, or read one by id
//! - [`create`] - Create a record
//! - [`patch`] - Partially update a record
//! - [`delete`] - Delete a record
//! - [`search`] - Search, sort, filter by gender and paginate

pub mod create;
pub mod delete;
pub mod health;
pub mod home;
pub mod patch;
pub mod read;
pub mod search;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use home::home_handler;
pub use patch::update_handler;
pub use read::{list_handler, read_handler};
pub use search::{filter_handler, pagination_handler, search_handler, sorted_handler};
