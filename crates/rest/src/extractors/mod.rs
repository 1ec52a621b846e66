//! Axum extractors for the patient record API.
//!
//! This module provides extractors that turn request bodies and query strings
//! into validated inputs, rejecting bad requests with a [`RestError`].
//!
//! [`RestError`]: crate::error::RestError

pub mod json_body;
pub mod pagination;
pub mod query;

pub use json_body::JsonBody;
pub use pagination::Pagination;
pub use query::{SearchParams, SortParams};
