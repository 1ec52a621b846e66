//! Error types for the persistence layer.
//!
//! This module defines all error types used by the record store, following a
//! hierarchy that separates resource state errors, validation errors, query
//! errors and backend (I/O) errors.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all storage operations.
///
/// This enum encompasses every failure the core can surface, organized by
/// category. Nothing is recovered or retried inside the core; callers decide
/// how to report each category.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Resource state errors (unknown id, duplicate id, empty filter result)
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Input failed field constraints
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Bad sort or order argument
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Backing store could not be read or written
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to resource state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// No record with the given id exists.
    #[error("patient not found: {id}")]
    NotFound { id: String },

    /// A record with the given id already exists.
    #[error("patient id already exists: {id}")]
    AlreadyExists { id: String },

    /// A filter matched no records.
    #[error("no matching patients found")]
    NoMatches,
}

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// The offending field name (`body` when the payload itself is wrong).
    pub field: String,
    /// A human-readable description of the constraint.
    pub message: String,
}

impl FieldViolation {
    /// Creates a new violation for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Input failed one or more field constraints.
///
/// Every violated constraint is reported, not just the first one found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid patient data: {}", join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Creates a validation error from a list of violations.
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Creates a validation error with a single violation.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation::new(field, message)],
        }
    }

    /// Returns true if `field` has at least one violation.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised by the query engine for bad arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The sort field is not one of height_cm, weight_kg, bmi.
    #[error("invalid sort_by value: {field} (expected height_cm, weight_kg or bmi)")]
    InvalidSortField { field: String },

    /// The sort order is not asc or desc.
    #[error("invalid order value: {order} (expected asc or desc)")]
    InvalidSortOrder { order: String },
}

/// Errors from the backing store.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backing file does not exist.
    #[error("data file not found: {}", path.display())]
    Missing { path: PathBuf },

    /// Reading or writing the backing file failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a well-formed collection.
    #[error("malformed data file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be serialized.
    #[error("serialization error: {message}")]
    Serialization { message: String },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Shorthand for [`ResourceError::NotFound`].
    pub fn not_found(id: impl Into<String>) -> Self {
        StorageError::Resource(ResourceError::NotFound { id: id.into() })
    }

    /// Returns true for unknown-id and empty-filter errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::Resource(ResourceError::NotFound { .. } | ResourceError::NoMatches)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StorageError::not_found("P001");
        assert_eq!(err.to_string(), "patient not found: P001");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_error_lists_every_violation() {
        let err = ValidationError::new(vec![
            FieldViolation::new("age", "must be greater than 0 and less than 120"),
            FieldViolation::new("gender", "must be one of male, female, other"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("age:"));
        assert!(msg.contains("gender:"));
        assert!(err.has_field("age"));
        assert!(!err.has_field("name"));
    }

    #[test]
    fn test_query_error_conversion() {
        let err: StorageError = QueryError::InvalidSortOrder {
            order: "up".to_string(),
        }
        .into();
        assert!(matches!(err, StorageError::Query(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::Missing {
            path: PathBuf::from("pat.json"),
        };
        assert_eq!(err.to_string(), "data file not found: pat.json");
    }
}
