//! Pagination extractor.
//!
//! Extracts `skip` and `limit` from the query string of `/pagination`.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use vitals_persistence::core::PatientStorage;
use vitals_persistence::error::FieldViolation;

use crate::error::RestError;
use crate::state::AppState;

/// Axum extractor for pagination parameters.
///
/// `skip` defaults to 0 and `limit` to the configured default page size.
/// Negative values are rejected with 422; non-integers with 400.
///
/// # Example
///
/// ```rust,ignore
/// use vitals_rest::extractors::Pagination;
///
/// async fn list_handler(pagination: Pagination) {
///     let skip = pagination.skip();
///     let limit = pagination.limit();
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    skip: usize,
    limit: usize,
}

/// Query parameters for pagination.
#[derive(Debug, Deserialize)]
struct PaginationQuery {
    skip: Option<i64>,
    limit: Option<i64>,
}

impl Pagination {
    /// Creates a new Pagination with the given values.
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }

    /// Returns the number of records to skip.
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Returns the page size.
    pub fn limit(&self) -> usize {
        self.limit
    }

    fn from_query(query: PaginationQuery, default_limit: usize) -> Result<Self, RestError> {
        let mut violations = Vec::new();
        let skip = non_negative("skip", query.skip, 0, &mut violations);
        let limit = non_negative("limit", query.limit, default_limit, &mut violations);

        if !violations.is_empty() {
            return Err(RestError::Validation { violations });
        }
        Ok(Self { skip, limit })
    }
}

fn non_negative(
    field: &str,
    value: Option<i64>,
    default: usize,
    violations: &mut Vec<FieldViolation>,
) -> usize {
    match value {
        None => default,
        Some(v) => usize::try_from(v).unwrap_or_else(|_| {
            violations.push(FieldViolation::new(
                field,
                format!("must be greater than or equal to 0 (got {})", v),
            ));
            default
        }),
    }
}

impl<S> FromRequestParts<AppState<S>> for Pagination
where
    S: PatientStorage + 'static,
{
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: e.body_text(),
            })?;

        Self::from_query(query, state.default_page_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(skip: Option<i64>, limit: Option<i64>) -> PaginationQuery {
        PaginationQuery { skip, limit }
    }

    #[test]
    fn test_defaults() {
        let p = Pagination::from_query(query(None, None), 10).unwrap();
        assert_eq!(p, Pagination::new(0, 10));
    }

    #[test]
    fn test_explicit_values() {
        let p = Pagination::from_query(query(Some(8), Some(5)), 10).unwrap();
        assert_eq!(p.skip(), 8);
        assert_eq!(p.limit(), 5);
    }

    #[test]
    fn test_negative_values_report_both_fields() {
        let err = Pagination::from_query(query(Some(-1), Some(-3)), 10).unwrap_err();
        match err {
            RestError::Validation { violations } => {
                assert_eq!(violations.len(), 2);
                assert_eq!(violations[0].field, "skip");
                assert_eq!(violations[1].field, "limit");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
