//! Query-string extractors for `/search` and `/sorted`.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use vitals_persistence::core::PatientStorage;
use vitals_persistence::error::FieldViolation;
use vitals_persistence::query::{DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, PatientFilter};

use crate::error::RestError;
use crate::state::AppState;

/// Parses the query string into `T`, mapping failures to 400.
async fn parse_query<T, St>(parts: &mut Parts, state: &St) -> Result<T, RestError>
where
    T: serde::de::DeserializeOwned,
    St: Send + Sync,
{
    Query::<T>::from_request_parts(parts, state)
        .await
        .map(|Query(q)| q)
        .map_err(|e| RestError::BadRequest {
            message: e.body_text(),
        })
}

/// Validated parameters of `GET /search`.
///
/// - `gender`: optional, compared case-insensitively
/// - `min_age`: default 0, must be >= 0
/// - `max_age`: default 120, must be <= 120
/// - `limit`: default is the configured page size, must be in 1..=max_search_limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Filter criteria handed to the query engine.
    pub filter: PatientFilter,
    /// Maximum number of records returned.
    pub limit: usize,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    gender: Option<String>,
    min_age: Option<i64>,
    max_age: Option<i64>,
    limit: Option<i64>,
}

impl SearchParams {
    fn from_query(
        query: SearchQuery,
        default_limit: usize,
        max_limit: usize,
    ) -> Result<Self, RestError> {
        let mut violations = Vec::new();

        let min_age = match query.min_age {
            None => DEFAULT_MIN_AGE,
            Some(v) if v < 0 => {
                violations.push(FieldViolation::new(
                    "min_age",
                    format!("must be greater than or equal to 0 (got {})", v),
                ));
                DEFAULT_MIN_AGE
            }
            // Any lower bound above the age range matches nothing.
            Some(v) => u32::try_from(v).unwrap_or(u32::MAX),
        };

        let max_age = match query.max_age {
            None => DEFAULT_MAX_AGE,
            Some(v) if v > i64::from(DEFAULT_MAX_AGE) => {
                violations.push(FieldViolation::new(
                    "max_age",
                    format!("must be less than or equal to {} (got {})", DEFAULT_MAX_AGE, v),
                ));
                DEFAULT_MAX_AGE
            }
            // A negative upper bound matches nothing; the filter reports that.
            Some(v) => u32::try_from(v).unwrap_or(0),
        };

        let limit = match query.limit {
            None => default_limit.min(max_limit),
            Some(v) => match usize::try_from(v) {
                Ok(n) if (1..=max_limit).contains(&n) => n,
                _ => {
                    violations.push(FieldViolation::new(
                        "limit",
                        format!(
                            "must be greater than 0 and at most {} (got {})",
                            max_limit, v
                        ),
                    ));
                    default_limit
                }
            },
        };

        if !violations.is_empty() {
            return Err(RestError::Validation { violations });
        }

        Ok(Self {
            filter: PatientFilter {
                gender: query.gender.filter(|g| !g.is_empty()),
                min_age,
                max_age,
            },
            limit,
        })
    }
}

impl<S> FromRequestParts<AppState<S>> for SearchParams
where
    S: PatientStorage + 'static,
{
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let query: SearchQuery = parse_query(parts, state).await?;
        Self::from_query(query, state.default_page_size(), state.max_search_limit())
    }
}

/// Raw parameters of `GET /sorted`.
///
/// `sort_by` is required. Its value, and `order` (default `asc`), are checked
/// by the query engine, which answers 400 for anything it does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortParams {
    /// One of height_cm, weight_kg, bmi.
    pub sort_by: String,
    /// One of asc, desc.
    pub order: String,
}

#[derive(Debug, Default, Deserialize)]
struct SortQuery {
    sort_by: Option<String>,
    order: Option<String>,
}

impl SortParams {
    fn from_query(query: SortQuery) -> Result<Self, RestError> {
        let sort_by = query
            .sort_by
            .ok_or_else(|| RestError::invalid_field("sort_by", "field required"))?;

        Ok(Self {
            sort_by,
            order: query.order.unwrap_or_else(|| "asc".to_string()),
        })
    }
}

impl<S> FromRequestParts<S> for SortParams
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let query: SortQuery = parse_query(parts, state).await?;
        Self::from_query(query)
    }
}
