//! Query handlers: search, sort, gender filter and pagination.
//!
//! Each handler loads the collection once, hands the records (in id order) to
//! the query engine and renders the result with BMI attached.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, warn};
use vitals_persistence::core::PatientStorage;
use vitals_persistence::query;
use vitals_persistence::types::{Gender, PatientRecord, PatientView};

use crate::error::{RestError, RestResult};
use crate::extractors::{Pagination, SearchParams, SortParams};
use crate::state::AppState;

async fn load_records<S>(state: &AppState<S>) -> RestResult<Vec<PatientRecord>>
where
    S: PatientStorage + Send + Sync,
{
    Ok(state.storage().list().await?.into_values().collect())
}

fn views(records: Vec<PatientRecord>) -> Vec<PatientView> {
    records.into_iter().map(PatientView::from).collect()
}

/// Handler for searching by gender and age range.
///
/// # HTTP Request
///
/// `GET [base]/search?gender=&min_age=&max_age=&limit=`
///
/// # Response
///
/// - `200 OK` - At most `limit` matching records
/// - `404 Not Found` - `{"detail": "No matching patients found"}`
/// - `422 Unprocessable Entity` - A parameter is out of range
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    params: SearchParams,
) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!(
        gender = ?params.filter.gender,
        min_age = params.filter.min_age,
        max_age = params.filter.max_age,
        limit = params.limit,
        "Processing search request"
    );

    let records = load_records(&state).await?;
    let mut matched = query::filter(&records, &params.filter).inspect_err(|_| {
        warn!(gender = ?params.filter.gender, "Search matched no patients");
    })?;
    matched.truncate(params.limit);

    Ok(Json(views(matched)).into_response())
}

/// Handler for listing records sorted by a numeric field.
///
/// # HTTP Request
///
/// `GET [base]/sorted?sort_by=height_cm|weight_kg|bmi&order=asc|desc`
///
/// # Response
///
/// - `200 OK` - Every record, sorted
/// - `400 Bad Request` - Unknown `sort_by` or `order`
/// - `422 Unprocessable Entity` - `sort_by` missing
pub async fn sorted_handler<S>(
    State(state): State<AppState<S>>,
    params: SortParams,
) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!(sort_by = %params.sort_by, order = %params.order, "Processing sorted request");

    let records = load_records(&state).await?;
    let sorted = query::sort(records, &params.sort_by, &params.order)?;

    Ok(Json(views(sorted)).into_response())
}

/// Handler for listing records of one gender.
///
/// The path segment must be exactly `male`, `female` or `other`. No match is
/// an empty list, not an error.
///
/// # HTTP Request
///
/// `GET [base]/filter/{gender}`
///
/// # Response
///
/// - `200 OK` - `{"patients": [..]}`
/// - `422 Unprocessable Entity` - Unknown gender
pub async fn filter_handler<S>(
    State(state): State<AppState<S>>,
    Path(gender): Path<String>,
) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!(gender = %gender, "Processing filter request");

    let gender = gender
        .parse::<Gender>()
        .map_err(|e| RestError::invalid_field("gender", e.to_string()))?;

    let records = load_records(&state).await?;
    let patients = query::filter_by_gender(&records, gender);

    Ok(Json(json!({ "patients": views(patients) })).into_response())
}

/// Handler for offset pagination over the collection in id order.
///
/// # HTTP Request
///
/// `GET [base]/pagination?skip=&limit=`
///
/// # Response
///
/// - `200 OK` - `{"total": .., "skip": .., "limit": .., "data": [..]}`
/// - `422 Unprocessable Entity` - Negative `skip` or `limit`
pub async fn pagination_handler<S>(
    State(state): State<AppState<S>>,
    pagination: Pagination,
) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!(
        skip = pagination.skip(),
        limit = pagination.limit(),
        "Processing pagination request"
    );

    let records = load_records(&state).await?;
    let page = query::paginate(&records, pagination.skip(), pagination.limit())
        .map(PatientView::from);

    Ok(Json(page).into_response())
}
