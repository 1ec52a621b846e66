//! Read handlers: the whole collection, or one record by id.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::debug;
use vitals_persistence::core::PatientStorage;
use vitals_persistence::types::PatientView;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for listing every record.
///
/// # HTTP Request
///
/// `GET [base]/data`
///
/// # Response
///
/// - `200 OK` - JSON object mapping id to the record with its BMI
/// - `500 Internal Server Error` - Data file missing or malformed
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!("Processing list request");

    let collection = state.storage().list().await?;
    let views: BTreeMap<String, PatientView> = collection
        .into_iter()
        .map(|(id, record)| (id, PatientView::from(record)))
        .collect();

    debug!(count = views.len(), "Listed patients");
    Ok(Json(views).into_response())
}

/// Handler for reading one record.
///
/// # HTTP Request
///
/// `GET [base]/data/{id}`
///
/// # Response
///
/// - `200 OK` - The record with its BMI
/// - `404 Not Found` - `{"detail": "Patient not found"}`
///
/// # Example
///
/// ```http
/// GET /data/P001 HTTP/1.1
/// Host: vitals.example.com
/// ```
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!(id = %id, "Processing read request");

    let record = state.storage().get(&id).await?;
    Ok(Json(record.view()).into_response())
}
