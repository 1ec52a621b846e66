//! Partial update handler: `PATCH [base]/update/{id}`

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, info};
use vitals_persistence::core::PatientStorage;
use vitals_persistence::schema::validate_update;

use crate::error::RestResult;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// Handler for partially updating a record.
///
/// Only the fields present in the body are changed; BMI is recomputed from the
/// resulting height and weight. An `id` key in the body is rejected.
///
/// # HTTP Request
///
/// `PATCH [base]/update/{id}`
///
/// # Response
///
/// - `200 OK` - `{"updated_data": ..}`
/// - `404 Not Found` - Unknown id
/// - `422 Unprocessable Entity` - Field constraints violated
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!(id = %id, "Processing update request");

    let update = validate_update(&body)?;
    if update.is_empty() {
        debug!(id = %id, "Update carries no fields");
    }

    let updated = state.storage().patch(&id, update).await?;
    info!(id = %id, "Updated patient");

    Ok(Json(json!({ "updated_data": updated.view() })).into_response())
}
