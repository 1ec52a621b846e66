//! Delete handler: `DELETE [base]/delete/{id}`

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, info};
use vitals_persistence::core::PatientStorage;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for deleting a record.
///
/// # HTTP Request
///
/// `DELETE [base]/delete/{id}`
///
/// # Response
///
/// - `200 OK` - `{"msg": .., "deleted_data": ..}` with the removed record
/// - `404 Not Found` - Unknown id
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!(id = %id, "Processing delete request");

    let deleted = state.storage().delete(&id).await?;
    info!(id = %id, "Deleted patient");

    let response = json!({
        "msg": format!("Patient {} deleted successfully", id),
        "deleted_data": deleted.view(),
    });
    Ok(Json(response).into_response())
}
