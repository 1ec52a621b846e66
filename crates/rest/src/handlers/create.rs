//! Create handler: `POST [base]/create`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, info};
use vitals_persistence::core::PatientStorage;
use vitals_persistence::schema::validate_create;

use crate::error::RestResult;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// Handler for creating a record.
///
/// The body is validated as a whole, so every violated field is reported in
/// one response. The id is chosen by the client.
///
/// # HTTP Request
///
/// `POST [base]/create`
///
/// # Response
///
/// - `201 Created` - `{"msg": .., "patient": ..}`
/// - `400 Bad Request` - Malformed JSON or id already exists
/// - `422 Unprocessable Entity` - Field constraints violated
///
/// # Example
///
/// ```http
/// POST /create HTTP/1.1
/// Content-Type: application/json
///
/// {"id": "P011", "name": "Ravi Das", "age": 41, "gender": "male",
///  "contact": "9000000011", "address": "Pune", "height_cm": 172, "weight_kg": 70}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(body): JsonBody,
) -> RestResult<Response>
where
    S: PatientStorage + Send + Sync,
{
    debug!("Processing create request");

    let record = validate_create(&body)?;
    let created = state.storage().create(record).await?;

    info!(id = %created.id, "Created patient");

    let response = json!({
        "msg": "Data inserted successfully",
        "patient": created.view(),
    });
    Ok((StatusCode::CREATED, Json(response)).into_response())
}
