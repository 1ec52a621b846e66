//! Service banner.

use axum::Json;
use serde_json::{Value, json};

/// Handler for `GET /`.
pub async fn home_handler() -> Json<Value> {
    Json(json!({ "msg": "Patient Management System API" }))
}
