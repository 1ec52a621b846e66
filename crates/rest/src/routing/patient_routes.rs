//! Patient route configuration.

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use vitals_persistence::core::PatientStorage;

use crate::handlers;
use crate::state::AppState;

/// Creates all routes of the patient record API.
///
/// # Routes
///
/// ## Service
/// - `GET /` - Banner
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Records
/// - `GET /data` - Every record
/// - `GET /data/{id}` - One record
/// - `POST /create` - Create
/// - `PATCH /update/{id}` - Partial update
/// - `DELETE /delete/{id}` - Delete
///
/// ## Queries
/// - `GET /search` - Gender and age-range search
/// - `GET /sorted` - Sort by height_cm, weight_kg or bmi
/// - `GET /filter/{gender}` - Exact gender filter
/// - `GET /pagination` - Offset pagination
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: PatientStorage + Send + Sync + 'static,
{
    Router::new()
        // Service routes
        .route("/", get(handlers::home_handler))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        // Record routes
        .route("/data", get(handlers::list_handler::<S>))
        .route("/data/{id}", get(handlers::read_handler::<S>))
        .route("/create", post(handlers::create_handler::<S>))
        .route("/update/{id}", patch(handlers::update_handler::<S>))
        .route("/delete/{id}", delete(handlers::delete_handler::<S>))
        // Query routes
        .route("/search", get(handlers::search_handler::<S>))
        .route("/sorted", get(handlers::sorted_handler::<S>))
        .route("/filter/{gender}", get(handlers::filter_handler::<S>))
        .route("/pagination", get(handlers::pagination_handler::<S>))
        // State
        .with_state(state)
}
