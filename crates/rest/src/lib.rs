//! # vitals-rest - Patient record HTTP API
//!
//! This crate exposes the Vitals patient record store over HTTP with
//! [axum](https://docs.rs/axum). Records live in a single JSON file (or in
//! memory for tests) behind the [`PatientStorage`] trait; this crate adds
//! request extraction, validation reporting, routing and middleware.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vitals_rest::{create_app, ServerConfig};
//! use vitals_persistence::backends::JsonFileBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = JsonFileBackend::open("pat.json");
//!     backend.init().await?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | banner | GET | `/` |
//! | health | GET | `/health` |
//! | list | GET | `/data` |
//! | read | GET | `/data/{id}` |
//! | search | GET | `/search?gender&min_age&max_age&limit` |
//! | sort | GET | `/sorted?sort_by&order` |
//! | create | POST | `/create` |
//! | update | PATCH | `/update/{id}` |
//! | delete | DELETE | `/delete/{id}` |
//! | gender filter | GET | `/filter/{gender}` |
//! | pagination | GET | `/pagination?skip&limit` |
//!
//! Every record in a response carries its derived `bmi` (`null` when height
//! or weight make it not computable).
//!
//! ## Error Handling
//!
//! Errors are returned as `{"detail": ...}`:
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | Malformed JSON, duplicate id, unknown sort field or order, unparseable query |
//! | 404 | Unknown id, or a search with no matches |
//! | 413 | Body over `max_body_size` |
//! | 415 | Non-JSON body |
//! | 422 | Field or query parameter constraints violated |
//! | 500 | Data file missing, unreadable or malformed |
//!
//! ## Architecture
//!
//! - [`error`] - Error type and JSON error rendering
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Body and query-string extractors
//! - [`routing`] - Route configuration
//!
//! [`PatientStorage`]: vitals_persistence::core::PatientStorage

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::DefaultBodyLimit, http::StatusCode};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use vitals_persistence::core::PatientStorage;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
///
/// # Example
///
/// ```rust,ignore
/// use vitals_rest::create_app;
/// use vitals_persistence::backends::MemoryBackend;
///
/// let app = create_app(MemoryBackend::new());
/// ```
pub fn create_app<S>(storage: S) -> Router
where
    S: PatientStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up every route together with tracing, request timeout, body size
/// limit and, when enabled, CORS and `x-request-id` handling.
///
/// # Example
///
/// ```rust,ignore
/// use vitals_rest::{create_app_with_config, ServerConfig};
/// use vitals_persistence::backends::JsonFileBackend;
///
/// let backend = JsonFileBackend::open("pat.json");
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: PatientStorage + Send + Sync + 'static,
{
    info!(
        backend = storage.backend_name(),
        "Creating patient record API"
    );

    let state = AppState::new(Arc::new(storage), config.clone());

    let router = routing::create_routes(state).layer(DefaultBodyLimit::max(config.max_body_size));

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    let router = router.layer(service_builder);

    // Outermost, so the id is set before the trace span opens
    if config.enable_request_id {
        router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    } else {
        router
    }
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
/// * `json` - Emit one JSON object per event instead of human-readable lines
pub fn init_logging(level: &str, json: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "vitals_rest={level},vitals_persistence={level},vitals={level},tower_http=debug"
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
