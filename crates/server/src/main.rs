//! Vitals patient record server.
//!
//! Serves the patient record API over a single JSON data file.

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use vitals_persistence::backends::JsonFileBackend;
use vitals_rest::{ServerConfig, create_app_with_config, init_logging};

/// Opens the data file, creating an empty collection if allowed.
async fn open_backend(config: &ServerConfig) -> anyhow::Result<JsonFileBackend> {
    let backend = JsonFileBackend::open(&config.data_file);

    if config.create_if_missing {
        let created = backend
            .init()
            .await
            .with_context(|| format!("Failed to initialize {}", config.data_file.display()))?;
        if created {
            info!(data_file = %config.data_file.display(), "Created empty data file");
        }
    } else if !config.data_file.exists() {
        warn!(
            data_file = %config.data_file.display(),
            "Data file does not exist; requests will fail until it is created"
        );
    }

    Ok(backend)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level, config.json_logs);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        data_file = %config.data_file.display(),
        "Starting Vitals patient record server"
    );

    let backend = open_backend(&config).await?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}
