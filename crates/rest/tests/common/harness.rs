//! REST API test harness.
//!
//! Builds a [`TestServer`] around the full application, including the
//! middleware stack.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use axum_test::TestServer;
use tempfile::TempDir;
use vitals_persistence::backends::{JsonFileBackend, MemoryBackend};
use vitals_persistence::core::PatientStorage;
use vitals_persistence::types::StoredPatient;
use vitals_rest::{ServerConfig, create_app_with_config};

use super::fixtures::seed_records;

/// A test server over a seeded in-memory backend.
pub fn seeded_server() -> TestServer {
    server_with(MemoryBackend::with_records(seed_records()), ServerConfig::for_testing())
}

/// A test server over an empty in-memory backend.
pub fn empty_server() -> TestServer {
    server_with(MemoryBackend::new(), ServerConfig::for_testing())
}

/// A test server over `backend` with `config`.
pub fn server_with<S>(backend: S, config: ServerConfig) -> TestServer
where
    S: PatientStorage + Send + Sync + 'static,
{
    let app = create_app_with_config(backend, config);
    TestServer::new(app).expect("Failed to create test server")
}

/// A server over a JSON file seeded with the fixture patients.
///
/// The file lives as long as the returned [`TempDir`].
pub fn file_server() -> (TestServer, TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("pat.json");

    let stored: BTreeMap<String, StoredPatient> = seed_records()
        .iter()
        .map(|r| (r.id.clone(), StoredPatient::from(r)))
        .collect();
    std::fs::write(&path, serde_json::to_vec_pretty(&stored).unwrap()).unwrap();

    let config = ServerConfig {
        data_file: path.clone(),
        ..ServerConfig::for_testing()
    };
    let server = server_with(JsonFileBackend::open(&path), config);
    (server, dir, path)
}

/// Reads the raw data file back as a JSON object.
pub fn read_data_file(path: &Path) -> serde_json::Value {
    let bytes = std::fs::read(path).expect("data file should exist");
    serde_json::from_slice(&bytes).expect("data file should be JSON")
}
