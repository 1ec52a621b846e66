//! Test infrastructure for the persistence layer.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;
use vitals_persistence::backends::JsonFileBackend;

/// A JSON file backend in a fresh temp directory.
///
/// The directory lives as long as the returned guard.
pub fn temp_backend() -> (TempDir, JsonFileBackend, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("pat.json");
    let backend = JsonFileBackend::open(&path);
    (dir, backend, path)
}
