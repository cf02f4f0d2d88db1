/// Shared test helpers for all strata integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write a contracts config and a graph snapshot into a fresh directory.
///
/// Returns (TempDir, config path, snapshot path). Hold the TempDir to keep
/// the directory alive.
#[allow(dead_code)]
pub fn setup_project(config: &serde_json::Value, snapshot: &serde_json::Value) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("strata.json");
    let snapshot_path = dir.path().join("graph.json");
    fs::write(&config_path, config.to_string()).unwrap();
    fs::write(&snapshot_path, snapshot.to_string()).unwrap();
    (dir, config_path, snapshot_path)
}

/// A three-layer contract over `app` with no whitelist.
#[allow(dead_code)]
pub fn three_layer_config() -> serde_json::Value {
    serde_json::json!({
        "app-layers": {
            "packages": ["app"],
            "layers": ["low", "mid", "high"]
        }
    })
}
