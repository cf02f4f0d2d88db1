//! On-disk import graph snapshots.
//!
//! A snapshot is the JSON artifact an external indexer writes after walking
//! a codebase: the modules it saw and the import edges between them.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// One observed import: `importer` imports `imported`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportRecord {
    pub importer: String,
    pub imported: String,
}

/// The full import graph as written by an indexer.
///
/// `modules` registers import-free modules that never appear in an edge;
/// modules mentioned in `imports` are registered implicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub imports: Vec<ImportRecord>,
}

/// Errors surfaced while reading a snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GraphSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
