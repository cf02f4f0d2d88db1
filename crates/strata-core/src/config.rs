//! Contract configuration loading for strata.
//!
//! Reads `strata.json` — a mapping from contract name to the packages,
//! layer stack, and whitelisted paths that contract covers — and validates
//! it eagerly into typed definitions. Malformed configuration fails loudly
//! before any contract reaches the checker.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{ImportPath, Layer, MalformedImportPath};

/// One contract as written in `strata.json`.
///
/// `layers` is ordered lowest (most fundamental) first. Whitelist entries
/// use the `importer.module <- imported.module` string form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractConfig {
    pub packages: Vec<String>,
    pub layers: Vec<String>,
    #[serde(default)]
    pub whitelisted_paths: Vec<String>,
    #[serde(default)]
    pub recursive: bool,
}

/// A validated contract definition, ready to hand to the checker.
#[derive(Debug, Clone)]
pub struct ContractDefinition {
    pub name: String,
    pub packages: Vec<String>,
    pub layers: Vec<Layer>,
    pub whitelisted_paths: HashSet<ImportPath>,
    pub recursive: bool,
}

/// Errors surfaced while loading or validating contract configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
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

    #[error("contract '{contract}': {source}")]
    Whitelist {
        contract: String,
        #[source]
        source: MalformedImportPath,
    },

    #[error("contract '{contract}' declares no packages")]
    EmptyPackages { contract: String },

    #[error("contract '{contract}' declares no layers")]
    EmptyLayers { contract: String },

    #[error("contract '{contract}' declares layer '{layer}' more than once")]
    DuplicateLayer { contract: String, layer: String },
}

/// Load and validate every contract definition in the given config file.
///
/// Definitions are returned sorted by contract name, so a full run is
/// deterministic regardless of how the file was written.
pub fn load_definitions(path: &Path) -> Result<Vec<ContractDefinition>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let raw: BTreeMap<String, ContractConfig> =
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    raw.into_iter()
        .map(|(name, config)| validate(name, config))
        .collect()
}

/// Validate a single raw contract entry into a typed definition.
pub fn validate(name: String, config: ContractConfig) -> Result<ContractDefinition, ConfigError> {
    if config.packages.is_empty() {
        return Err(ConfigError::EmptyPackages { contract: name });
    }
    if config.layers.is_empty() {
        return Err(ConfigError::EmptyLayers { contract: name });
    }

    let mut seen = HashSet::new();
    for layer in &config.layers {
        if !seen.insert(layer.as_str()) {
            return Err(ConfigError::DuplicateLayer {
                contract: name,
                layer: layer.clone(),
            });
        }
    }

    let mut whitelisted_paths = HashSet::new();
    for entry in &config.whitelisted_paths {
        let path = entry
            .parse::<ImportPath>()
            .map_err(|source| ConfigError::Whitelist {
                contract: name.clone(),
                source,
            })?;
        whitelisted_paths.insert(path);
    }

    Ok(ContractDefinition {
        name,
        packages: config.packages,
        layers: config.layers.into_iter().map(Layer::new).collect(),
        whitelisted_paths,
        recursive: config.recursive,
    })
}
