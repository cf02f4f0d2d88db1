use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One stratum in a contract's ordered dependency stack.
///
/// Layers are identified by name within a contract; index 0 in the stack is
/// the most fundamental (most-depended-upon) layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layer {
    name: String,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fully-qualified root module of this layer inside `package`.
    pub fn module_in(&self, package: &str) -> String {
        format!("{}.{}", package, self.name)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A single importer/imported module pair.
///
/// Used as a whitelist entry: an edge excluded from violation search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportPath {
    pub importer: String,
    pub imported: String,
}

impl ImportPath {
    pub fn new(importer: impl Into<String>, imported: impl Into<String>) -> Self {
        Self {
            importer: importer.into(),
            imported: imported.into(),
        }
    }
}

impl fmt::Display for ImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.importer, self.imported)
    }
}

/// Error raised when a whitelist entry lacks the ` <- ` separator.
#[derive(Debug, thiserror::Error)]
#[error("whitelisted paths must be in the format \"importer.module <- imported.module\" (got \"{0}\")")]
pub struct MalformedImportPath(pub String);

impl FromStr for ImportPath {
    type Err = MalformedImportPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(" <- ") {
            Some((importer, imported)) => Ok(Self::new(importer, imported)),
            None => Err(MalformedImportPath(s.to_string())),
        }
    }
}

/// A contiguous import chain through the graph, importer first.
///
/// The first element is the module doing the importing, the last element the
/// module ultimately imported; interior elements are the modules traversed to
/// get there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyPath(Vec<String>);

impl DependencyPath {
    pub fn new(modules: Vec<String>) -> Self {
        Self(modules)
    }

    pub fn modules(&self) -> &[String] {
        &self.0
    }

    /// The module doing the importing (first element), if any.
    pub fn importer(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// The module ultimately imported (last element), if any.
    pub fn imported(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// The modules traversed between the endpoints.
    pub fn interior(&self) -> &[String] {
        if self.0.len() <= 2 {
            &[]
        } else {
            &self.0[1..self.0.len() - 1]
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<&str>> for DependencyPath {
    fn from(modules: Vec<&str>) -> Self {
        Self(modules.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for DependencyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" <- "))
    }
}
