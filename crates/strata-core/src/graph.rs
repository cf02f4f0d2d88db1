use std::collections::HashSet;

use crate::types::{DependencyPath, ImportPath};

/// Read-only view of a module import graph.
///
/// The checker consumes this trait; building the graph (from an indexer
/// snapshot, a database, or a test fixture) is the implementor's concern.
/// Absence is never an error here: an unknown module has no descendants and
/// no paths.
pub trait DependencyGraph {
    /// All modules whose fully-qualified name is a strict descendant
    /// (nested sub-module, any depth) of `module`. Empty if none.
    fn get_descendants(&self, module: &str) -> Vec<String>;

    /// One import chain (endpoints inclusive) showing that `upstream`
    /// imports `downstream` directly or transitively, ignoring any edge in
    /// `ignore_paths`. `None` if no such chain exists.
    fn find_path(
        &self,
        upstream: &str,
        downstream: &str,
        ignore_paths: &HashSet<ImportPath>,
    ) -> Option<DependencyPath>;
}
