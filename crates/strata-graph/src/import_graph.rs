//! The concrete import graph behind the `DependencyGraph` trait.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;

use petgraph::graph::{DiGraph, NodeIndex};

use strata_core::graph::DependencyGraph;
use strata_core::types::{DependencyPath, ImportPath};

use crate::snapshot::{GraphSnapshot, SnapshotError};

/// A directed module import graph: an edge from `a` to `b` means `a`
/// imports `b`.
///
/// Lookups are by fully-qualified module name. Edge traversal order follows
/// insertion order, so path search is deterministic for a given snapshot.
#[derive(Debug, Default)]
pub struct ImportGraph {
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
}

impl ImportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an in-memory snapshot.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Self {
        let mut graph = Self::new();
        for module in &snapshot.modules {
            graph.add_module(module);
        }
        for import in &snapshot.imports {
            graph.add_import(&import.importer, &import.imported);
        }
        graph
    }

    /// Load a snapshot file and build a graph from it.
    pub fn from_snapshot_file(path: &Path) -> Result<Self, SnapshotError> {
        Ok(Self::from_snapshot(&GraphSnapshot::load(path)?))
    }

    /// Register a module, returning its node. Idempotent.
    pub fn add_module(&mut self, name: &str) -> NodeIndex {
        match self.indices.get(name) {
            Some(&index) => index,
            None => {
                let index = self.graph.add_node(name.to_string());
                self.indices.insert(name.to_string(), index);
                index
            }
        }
    }

    /// Record that `importer` imports `imported`, registering both modules.
    pub fn add_import(&mut self, importer: &str, imported: &str) {
        let from = self.add_module(importer);
        let to = self.add_module(imported);
        if !self.graph.contains_edge(from, to) {
            self.graph.add_edge(from, to, ());
        }
    }

    pub fn module_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn import_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn module_name(&self, index: NodeIndex) -> &str {
        &self.graph[index]
    }
}

impl DependencyGraph for ImportGraph {
    fn get_descendants(&self, module: &str) -> Vec<String> {
        let prefix = format!("{}.", module);
        let mut descendants: Vec<String> = self
            .indices
            .keys()
            .filter(|name| name.starts_with(&prefix))
            .cloned()
            .collect();
        descendants.sort();
        descendants
    }

    fn find_path(
        &self,
        upstream: &str,
        downstream: &str,
        ignore_paths: &HashSet<ImportPath>,
    ) -> Option<DependencyPath> {
        let start = *self.indices.get(upstream)?;
        let goal = *self.indices.get(downstream)?;

        // Breadth-first over import edges, so the witness is a shortest chain.
        let mut predecessor: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut visited: HashSet<NodeIndex> = HashSet::from([start]);
        let mut queue: VecDeque<NodeIndex> = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for next in self.graph.neighbors(current) {
                if visited.contains(&next) {
                    continue;
                }
                let edge = ImportPath::new(self.module_name(current), self.module_name(next));
                if ignore_paths.contains(&edge) {
                    continue;
                }
                predecessor.insert(next, current);
                if next == goal {
                    return Some(self.reconstruct(start, goal, &predecessor));
                }
                visited.insert(next);
                queue.push_back(next);
            }
        }

        None
    }
}

impl ImportGraph {
    fn reconstruct(
        &self,
        start: NodeIndex,
        goal: NodeIndex,
        predecessor: &HashMap<NodeIndex, NodeIndex>,
    ) -> DependencyPath {
        let mut chain = vec![self.module_name(goal).to_string()];
        let mut current = goal;
        while current != start {
            current = predecessor[&current];
            chain.push(self.module_name(current).to_string());
        }
        chain.reverse();
        DependencyPath::new(chain)
    }
}

#[cfg(test)]
#[path = "import_graph_tests.rs"]
mod tests;
