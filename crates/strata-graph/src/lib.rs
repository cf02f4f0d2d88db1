//! Import graph construction for strata.
//!
//! The checker only sees the [`DependencyGraph`](strata_core::graph::DependencyGraph)
//! trait; this crate provides the concrete [`ImportGraph`](import_graph::ImportGraph)
//! behind it, built from a JSON snapshot produced by an external indexer.
//! strata never parses source code itself.

pub mod import_graph;
pub mod snapshot;

pub use import_graph::ImportGraph;
pub use snapshot::{GraphSnapshot, ImportRecord, SnapshotError};
