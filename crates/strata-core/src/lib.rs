//! Core types, configuration, and the dependency-graph seam for strata.
//!
//! This crate provides the foundational pieces used across all strata crates:
//! - [`types`] — Layers, whitelist edges, and dependency paths
//! - [`graph`] — The [`DependencyGraph`](graph::DependencyGraph) trait the checker consumes
//! - [`config`] — Contract configuration loading from `strata.json`
//! - [`trace`] — Structured check events and observers

pub mod config;
pub mod graph;
pub mod trace;
pub mod types;
