use std::collections::HashSet;
use std::fmt;

use strata_core::config::ContractDefinition;
use strata_core::graph::DependencyGraph;
use strata_core::trace::{CheckEvent, CheckObserver, NullObserver};
use strata_core::types::{DependencyPath, ImportPath, Layer};

use crate::aggregate::IllegalPaths;

/// Result slot for a contract: empty until `check_dependencies` runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked(Vec<DependencyPath>),
}

/// A named layering rule set applied to one or more packages.
///
/// `layers` is ordered lowest first: index 0 is the most fundamental layer,
/// and a later layer may depend on any earlier one, never the reverse.
/// Constructed once from configuration; the only mutation is
/// [`check_dependencies`](Contract::check_dependencies), which overwrites
/// any prior result.
#[derive(Debug, Clone)]
pub struct Contract {
    name: String,
    packages: Vec<String>,
    layers: Vec<Layer>,
    whitelisted_paths: HashSet<ImportPath>,
    recursive: bool,
    state: CheckState,
}

impl Contract {
    pub fn new(name: impl Into<String>, packages: Vec<String>, layers: Vec<Layer>) -> Self {
        Self {
            name: name.into(),
            packages,
            layers,
            whitelisted_paths: HashSet::new(),
            recursive: false,
            state: CheckState::Unchecked,
        }
    }

    pub fn with_whitelisted_paths(
        mut self,
        paths: impl IntoIterator<Item = ImportPath>,
    ) -> Self {
        self.whitelisted_paths = paths.into_iter().collect();
        self
    }

    /// Widen the downstream search to every module inside lower layers,
    /// rather than only their root modules.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn whitelisted_paths(&self) -> &HashSet<ImportPath> {
        &self.whitelisted_paths
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    /// Check every package against the layer stack and record the illegal
    /// dependency paths found.
    pub fn check_dependencies(&mut self, graph: &dyn DependencyGraph) {
        self.check_dependencies_with(graph, &mut NullObserver);
    }

    /// As [`check_dependencies`](Contract::check_dependencies), reporting
    /// progress to the given observer.
    pub fn check_dependencies_with(
        &mut self,
        graph: &dyn DependencyGraph,
        observer: &mut dyn CheckObserver,
    ) {
        observer.record(CheckEvent::ContractStarted {
            contract: self.name.clone(),
        });

        let mut found = IllegalPaths::new();
        for package in &self.packages {
            // Highest layer first, so findings surface at the layer they
            // violate rather than one they merely pass through.
            for index in (0..self.layers.len()).rev() {
                self.check_layer_does_not_import_downstream(
                    index, package, graph, observer, &mut found,
                );
            }
        }
        self.state = CheckState::Checked(found.into_paths());
    }

    fn check_layer_does_not_import_downstream(
        &self,
        index: usize,
        package: &str,
        graph: &dyn DependencyGraph,
        observer: &mut dyn CheckObserver,
        found: &mut IllegalPaths,
    ) {
        let layer = &self.layers[index];
        let modules_in_this_layer = self.modules_in_layer(layer, package, graph);
        let modules_in_downstream_layers =
            self.modules_in_downstream_layers(index, package, graph);

        observer.record(CheckEvent::LayerChecked {
            contract: self.name.clone(),
            package: package.to_string(),
            layer: layer.name().to_string(),
            module_count: modules_in_this_layer.len(),
            downstream_count: modules_in_downstream_layers.len(),
        });

        for upstream_module in &modules_in_this_layer {
            for downstream_module in &modules_in_downstream_layers {
                // Does the supposedly more fundamental module import,
                // directly or transitively, something in this layer?
                let Some(path) = graph.find_path(
                    downstream_module,
                    upstream_module,
                    &self.whitelisted_paths,
                ) else {
                    continue;
                };

                if let Some(via) = self.via_other_layer(&path, index, package) {
                    // The intermediate layer's own check reports this one.
                    observer.record(CheckEvent::PathSkippedViaLayer {
                        contract: self.name.clone(),
                        via,
                        path,
                    });
                    continue;
                }

                observer.record(CheckEvent::PathFound {
                    contract: self.name.clone(),
                    importer: downstream_module.clone(),
                    imported: upstream_module.clone(),
                    path: path.clone(),
                });
                found.record(path);
            }
        }
    }

    /// The layer's own root module plus every descendant, grandchildren
    /// included.
    fn modules_in_layer(
        &self,
        layer: &Layer,
        package: &str,
        graph: &dyn DependencyGraph,
    ) -> Vec<String> {
        let layer_module = layer.module_in(package);
        let descendants = graph.get_descendants(&layer_module);
        let mut modules = vec![layer_module];
        modules.extend(descendants);
        modules
    }

    /// Root modules of every layer below `index`, nearest first. With
    /// `recursive`, each lower layer contributes its descendants as well.
    fn modules_in_downstream_layers(
        &self,
        index: usize,
        package: &str,
        graph: &dyn DependencyGraph,
    ) -> Vec<String> {
        let mut modules = Vec::new();
        for downstream_layer in self.layers[..index].iter().rev() {
            let root = downstream_layer.module_in(package);
            if self.recursive {
                let descendants = graph.get_descendants(&root);
                modules.push(root);
                modules.extend(descendants);
            } else {
                modules.push(root);
            }
        }
        modules
    }

    /// The first interior module of `path` that is another declared layer's
    /// root, if any.
    fn via_other_layer(
        &self,
        path: &DependencyPath,
        current: usize,
        package: &str,
    ) -> Option<String> {
        let other_layer_modules: Vec<String> = self
            .layers
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != current)
            .map(|(_, layer)| layer.module_in(package))
            .collect();
        path.interior()
            .iter()
            .find(|module| other_layer_modules.contains(module))
            .cloned()
    }

    /// True iff checking recorded no illegal dependency.
    ///
    /// # Panics
    ///
    /// Panics if called before `check_dependencies` — querying an unchecked
    /// contract is a programming error, not a runtime condition.
    pub fn is_kept(&self) -> bool {
        self.illegal_dependencies().is_empty()
    }

    /// The illegal dependency paths recorded by the last check.
    ///
    /// # Panics
    ///
    /// Panics if called before `check_dependencies`.
    pub fn illegal_dependencies(&self) -> &[DependencyPath] {
        match &self.state {
            CheckState::Checked(paths) => paths,
            CheckState::Unchecked => panic!(
                "contract '{}': cannot query results until check_dependencies is called",
                self.name,
            ),
        }
    }

    /// Non-panicking view of the check result.
    pub fn outcome(&self) -> Option<&[DependencyPath]> {
        match &self.state {
            CheckState::Checked(paths) => Some(paths),
            CheckState::Unchecked => None,
        }
    }
}

impl From<ContractDefinition> for Contract {
    fn from(definition: ContractDefinition) -> Self {
        Self {
            name: definition.name,
            packages: definition.packages,
            layers: definition.layers,
            whitelisted_paths: definition.whitelisted_paths,
            recursive: definition.recursive,
            state: CheckState::Unchecked,
        }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
#[path = "contract_tests.rs"]
mod tests;
