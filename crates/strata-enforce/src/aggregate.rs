use std::collections::HashSet;

use strata_core::types::DependencyPath;

/// The illegal paths recorded for one contract, kept minimal under subset
/// domination: no entry's module set strictly contains another entry's.
///
/// Greedy — a recorded path survives until a more succinct one arrives — so
/// the final set depends on arrival order but is deterministic given it.
#[derive(Debug, Default)]
pub(crate) struct IllegalPaths {
    paths: Vec<DependencyPath>,
}

impl IllegalPaths {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a newly found path, evicting recorded supersets of its module
    /// set and dropping the path itself when a recorded subset already
    /// implies it.
    pub(crate) fn record(&mut self, path: DependencyPath) {
        let new_set: HashSet<&String> = path.modules().iter().collect();

        let mut keep = vec![true; self.paths.len()];
        let mut add = true;
        for (position, existing) in self.paths.iter().enumerate() {
            let existing_set: HashSet<&String> = existing.modules().iter().collect();
            if new_set.is_subset(&existing_set) {
                // The new path is more succinct; the existing one is implied by it.
                keep[position] = false;
                add = true;
            } else if existing_set.is_subset(&new_set) {
                // Implied, more succinctly, by a path already recorded.
                add = false;
            }
        }

        let mut position = 0;
        self.paths.retain(|_| {
            let kept = keep[position];
            position += 1;
            kept
        });
        if add {
            self.paths.push(path);
        }
    }

    pub(crate) fn into_paths(self) -> Vec<DependencyPath> {
        self.paths
    }
}
