//! Structured check observability.
//!
//! The checker reports progress as typed [`CheckEvent`]s through an injected
//! [`CheckObserver`] — no global logger, no free-form debug strings. The
//! default [`NullObserver`] discards everything; [`RecordingObserver`] keeps
//! events in memory for tests and `--verbose` output.

use std::fmt;

use serde::Serialize;

use crate::types::DependencyPath;

/// A structured event emitted while a contract is being checked.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CheckEvent {
    ContractStarted {
        contract: String,
    },
    LayerChecked {
        contract: String,
        package: String,
        layer: String,
        module_count: usize,
        downstream_count: usize,
    },
    PathFound {
        contract: String,
        importer: String,
        imported: String,
        path: DependencyPath,
    },
    PathSkippedViaLayer {
        contract: String,
        via: String,
        path: DependencyPath,
    },
}

impl fmt::Display for CheckEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckEvent::ContractStarted { contract } => {
                write!(f, "checking contract '{}'", contract)
            }
            CheckEvent::LayerChecked {
                contract,
                package,
                layer,
                module_count,
                downstream_count,
            } => write!(
                f,
                "[{}] layer '{}' in package '{}': {} module(s), {} downstream",
                contract, layer, package, module_count, downstream_count,
            ),
            CheckEvent::PathFound {
                contract,
                importer,
                imported,
                path,
            } => write!(
                f,
                "[{}] {} imports {}: {}",
                contract, importer, imported, path,
            ),
            CheckEvent::PathSkippedViaLayer {
                contract,
                via,
                path,
            } => write!(f, "[{}] skipped (via layer module {}): {}", contract, via, path),
        }
    }
}

/// Sink for check events. Implementations must not fail.
pub trait CheckObserver {
    fn record(&mut self, event: CheckEvent);
}

/// Observer that discards every event.
#[derive(Debug, Default)]
pub struct NullObserver;

impl CheckObserver for NullObserver {
    fn record(&mut self, _event: CheckEvent) {}
}

/// Observer that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Vec<CheckEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CheckEvent] {
        &self.events
    }
}

impl CheckObserver for RecordingObserver {
    fn record(&mut self, event: CheckEvent) {
        self.events.push(event);
    }
}
