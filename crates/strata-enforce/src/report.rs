//! Check-run result types consumed by the output formatters.

use serde::{Deserialize, Serialize};

use strata_core::graph::DependencyGraph;
use strata_core::trace::CheckObserver;
use strata_core::types::DependencyPath;

use crate::contract::Contract;

/// Outcome of checking one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractReport {
    pub name: String,
    pub kept: bool,
    pub illegal_dependencies: Vec<DependencyPath>,
}

/// Outcome of checking every contract in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub contracts: Vec<ContractReport>,
    pub contracts_checked: usize,
    pub contracts_broken: usize,
    pub violation_count: usize,
}

impl CheckReport {
    pub fn all_kept(&self) -> bool {
        self.contracts_broken == 0
    }
}

/// Check every contract against the graph and fold the results into one
/// report.
pub fn check_all(
    contracts: &mut [Contract],
    graph: &dyn DependencyGraph,
    observer: &mut dyn CheckObserver,
) -> CheckReport {
    let mut reports = Vec::with_capacity(contracts.len());
    for contract in contracts.iter_mut() {
        contract.check_dependencies_with(graph, observer);
        reports.push(ContractReport {
            name: contract.name().to_string(),
            kept: contract.is_kept(),
            illegal_dependencies: contract.illegal_dependencies().to_vec(),
        });
    }

    let contracts_broken = reports.iter().filter(|report| !report.kept).count();
    let violation_count = reports
        .iter()
        .map(|report| report.illegal_dependencies.len())
        .sum();
    CheckReport {
        contracts_checked: reports.len(),
        contracts_broken,
        violation_count,
        contracts: reports,
    }
}

/// Static description of one declared contract, for listing without
/// checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub name: String,
    pub packages: Vec<String>,
    pub layers: Vec<String>,
    pub whitelisted_count: usize,
    pub recursive: bool,
}

/// Every contract a config file declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractsSummary {
    pub contracts: Vec<ContractInfo>,
}

pub fn summarize(contracts: &[Contract]) -> ContractsSummary {
    ContractsSummary {
        contracts: contracts
            .iter()
            .map(|contract| ContractInfo {
                name: contract.name().to_string(),
                packages: contract.packages().to_vec(),
                layers: contract
                    .layers()
                    .iter()
                    .map(|layer| layer.name().to_string())
                    .collect(),
                whitelisted_count: contract.whitelisted_paths().len(),
                recursive: contract.recursive(),
            })
            .collect(),
    }
}
