//! Contract checking for strata.
//!
//! A [`Contract`] declares an ordered layer stack over one or more packages;
//! [`Contract::check_dependencies`] walks the import graph and records every
//! minimal import chain that lets a lower layer reach back up into a higher
//! one. Findings that route through another declared layer are attributed to
//! that layer's own check instead, and the recorded set is kept free of
//! subset-redundant chains.

mod aggregate;
pub mod contract;
pub mod report;

pub use contract::{CheckState, Contract};
pub use report::{
    check_all, summarize, CheckReport, ContractInfo, ContractReport, ContractsSummary,
};

use std::path::Path;

use strata_core::config::{self, ConfigError};

/// Load every contract declared in a `strata.json` config file, sorted by
/// name.
pub fn load_contracts(path: &Path) -> Result<Vec<Contract>, ConfigError> {
    Ok(config::load_definitions(path)?
        .into_iter()
        .map(Contract::from)
        .collect())
}
