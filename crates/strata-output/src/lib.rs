//! Output formatters for strata command results.
//!
//! Provides two output modes:
//! - **Human** (default): Per-contract pass/fail lines with violation chains
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub mod json;

use strata_enforce::{CheckReport, ContractsSummary};

pub trait OutputFormatter {
    fn format_check(&self, report: &CheckReport) -> String;
    fn format_contracts(&self, summary: &ContractsSummary) -> String;
}
