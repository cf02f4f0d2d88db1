use crate::OutputFormatter;
use strata_enforce::{CheckReport, ContractsSummary};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, report: &CheckReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }

    fn format_contracts(&self, summary: &ContractsSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_check_round_trips() {
        let report = CheckReport {
            contracts: vec![],
            contracts_checked: 0,
            contracts_broken: 0,
            violation_count: 0,
        };
        let out = JsonFormatter.format_check(&report);
        let parsed: CheckReport = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, report);
    }
}
