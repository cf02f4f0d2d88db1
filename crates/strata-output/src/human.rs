use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::OutputFormatter;
use strata_enforce::{CheckReport, ContractsSummary};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, report: &CheckReport) -> String {
        let mut out = String::new();

        for contract in &report.contracts {
            if contract.kept {
                out.push_str(&format!(
                    "{} {}: {}\n",
                    "\u{2713}".if_supports_color(Stdout, |s| s.green()),
                    contract.name,
                    "kept".if_supports_color(Stdout, |s| s.green()),
                ));
            } else {
                out.push_str(&format!(
                    "{} {}: {}\n",
                    "\u{2717}".if_supports_color(Stdout, |s| s.red()),
                    contract.name,
                    format!(
                        "{} illegal path(s)",
                        contract.illegal_dependencies.len()
                    )
                    .if_supports_color(Stdout, |s| s.red()),
                ));
                for path in &contract.illegal_dependencies {
                    out.push_str(&format!(
                        "    {}\n",
                        path.to_string().if_supports_color(Stdout, |s| s.dimmed()),
                    ));
                }
            }
        }

        // Summary line
        out.push_str(&format!(
            "\n{} contract(s) checked, {} broken, {} violation(s)\n",
            report.contracts_checked, report.contracts_broken, report.violation_count,
        ));

        out
    }

    fn format_contracts(&self, summary: &ContractsSummary) -> String {
        let mut out = String::new();

        for contract in &summary.contracts {
            out.push_str(&format!("{}\n", contract.name));
            out.push_str(&format!("  packages: {}\n", contract.packages.join(", ")));
            out.push_str(&format!(
                "  layers (lowest first): {}\n",
                contract.layers.join(", "),
            ));
            if contract.whitelisted_count > 0 {
                out.push_str(&format!(
                    "  whitelisted paths: {}\n",
                    contract.whitelisted_count,
                ));
            }
            if contract.recursive {
                out.push_str("  recursive: true\n");
            }
        }

        out.push_str(&format!("\n{} contract(s)\n", summary.contracts.len()));
        out
    }
}
