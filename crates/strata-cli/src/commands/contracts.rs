use std::path::Path;

use strata_output::OutputFormatter;

/// Run `strata contracts` — list what the config file declares.
pub fn run(formatter: &dyn OutputFormatter, config_path: &Path) -> i32 {
    let contracts = match strata_enforce::load_contracts(config_path) {
        Ok(contracts) => contracts,
        Err(e) => {
            eprintln!("strata contracts: {}", e);
            return 2;
        }
    };

    let summary = strata_enforce::summarize(&contracts);
    println!("{}", formatter.format_contracts(&summary).trim_end());
    0
}
