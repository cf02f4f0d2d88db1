use std::path::Path;

use strata_core::trace::{NullObserver, RecordingObserver};
use strata_graph::ImportGraph;
use strata_output::OutputFormatter;

/// Run `strata check` — check every declared contract against the snapshot.
///
/// Exit codes: 0 all contracts kept, 1 at least one broken, 2 the config or
/// snapshot could not be used.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    config_path: &Path,
    graph_path: &Path,
) -> i32 {
    let mut contracts = match strata_enforce::load_contracts(config_path) {
        Ok(contracts) => contracts,
        Err(e) => {
            eprintln!("strata check: {}", e);
            return 2;
        }
    };

    let graph = match ImportGraph::from_snapshot_file(graph_path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("strata check: {}", e);
            return 2;
        }
    };

    let report = if verbose {
        let mut observer = RecordingObserver::new();
        let report = strata_enforce::check_all(&mut contracts, &graph, &mut observer);
        for event in observer.events() {
            eprintln!("strata: {}", event);
        }
        report
    } else {
        strata_enforce::check_all(&mut contracts, &graph, &mut NullObserver)
    };

    println!("{}", formatter.format_check(&report).trim_end());

    if report.all_kept() {
        0
    } else {
        1
    }
}
