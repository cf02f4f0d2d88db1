//! strata CLI — layered-architecture contract checking.
//!
//! This binary provides the `strata` command: `check` runs every declared
//! contract against an import graph snapshot, `contracts` lists what a
//! config file declares. See `strata --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn strata_output::OutputFormatter> = if cli.json {
        Box::new(strata_output::json::JsonFormatter)
    } else {
        Box::new(strata_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check { config, graph } => {
            commands::check::run(&*formatter, cli.verbose, &config, &graph)
        }
        Commands::Contracts { config } => commands::contracts::run(&*formatter, &config),
    };

    std::process::exit(exit_code);
}
