use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "strata",
    version,
    about = "Layered-architecture contract checking for module import graphs"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print structured check events to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check every declared contract against the import graph
    Check {
        /// Contract configuration file
        #[arg(long, default_value = "strata.json")]
        config: PathBuf,

        /// Import graph snapshot file
        #[arg(long, default_value = "graph.json")]
        graph: PathBuf,
    },

    /// List declared contracts without checking them
    Contracts {
        /// Contract configuration file
        #[arg(long, default_value = "strata.json")]
        config: PathBuf,
    },
}
