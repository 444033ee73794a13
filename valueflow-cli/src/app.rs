use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::scenarios::Scenario;

/// valueflow - record value lifecycles of demo programs and render them as Graphviz DOT
#[derive(Debug, Parser)]
#[command(name = "valueflow", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the built-in demo scenarios.
    List,

    /// Run a scenario and write the recorded graph as DOT.
    Dot {
        /// Scenario to record.
        #[arg(value_enum, value_name = "SCENARIO")]
        scenario: Scenario,

        /// Write to this file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Run a scenario and summarize the recorded graph.
    Stats {
        /// Scenario to record.
        #[arg(value_enum, value_name = "SCENARIO")]
        scenario: Scenario,
    },
}
