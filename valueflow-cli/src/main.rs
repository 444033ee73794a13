mod app;
mod commands;
mod output;
mod scenarios;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Show valueflow info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("valueflow", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::List => commands::list::run(&cli.global),
        Command::Dot { scenario, output } => commands::dot::run(*scenario, output.as_deref()),
        Command::Stats { scenario } => commands::stats::run(*scenario, &cli.global),
    }
}
