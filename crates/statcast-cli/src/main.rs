//! MLB pitching warehouse ETL.

use std::io::{self, IsTerminal};

use clap::Parser;

mod cli;
mod commands;
mod logging;
mod summary;

use crate::cli::{Cli, ColorArg, Command, LogFormatArg};
use crate::commands::{run_boxscores, run_init_tables, run_stage, run_statcast};
use crate::logging::{LogConfig, LogFormat, init_logging};
use crate::summary::print_staging_summary;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    dotenv::dotenv().ok();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit_code = match &cli.command {
        Command::InitTables => report(run_init_tables().await),
        Command::Boxscores(args) => report(run_boxscores(args).await),
        Command::Statcast(args) => report(run_statcast(args).await),
        Command::Stage(args) => match run_stage(args).await {
            Ok(outcome) => {
                print_staging_summary(&outcome.report, outcome.loaded);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color {
        ColorArg::Always => true,
        ColorArg::Never => false,
        ColorArg::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
