//! Event log text export to CSV converter.

use clap::{ColorChoice, Parser};
use evlog_cli::convert::run_convert;
use evlog_cli::logging::{LogConfig, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::Cli;
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = cli.export_options();
    let exit_code = match run_convert(&cli.file, &options) {
        Ok(summary) => {
            print_summary(&summary, cli.summary);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Logging setup for this run.
///
/// `--log-level` wins over `-v`/`-q`; `RUST_LOG` is honored only when neither
/// was given. Colors follow `--color`, and `auto` disables them for log files
/// and redirected stderr.
fn log_config(cli: &Cli) -> LogConfig {
    let level = cli
        .log_level
        .map(LevelFilter::from)
        .unwrap_or_else(|| cli.verbosity.tracing_level_filter());
    let chosen_on_command_line = cli.log_level.is_some() || cli.verbosity.is_present();
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level_filter(level)
        .with_env_override(!chosen_on_command_line)
        .with_format(cli.log_format.into())
        .with_timestamps(cli.log_timestamps)
        .with_ansi(ansi)
        .with_log_file(cli.log_file.clone())
}
