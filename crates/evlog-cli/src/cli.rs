//! CLI argument definitions for the event log exporter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use evlog_cli::logging::LogFormat;
use evlog_core::{CsvOptions, DEFAULT_SUFFIX, ExportOptions, LabelSyntax, LineTerminator};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "evlog-export",
    version,
    about = "Convert an event log text export to CSV",
    long_about = "Convert a list-style event log text export to CSV.\n\n\
                  Each block starting at an `Id:` line becomes one row with the columns\n\
                  Id, TimeCreated, ProviderName, Message and DumpData. Unlabeled lines\n\
                  continue the open Message or DumpData field."
)]
pub struct Cli {
    /// Path to the input text export.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Output CSV path (default: <FILE dir>/<FILE stem><SUFFIX>.csv).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suffix appended to the input file stem when deriving the output path.
    #[arg(long = "suffix", value_name = "TEXT", default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Field delimiter (a single ASCII character).
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Terminate rows with CRLF instead of LF.
    #[arg(long = "crlf")]
    pub crlf: bool,

    /// Also accept labels padded before the colon (`Id     : 101`).
    #[arg(long = "aligned-labels")]
    pub aligned_labels: bool,

    /// Print a table of record and field counts after converting.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,
}

impl Cli {
    /// Export options described by the command line.
    pub fn export_options(&self) -> ExportOptions {
        let terminator = if self.crlf {
            LineTerminator::Crlf
        } else {
            LineTerminator::Lf
        };
        let label_syntax = if self.aligned_labels {
            LabelSyntax::Aligned
        } else {
            LabelSyntax::Strict
        };
        ExportOptions::default()
            .with_label_syntax(label_syntax)
            .with_output(self.output.clone())
            .with_suffix(self.suffix.as_str())
            .with_csv(CsvOptions {
                delimiter: self.delimiter,
                terminator,
            })
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() && ch != '"' && ch != '\n' && ch != '\r' => Ok(ch as u8),
        _ => Err(format!(
            "delimiter must be a single ASCII character other than a quote or line break, got {value:?}"
        )),
    }
}
