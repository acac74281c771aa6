//! Integration tests for the convert command.

use std::fs;

use tempfile::TempDir;

use evlog_cli::convert::run_convert;
use evlog_core::{CsvOptions, ExportOptions, LineTerminator};

const EXPORT: &str = "Id: 7\nProviderName: Service Control Manager\nMessage: The service entered\nthe running state.\n";

#[test]
fn converts_to_derived_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("system.txt");
    fs::write(&input, EXPORT).unwrap();

    let summary = run_convert(&input, &ExportOptions::default()).unwrap();

    assert_eq!(summary.output, dir.path().join("system_parsed.csv"));
    let csv = fs::read_to_string(&summary.output).unwrap();
    assert_eq!(
        csv,
        "Id,TimeCreated,ProviderName,Message,DumpData\n\
         7,,Service Control Manager,The service entered the running state.,\n"
    );
}

#[test]
fn writer_options_are_applied() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("system.txt");
    fs::write(&input, EXPORT).unwrap();
    let options = ExportOptions::default()
        .with_output(Some(dir.path().join("out.tsv")))
        .with_csv(CsvOptions {
            delimiter: b'\t',
            terminator: LineTerminator::Crlf,
        });

    let summary = run_convert(&input, &options).unwrap();

    let csv = fs::read_to_string(&summary.output).unwrap();
    assert!(csv.starts_with("Id\tTimeCreated\tProviderName\tMessage\tDumpData\r\n"));
}

#[test]
fn missing_input_message_names_the_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("nope.txt");

    let error = run_convert(&input, &ExportOptions::default()).unwrap_err();

    assert_eq!(
        format!("{error:#}"),
        format!("input file not found: {}", input.display())
    );
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn write_failure_carries_context() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("system.txt");
    fs::write(&input, EXPORT).unwrap();
    let options =
        ExportOptions::default().with_output(Some(dir.path().join("no-such-dir").join("x.csv")));

    let error = run_convert(&input, &options).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.starts_with(&format!("failed to convert {}", input.display())));
    assert!(message.contains("failed to write output"));
}
