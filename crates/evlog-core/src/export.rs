//! File-level export: read an event log text export, write its CSV.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use crate::assemble::{AssemblyStats, assemble_text_with};
use crate::classify::LabelSyntax;
use crate::decode::{DecodedText, decode_bytes};
use crate::error::{ExportError, Result};
use crate::record::EventRecord;
use crate::writer::{CsvOptions, write_records};

/// Suffix appended to the input file stem when no output path is given.
pub const DEFAULT_SUFFIX: &str = "_parsed";

/// Extension of derived output files.
pub const OUTPUT_EXTENSION: &str = "csv";

/// Options for an export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Explicit output path. Derived from the input path when `None`.
    pub output: Option<PathBuf>,
    /// Suffix used when deriving the output path.
    pub suffix: String,
    /// CSV writer options.
    pub csv: CsvOptions,
    /// Label syntax; strict unless column-aligned input is expected.
    pub label_syntax: LabelSyntax,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output: None,
            suffix: DEFAULT_SUFFIX.to_string(),
            csv: CsvOptions::default(),
            label_syntax: LabelSyntax::default(),
        }
    }
}

impl ExportOptions {
    /// Set an explicit output path.
    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Set the derived-name suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set CSV writer options.
    #[must_use]
    pub fn with_csv(mut self, csv: CsvOptions) -> Self {
        self.csv = csv;
        self
    }

    /// Set the label syntax.
    #[must_use]
    pub fn with_label_syntax(mut self, label_syntax: LabelSyntax) -> Self {
        self.label_syntax = label_syntax;
        self
    }

    /// Output path for `input` under these options.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => derive_output_path(input, &self.suffix),
        }
    }
}

/// Outcome of a successful export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Name of the encoding the input was decoded with.
    pub encoding: &'static str,
    /// Malformed byte sequences skipped while decoding.
    pub malformed_bytes: usize,
    pub stats: AssemblyStats,
    pub records: Vec<EventRecord>,
}

/// Derives `<dir>/<stem><suffix>.csv` from the input path.
///
/// Only the last extension is stripped, so `app.log.txt` becomes
/// `app.log<suffix>.csv`.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{suffix}.{OUTPUT_EXTENSION}"))
}

/// Reads and decodes the input file.
///
/// Fails with [`ExportError::InputNotFound`] before any parsing if `path` is
/// not an existing regular file.
pub fn read_input(path: &Path) -> Result<DecodedText> {
    if !path.is_file() {
        return Err(ExportError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| ExportError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_bytes(&bytes))
}

/// Writes records as CSV to `path`, creating or truncating it.
pub fn write_output(path: &Path, records: &[EventRecord], options: CsvOptions) -> Result<()> {
    let file = File::create(path).map_err(|source| ExportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_records(file, records, options).map_err(|source| {
        if source.is_io_error() {
            ExportError::OutputWrite {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            ExportError::Csv {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Converts one export file to CSV.
///
/// The output is written only after the whole input has been parsed.
pub fn export_file(input: &Path, options: &ExportOptions) -> Result<ExportSummary> {
    let span = info_span!("export", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let decoded = read_input(input)?;
    if decoded.malformed > 0 {
        warn!(
            malformed = decoded.malformed,
            encoding = decoded.encoding_name(),
            "skipped undecodable bytes"
        );
    }
    debug!(
        encoding = decoded.encoding_name(),
        bytes = decoded.text.len(),
        "input decoded"
    );

    let assembled = assemble_text_with(&decoded.text, options.label_syntax);
    let stats = assembled.stats;
    if stats.continuations_dropped > 0 || stats.orphan_labels > 0 {
        debug!(
            continuations_dropped = stats.continuations_dropped,
            orphan_labels = stats.orphan_labels,
            "dropped lines without a destination"
        );
    }

    let output = options.output_path(input);
    write_output(&output, &assembled.records, options.csv)?;
    info!(
        output = %output.display(),
        records = stats.records,
        lines = stats.lines,
        duration_ms = start.elapsed().as_millis(),
        "export complete"
    );

    Ok(ExportSummary {
        input: input.to_path_buf(),
        output,
        encoding: decoded.encoding_name(),
        malformed_bytes: decoded.malformed,
        stats,
        records: assembled.records,
    })
}
