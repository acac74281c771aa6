//! Parsing of list-style event log text exports into CSV.
//!
//! The export is a sequence of blocks of `Label: value` lines, where a block
//! starts at an `Id:` line and free-text fields may wrap onto unlabeled
//! continuation lines. Parsing is a single ordered pass:
//!
//! 1. [`decode`] turns bytes into text, skipping undecodable input.
//! 2. [`classify`] labels each line as a field, blank, or continuation.
//! 3. [`assemble`] folds classified lines into [`EventRecord`]s.
//! 4. [`writer`] serializes the records as CSV with a fixed header.
//!
//! [`export`] runs the whole pass from an input path to an output path.

pub mod assemble;
pub mod classify;
pub mod decode;
pub mod error;
pub mod export;
pub mod label;
pub mod record;
pub mod writer;

pub use assemble::{
    Assembled, AssemblyStats, RecordAssembler, assemble_lines, assemble_text, assemble_text_with,
};
pub use classify::{LabelSyntax, LineKind, classify_line, classify_line_with};
pub use decode::{DecodedText, decode_bytes};
pub use error::{ExportError, Result};
pub use export::{
    DEFAULT_SUFFIX, ExportOptions, ExportSummary, derive_output_path, export_file, read_input,
    write_output,
};
pub use label::FieldLabel;
pub use record::{EventRecord, TRUNCATION_MARKER};
pub use writer::{CsvOptions, LineTerminator, header, records_to_csv_string, write_records};
