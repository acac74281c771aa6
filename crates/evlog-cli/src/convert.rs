//! The convert command: one input export to one CSV file.

use std::path::Path;

use anyhow::{Result, anyhow};

use evlog_core::{ExportError, ExportOptions, ExportSummary, export_file};

/// Converts `input` to CSV.
///
/// A missing input is reported as is; other failures carry the input path.
pub fn run_convert(input: &Path, options: &ExportOptions) -> Result<ExportSummary> {
    match export_file(input, options) {
        Ok(summary) => Ok(summary),
        Err(error @ ExportError::InputNotFound { .. }) => Err(anyhow!(error)),
        Err(error) => {
            Err(anyhow::Error::new(error).context(format!("failed to convert {}", input.display())))
        }
    }
}
