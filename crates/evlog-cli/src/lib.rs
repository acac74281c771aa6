//! CLI library components for the event log exporter.

pub mod convert;
pub mod logging;
