//! The closed set of field labels recognized in an event export.

use std::fmt;

/// A field of an event record.
///
/// Declaration order is the output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldLabel {
    Id,
    TimeCreated,
    ProviderName,
    Message,
    DumpData,
}

impl FieldLabel {
    /// All labels in column order, which is also the match priority order.
    pub const ALL: [FieldLabel; 5] = [
        FieldLabel::Id,
        FieldLabel::TimeCreated,
        FieldLabel::ProviderName,
        FieldLabel::Message,
        FieldLabel::DumpData,
    ];

    /// Number of labels (and output columns).
    pub const COUNT: usize = Self::ALL.len();

    /// The label exactly as it is spelled in the export and the CSV header.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldLabel::Id => "Id",
            FieldLabel::TimeCreated => "TimeCreated",
            FieldLabel::ProviderName => "ProviderName",
            FieldLabel::Message => "Message",
            FieldLabel::DumpData => "DumpData",
        }
    }

    /// Column index of this label.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
