//! Event records assembled from labeled blocks.

use crate::label::FieldLabel;

/// Marker that a `DumpData` value was cut short and continues on later lines.
pub const TRUNCATION_MARKER: &str = "...";

/// One event record, rendered as one output row.
///
/// A field explicitly set to an empty value still counts as set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRecord {
    fields: [Option<String>; FieldLabel::COUNT],
}

impl EventRecord {
    /// Creates a record with only `Id` set.
    pub fn with_id(id: impl Into<String>) -> Self {
        let mut record = Self::default();
        record.set(FieldLabel::Id, id);
        record
    }

    /// Returns the value of `label`, or `None` if it was never set.
    pub fn get(&self, label: FieldLabel) -> Option<&str> {
        self.fields[label.index()].as_deref()
    }

    /// Returns true if `label` has been set.
    pub fn has(&self, label: FieldLabel) -> bool {
        self.fields[label.index()].is_some()
    }

    /// Returns true if no field has been set.
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(Option::is_none)
    }

    /// Sets `label`, returning the value it replaced.
    pub fn set(&mut self, label: FieldLabel, value: impl Into<String>) -> Option<String> {
        self.fields[label.index()].replace(value.into())
    }

    /// Appends `text` to `label`, separated by a single space.
    ///
    /// No separator is inserted when the current value is empty. Does nothing
    /// if `label` is unset.
    pub fn append(&mut self, label: FieldLabel, text: &str) {
        if let Some(value) = self.fields[label.index()].as_mut() {
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(text);
        }
    }

    /// Returns true if `label` is set and ends with [`TRUNCATION_MARKER`].
    pub fn is_truncated(&self, label: FieldLabel) -> bool {
        self.get(label)
            .is_some_and(|value| value.ends_with(TRUNCATION_MARKER))
    }

    /// Column values in output order, unset fields as empty strings.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.as_deref().unwrap_or(""))
    }
}
