//! Record assembly: a single-owner state machine over classified lines.
//!
//! A record opens at an `Id` line and closes when the next `Id` line arrives
//! or input ends. Free-text continuation lines are routed to `Message` or
//! `DumpData` by which of the two is open:
//!
//! | `DumpData` | `Message` | continuation goes to                       |
//! |------------|-----------|--------------------------------------------|
//! | set        | unset     | `DumpData`                                 |
//! | unset      | set       | `Message`                                  |
//! | set        | set       | `DumpData` if it ends in `...`, else dropped |
//! | unset      | unset     | dropped                                    |

use tracing::trace;

use crate::classify::{LabelSyntax, LineKind, classify_line_with};
use crate::label::FieldLabel;
use crate::record::EventRecord;

/// Counters describing what the assembler did with its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    /// Lines fed to the assembler.
    pub lines: usize,
    /// Label lines applied to a record.
    pub label_lines: usize,
    /// Blank lines.
    pub blank_lines: usize,
    /// Continuation lines appended to a field.
    pub continuations_appended: usize,
    /// Continuation lines with no unambiguous destination.
    pub continuations_dropped: usize,
    /// Label lines seen before any `Id` line.
    pub orphan_labels: usize,
    /// Label lines that replaced an earlier value in the same record.
    pub overwritten_labels: usize,
    /// Records closed.
    pub records: usize,
}

/// Records produced by an assembly pass, with its counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembled {
    pub records: Vec<EventRecord>,
    pub stats: AssemblyStats,
}

/// Accumulates classified lines into closed records.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    syntax: LabelSyntax,
    current: Option<EventRecord>,
    output: Vec<EventRecord>,
    stats: AssemblyStats,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assembler that classifies lines under `syntax`.
    pub fn with_syntax(syntax: LabelSyntax) -> Self {
        Self {
            syntax,
            ..Self::default()
        }
    }

    /// Classifies and applies one raw input line.
    pub fn push_line(&mut self, line: &str) {
        self.push(classify_line_with(line, self.syntax));
    }

    /// Applies one classified line.
    pub fn push(&mut self, kind: LineKind<'_>) {
        self.stats.lines += 1;
        match kind {
            LineKind::Label(FieldLabel::Id, value) => {
                self.close_current();
                self.current = Some(EventRecord::with_id(value));
                self.stats.label_lines += 1;
            }
            LineKind::Label(label, value) => self.apply_label(label, value),
            LineKind::Blank => self.stats.blank_lines += 1,
            LineKind::Continuation(text) => self.apply_continuation(text),
        }
    }

    /// Closes the open record and returns everything assembled.
    pub fn finish(mut self) -> Assembled {
        self.close_current();
        Assembled {
            records: self.output,
            stats: self.stats,
        }
    }

    fn close_current(&mut self) {
        if let Some(record) = self.current.take().filter(|record| !record.is_empty()) {
            self.stats.records += 1;
            self.output.push(record);
        }
    }

    fn apply_label(&mut self, label: FieldLabel, value: &str) {
        let Some(record) = self
            .current
            .as_mut()
            .filter(|record| record.has(FieldLabel::Id))
        else {
            trace!(%label, "label line before any Id dropped");
            self.stats.orphan_labels += 1;
            return;
        };
        if record.set(label, value).is_some() {
            self.stats.overwritten_labels += 1;
        }
        self.stats.label_lines += 1;
    }

    fn apply_continuation(&mut self, text: &str) {
        let target = self.current.as_ref().and_then(continuation_target);
        match (self.current.as_mut(), target) {
            (Some(record), Some(label)) => {
                record.append(label, text);
                self.stats.continuations_appended += 1;
            }
            _ => {
                trace!("continuation line without destination dropped");
                self.stats.continuations_dropped += 1;
            }
        }
    }
}

/// Picks the free-text field a continuation line extends, if any.
fn continuation_target(record: &EventRecord) -> Option<FieldLabel> {
    match (record.has(FieldLabel::DumpData), record.has(FieldLabel::Message)) {
        (true, false) => Some(FieldLabel::DumpData),
        (false, true) => Some(FieldLabel::Message),
        (true, true) if record.is_truncated(FieldLabel::DumpData) => Some(FieldLabel::DumpData),
        _ => None,
    }
}

/// Assembles records from an iterator of raw lines.
pub fn assemble_lines<'a, I>(lines: I, syntax: LabelSyntax) -> Assembled
where
    I: IntoIterator<Item = &'a str>,
{
    let mut assembler = RecordAssembler::with_syntax(syntax);
    for line in lines {
        assembler.push_line(line);
    }
    assembler.finish()
}

/// Assembles records from a whole text buffer with strict label syntax.
pub fn assemble_text(text: &str) -> Assembled {
    assemble_text_with(text, LabelSyntax::Strict)
}

/// Assembles records from a whole text buffer under `syntax`.
pub fn assemble_text_with(text: &str, syntax: LabelSyntax) -> Assembled {
    assemble_lines(text.lines(), syntax)
}
