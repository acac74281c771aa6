//! Line classification for the list-style event export.
//!
//! Every input line is one of three kinds: a labeled field line, a blank
//! line, or a continuation of an earlier field. Classification borrows from
//! the input line and never allocates.

use crate::label::FieldLabel;

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `Label: value`, with `value` trimmed.
    Label(FieldLabel, &'a str),
    /// Nothing but whitespace.
    Blank,
    /// Any other text, trimmed.
    Continuation(&'a str),
}

/// How a label name may be separated from its colon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelSyntax {
    /// `Label:` with the colon immediately after the name.
    #[default]
    Strict,
    /// Also accepts spaces or tabs before the colon, as in column-aligned
    /// list exports (`Id           : 101`).
    Aligned,
}

/// Classifies one input line with [`LabelSyntax::Strict`].
///
/// Labels are matched literally and case-sensitively in [`FieldLabel::ALL`]
/// order; `Id : 1` and `Identifier: 7` are both continuation lines.
pub fn classify_line(line: &str) -> LineKind<'_> {
    classify_line_with(line, LabelSyntax::Strict)
}

/// Classifies one input line under the given label syntax.
pub fn classify_line_with(line: &str, syntax: LabelSyntax) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    for label in FieldLabel::ALL {
        if let Some(value) = label_value(trimmed, label, syntax) {
            return LineKind::Label(label, value);
        }
    }
    LineKind::Continuation(trimmed)
}

fn label_value(line: &str, label: FieldLabel, syntax: LabelSyntax) -> Option<&str> {
    let rest = line.strip_prefix(label.as_str())?;
    let rest = match syntax {
        LabelSyntax::Strict => rest,
        LabelSyntax::Aligned => rest.trim_start_matches([' ', '\t']),
    };
    rest.strip_prefix(':').map(str::trim)
}
