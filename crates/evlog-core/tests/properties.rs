//! Property tests for record assembly and CSV output.

use proptest::collection::vec;
use proptest::prelude::*;

use evlog_core::{
    CsvOptions, FieldLabel, LineKind, assemble_text, classify_line, header, records_to_csv_string,
};

fn non_id_label() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["TimeCreated", "ProviderName", "Message", "DumpData"])
}

/// Any line other than an `Id` line: labeled field, free text, or blank.
///
/// Values never contain `:` and free text starts lowercase, so no CSV row
/// rendered from them can begin with a label spelling. Reparsing output is
/// only record-free under that condition: `Id: Id: 5` renders the row
/// `Id: 5,,,,`, which opens a record again.
fn body_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (non_id_label(), "[A-Za-z0-9 .]{0,16}")
            .prop_map(|(label, value)| format!("{label}: {value}")),
        "[a-z][a-z0-9 .]{0,24}",
        Just(String::new()),
        Just("   ".to_string()),
    ]
}

/// An `Id` line with an alphanumeric value, followed by body lines.
fn block() -> impl Strategy<Value = Vec<String>> {
    ("[A-Za-z0-9]{0,6}", vec(body_line(), 0..8)).prop_map(|(id, body)| {
        let mut lines = vec![format!("Id: {id}")];
        lines.extend(body);
        lines
    })
}

fn document() -> impl Strategy<Value = (Vec<String>, usize)> {
    (vec(body_line(), 0..4), vec(block(), 0..6)).prop_map(|(preamble, blocks)| {
        let count = blocks.len();
        let mut lines = preamble;
        lines.extend(blocks.into_iter().flatten());
        (lines, count)
    })
}

proptest! {
    #[test]
    fn one_row_per_id_line((lines, blocks) in document()) {
        let id_lines = lines
            .iter()
            .filter(|line| matches!(classify_line(line), LineKind::Label(FieldLabel::Id, _)))
            .count();
        prop_assert_eq!(id_lines, blocks);

        let assembled = assemble_text(&lines.join("\n"));
        prop_assert_eq!(assembled.records.len(), id_lines);

        let csv = records_to_csv_string(&assembled.records, CsvOptions::default()).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        prop_assert_eq!(reader.records().count(), id_lines);
    }

    #[test]
    fn header_is_fixed_regardless_of_label_order((lines, _) in document()) {
        let assembled = assemble_text(&lines.join("\n"));
        let csv = records_to_csv_string(&assembled.records, CsvOptions::default()).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        prop_assert_eq!(headers.iter().collect::<Vec<_>>(), header().to_vec());
        for row in reader.records() {
            prop_assert_eq!(row.unwrap().len(), FieldLabel::COUNT);
        }
    }

    #[test]
    fn reparsing_output_yields_no_records((lines, _) in document()) {
        let assembled = assemble_text(&lines.join("\r\n"));
        let csv = records_to_csv_string(&assembled.records, CsvOptions::default()).unwrap();
        prop_assert!(assemble_text(&csv).records.is_empty());
    }
}
