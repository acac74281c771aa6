//! CSV serialization of assembled records.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::label::FieldLabel;
use crate::record::EventRecord;

/// Row terminator for CSV output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

/// CSV writer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Row terminator.
    pub terminator: LineTerminator,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            terminator: LineTerminator::default(),
        }
    }
}

/// Column names in output order.
pub fn header() -> [&'static str; FieldLabel::COUNT] {
    FieldLabel::ALL.map(FieldLabel::as_str)
}

/// Writes a header row and one row per record to `writer`.
///
/// Values containing the delimiter, quotes or line breaks are quoted.
pub fn write_records<W: Write>(
    writer: W,
    records: &[EventRecord],
    options: CsvOptions,
) -> csv::Result<()> {
    let terminator = match options.terminator {
        LineTerminator::Lf => Terminator::Any(b'\n'),
        LineTerminator::Crlf => Terminator::CRLF,
    };
    let mut csv_writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .terminator(terminator)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);
    csv_writer.write_record(header())?;
    for record in records {
        csv_writer.write_record(record.values())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Renders records to an in-memory CSV string.
pub fn records_to_csv_string(records: &[EventRecord], options: CsvOptions) -> csv::Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records, options)?;
    // The writer only emits the UTF-8 text it was given.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(FieldLabel, &str)]) -> EventRecord {
        let mut record = EventRecord::default();
        for (label, value) in pairs {
            record.set(*label, *value);
        }
        record
    }

    #[test]
    fn test_header_only_for_no_records() {
        let csv = records_to_csv_string(&[], CsvOptions::default()).unwrap();
        assert_eq!(csv, "Id,TimeCreated,ProviderName,Message,DumpData\n");
    }

    #[test]
    fn test_unset_fields_are_empty() {
        let records = vec![record(&[(FieldLabel::Id, "1"), (FieldLabel::DumpData, "x")])];
        let csv = records_to_csv_string(&records, CsvOptions::default()).unwrap();
        assert_eq!(csv.lines().nth(1), Some("1,,,,x"));
    }

    #[test]
    fn test_values_needing_quotes() {
        let records = vec![record(&[
            (FieldLabel::Id, "1"),
            (FieldLabel::Message, "a, b"),
            (FieldLabel::DumpData, "say \"hi\""),
        ])];
        let csv = records_to_csv_string(&records, CsvOptions::default()).unwrap();
        assert_eq!(csv.lines().nth(1), Some("1,,,\"a, b\",\"say \"\"hi\"\"\""));
    }

    #[test]
    fn test_round_trip_through_reader() {
        let records = vec![
            record(&[(FieldLabel::Id, "1"), (FieldLabel::Message, "line\nbreak, \"q\"")]),
            record(&[(FieldLabel::Id, "2"), (FieldLabel::ProviderName, "App")]),
        ];
        let csv = records_to_csv_string(&records, CsvOptions::default()).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), header().to_vec());
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][3], "line\nbreak, \"q\"");
        assert_eq!(&rows[1][2], "App");
    }

    #[test]
    fn test_custom_delimiter_and_crlf() {
        let options = CsvOptions {
            delimiter: b';',
            terminator: LineTerminator::Crlf,
        };
        let records = vec![record(&[(FieldLabel::Id, "1"), (FieldLabel::Message, "a;b")])];
        let csv = records_to_csv_string(&records, options).unwrap();
        assert_eq!(
            csv,
            "Id;TimeCreated;ProviderName;Message;DumpData\r\n1;;;\"a;b\";\r\n"
        );
    }
}
