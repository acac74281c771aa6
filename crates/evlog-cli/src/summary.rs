//! Terminal output after a conversion: the output path and optional count tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use evlog_core::{ExportSummary, FieldLabel};

/// Prints the output path, followed by count tables when `detailed` is set.
pub fn print_summary(summary: &ExportSummary, detailed: bool) {
    println!("{}", summary.output.display());
    if !detailed {
        return;
    }
    println!();
    println!("{}", stats_table(summary));
    println!();
    println!("{}", fields_table(summary));
}

fn stats_table(summary: &ExportSummary) -> Table {
    let stats = &summary.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Input"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Records").add_attribute(Attribute::Bold),
        Cell::new(summary.records.len()).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Lines"), Cell::new(stats.lines)]);
    table.add_row(vec![Cell::new("Label lines"), Cell::new(stats.label_lines)]);
    table.add_row(vec![Cell::new("Blank lines"), dim_cell(stats.blank_lines)]);
    table.add_row(vec![
        Cell::new("Continuations appended"),
        Cell::new(stats.continuations_appended),
    ]);
    table.add_row(vec![
        Cell::new("Continuations dropped"),
        count_cell(stats.continuations_dropped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Labels before first Id"),
        count_cell(stats.orphan_labels, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Labels overwritten"),
        count_cell(stats.overwritten_labels, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new(format!("Undecodable bytes ({})", summary.encoding)),
        count_cell(summary.malformed_bytes, Color::Red),
    ]);
    table
}

fn fields_table(summary: &ExportSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Populated")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for label in FieldLabel::ALL {
        let populated = summary
            .records
            .iter()
            .filter(|record| record.get(label).is_some_and(|value| !value.is_empty()))
            .count();
        table.add_row(vec![
            Cell::new(label.as_str()).fg(Color::Blue),
            Cell::new(format!("{populated} / {}", summary.records.len())),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
