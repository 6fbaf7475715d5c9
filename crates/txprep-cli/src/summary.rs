use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use txprep_common::format_numeric;
use txprep_model::BuyingFrequency;

use crate::types::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    match &summary.written {
        Some(written) => println!("Preprocessed data saved to '{}'", written.path.display()),
        None => println!(
            "Dry run: {} rows preprocessed, nothing written",
            summary.rows
        ),
    }
    println!("{}", stage_table(summary));
    println!("{}", bucket_table(summary));
}

/// Rows entering and leaving each stage.
pub fn stage_table(summary: &RunSummary) -> Table {
    let clean = &summary.report.clean;
    let after_incomplete = clean.rows_in - clean.dropped_incomplete;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    table.add_row(vec![
        stage_cell("Load"),
        dim_cell("-"),
        Cell::new(clean.rows_in),
        Cell::new(summary.report.input_path.display()),
    ]);
    table.add_row(vec![
        stage_cell("Drop incomplete"),
        Cell::new(clean.rows_in),
        Cell::new(after_incomplete),
        dropped_cell(clean.dropped_incomplete, "with missing values"),
    ]);
    table.add_row(vec![
        stage_cell("Amount filter"),
        Cell::new(after_incomplete),
        Cell::new(clean.rows_out),
        dropped_cell(
            clean.dropped_over_threshold,
            &format!("above {}", format_numeric(summary.report.options.max_amount)),
        ),
    ]);
    table.add_row(vec![
        stage_cell("Encode"),
        Cell::new(clean.rows_out),
        Cell::new(clean.rows_out),
        Cell::new(format!(
            "{} indicator columns",
            summary.report.encode.indicator_columns.len()
        )),
    ]);
    table.add_row(vec![
        stage_cell("Bucket"),
        Cell::new(clean.rows_out),
        Cell::new(summary.rows),
        Cell::new(format!("{} columns", summary.columns.len())),
    ]);
    match &summary.written {
        Some(written) => table.add_row(vec![
            stage_cell("Write"),
            Cell::new(summary.rows),
            Cell::new(written.rows),
            Cell::new(format!("{} bytes, sha256 {}", written.bytes, short_hash(&written.sha256))),
        ]),
        None => table.add_row(vec![
            stage_cell("Write"),
            Cell::new(summary.rows),
            dim_cell("-"),
            dim_cell("dry run"),
        ]),
    };
    table
}

/// Row count per buying frequency label.
pub fn bucket_table(summary: &RunSummary) -> Table {
    let buckets = &summary.report.buckets;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&summary.report.options.frequency_column),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for label in BuyingFrequency::ALL {
        let count = buckets.get(label);
        let count_cell = if count == 0 {
            dim_cell(count)
        } else {
            Cell::new(count)
        };
        table.add_row(vec![Cell::new(label.as_str()), count_cell]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(buckets.total()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn stage_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn dropped_cell(count: usize, reason: &str) -> Cell {
    let text = format!("dropped {count} {reason}");
    if count > 0 {
        Cell::new(text).fg(Color::Yellow)
    } else {
        dim_cell(text)
    }
}

fn short_hash(hash: &str) -> &str {
    hash.get(..12).unwrap_or(hash)
}
