use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hcp_cli::types::RunResult;

/// Print the run-level validation summary: per-source counts at every
/// filtering stage, then the merged totals.
pub fn print_summary(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Input"),
        header_cell("Out of scope"),
        header_cell("Aggregates"),
        header_cell("Unmatched"),
        header_cell("Blank"),
        header_cell("Duplicates"),
        header_cell("Kept"),
    ]);
    apply_table_style(&mut table);
    for column in 1..8 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for counts in &result.summary.sources {
        table.add_row(vec![
            Cell::new(&counts.source)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(counts.input_rows),
            dim_if_zero(counts.out_of_scope),
            drop_cell(counts.aggregate_excluded),
            drop_cell(counts.unmatched_names),
            drop_cell(counts.skipped_blank),
            drop_cell(counts.duplicates_dropped),
            Cell::new(counts.kept).add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");

    let missing = result.summary.missing;
    println!(
        "Merged: {} countries ({} on-track, {} off-track)",
        result.summary.merged_rows, result.summary.on_track, result.summary.off_track
    );
    println!(
        "Missing values: ANC4 {}, SBA {}, Births {}",
        missing.anc4, missing.sba, missing.births
    );
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    if let Some(path) = &result.summary_json {
        println!("Summary JSON: {}", path.display());
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn drop_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn dim_if_zero(count: usize) -> Cell {
    if count > 0 { Cell::new(count) } else { dim_cell(count) }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
