use std::path::Path;

use anyhow::{Context, Result};
use hcp_model::MergedTable;
use tracing::info;

/// Output column order, fixed by the downstream-consumer contract.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "Country",
    "ISO3Code",
    "Mortality_Status_Binary",
    "ANC4",
    "SBA",
    "Births",
];

fn format_value(value: Option<f64>) -> String {
    match value {
        // Shortest round-trip formatting keeps repeated runs byte-identical.
        Some(v) => format!("{v}"),
        None => String::new(),
    }
}

/// Write the merged table as the flat CSV artifact consumed downstream.
///
/// Missing values are empty fields; rows arrive pre-sorted by ISO3, so the
/// same inputs always produce the same bytes.
pub fn write_merged_csv(table: &MergedTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create output file {}", path.display()))?;
    writer
        .write_record(OUTPUT_COLUMNS)
        .context("write output header")?;
    for row in table.rows() {
        writer
            .write_record([
                row.country.as_str(),
                row.iso3.as_str(),
                row.status.as_str(),
                &format_value(row.anc4),
                &format_value(row.sba),
                &format_value(row.births_thousands),
            ])
            .with_context(|| format!("write row for {}", row.iso3))?;
    }
    writer.flush().context("flush output file")?;

    info!(path = %path.display(), rows = table.len(), "wrote merged table");
    Ok(())
}
