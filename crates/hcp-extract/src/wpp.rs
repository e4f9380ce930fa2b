use std::path::Path;

use hcp_ingest::{cell, parse_numeric, parse_year, read_raw_table_at_marker};
use hcp_model::{SourceCounts, SourceTable};
use hcp_normalize::{AggregateFilter, NameNormalizer};
use tracing::info;

use crate::Result;
use crate::gate::{gate_row, note_insert};

pub const WPP_SOURCE: &str = "wpp";

/// Header cell that marks the true header row under the preamble.
pub const HEADER_MARKER: &str = "Region, subregion, country or area *";

/// Reference year for the birth projections.
const TARGET_YEAR: i32 = 2022;

/// Projected births for one country, in thousands. `None` means the source
/// carried a placeholder token, not zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BirthsValue {
    pub births_thousands: Option<f64>,
}

#[derive(Debug)]
pub struct WppExtract {
    pub table: SourceTable<BirthsValue>,
    pub counts: SourceCounts,
}

/// Extract 2022 birth projections from the demographic-projections export.
///
/// The export embeds rows of preamble before the header, so the header row
/// is located by marker scan rather than a hardcoded skip; an absent marker
/// aborts the run.
pub fn extract_births(
    path: &Path,
    normalizer: &NameNormalizer<'_>,
    filter: &AggregateFilter,
) -> Result<WppExtract> {
    let raw = read_raw_table_at_marker(path, HEADER_MARKER)?;
    let name_col = raw.column_index(HEADER_MARKER)?;
    let year_col = raw.column_index("Year")?;
    let births_col = raw.find_column_containing("births")?;

    let mut counts = SourceCounts::new(WPP_SOURCE);
    let mut table = SourceTable::new(WPP_SOURCE);

    for row in &raw.rows {
        counts.input_rows += 1;

        match parse_year(cell(row, year_col)) {
            Some(TARGET_YEAR) => {}
            _ => {
                counts.out_of_scope += 1;
                continue;
            }
        }
        let raw_name = cell(row, name_col);
        let Some((iso3, kind)) = gate_row(raw_name, filter, normalizer, &mut counts) else {
            continue;
        };
        let births = BirthsValue {
            births_thousands: parse_numeric(cell(row, births_col)),
        };

        let outcome = table.insert(iso3.clone(), kind, raw_name, births);
        note_insert(outcome, &iso3, raw_name, &mut counts);
    }
    counts.kept = table.len();

    info!(
        source = WPP_SOURCE,
        input = counts.input_rows,
        kept = counts.kept,
        aggregate_excluded = counts.aggregate_excluded,
        unmatched = counts.unmatched_names,
        "extracted demographic projections"
    );
    Ok(WppExtract { table, counts })
}
