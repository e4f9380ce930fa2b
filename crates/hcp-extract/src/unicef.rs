use std::collections::BTreeMap;
use std::path::Path;

use hcp_ingest::{cell, parse_numeric, parse_year, read_raw_table};
use hcp_model::{Iso3, MatchKind, SourceCounts, SourceTable};
use hcp_normalize::{AggregateFilter, NameNormalizer};
use tracing::{info, warn};

use crate::Result;
use crate::gate::gate_row;

pub const UNICEF_SOURCE: &str = "unicef";

/// Target reporting window, inclusive.
const YEAR_MIN: i32 = 2018;
const YEAR_MAX: i32 = 2022;

/// Indicator-name fragments identifying the two target series.
const ANC4_MARKER: &str = "Antenatal care 4+";
const SBA_MARKER: &str = "Skilled birth attendant";

/// Pivoted indicator values for one country.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorValues {
    pub anc4: Option<f64>,
    pub sba: Option<f64>,
}

#[derive(Debug)]
pub struct UnicefExtract {
    pub table: SourceTable<IndicatorValues>,
    pub counts: SourceCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Indicator {
    Anc4,
    Sba,
}

fn indicator_of(raw: &str) -> Option<Indicator> {
    if raw.contains(ANC4_MARKER) {
        Some(Indicator::Anc4)
    } else if raw.contains(SBA_MARKER) {
        Some(Indicator::Sba)
    } else {
        None
    }
}

#[derive(Debug)]
struct Candidate {
    year: i32,
    value: Option<f64>,
    kind: MatchKind,
    raw_name: String,
}

/// Extract ANC4/SBA coverage from the long-format indicator survey export.
///
/// Filters to 2018-2022 and the two target indicators, then keeps one
/// observation per country-indicator pair. Tie-break policy, deliberately
/// explicit: the higher year wins; within the same year the last-encountered
/// row wins. Distinct raw-name variants collapsing onto one country count as
/// dropped duplicates.
pub fn extract_indicators(
    path: &Path,
    normalizer: &NameNormalizer<'_>,
    filter: &AggregateFilter,
) -> Result<UnicefExtract> {
    let raw = read_raw_table(path)?;
    let name_col = raw.column_index("Geographic area")?;
    let indicator_col = raw.column_index("Indicator")?;
    let year_col = raw.column_index("TIME_PERIOD")?;
    let value_col = raw.column_index("OBS_VALUE")?;

    let mut counts = SourceCounts::new(UNICEF_SOURCE);
    let mut best: BTreeMap<(Iso3, Indicator), Candidate> = BTreeMap::new();

    for row in &raw.rows {
        counts.input_rows += 1;

        let Some(indicator) = indicator_of(cell(row, indicator_col)) else {
            counts.out_of_scope += 1;
            continue;
        };
        let year = match parse_year(cell(row, year_col)) {
            Some(year) if (YEAR_MIN..=YEAR_MAX).contains(&year) => year,
            _ => {
                counts.out_of_scope += 1;
                continue;
            }
        };
        let raw_name = cell(row, name_col);
        let Some((iso3, kind)) = gate_row(raw_name, filter, normalizer, &mut counts) else {
            continue;
        };
        let value = parse_numeric(cell(row, value_col));

        let candidate = Candidate {
            year,
            value,
            kind,
            raw_name: raw_name.to_string(),
        };
        // `>=` implements both halves of the policy: a higher year replaces,
        // and a same-year row encountered later replaces.
        match best.entry((iso3, indicator)) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                // Repeat observations of one series share a raw name; a
                // different name means two source rows collapsed onto one
                // country key, which must stay visible in the summary.
                if slot.get().raw_name != candidate.raw_name {
                    warn!(
                        source = UNICEF_SOURCE,
                        iso3 = %slot.key().0,
                        first = %slot.get().raw_name,
                        second = %candidate.raw_name,
                        "name variants collapsed onto one country key; resolved by year"
                    );
                    counts.duplicates_dropped += 1;
                }
                if candidate.year >= slot.get().year {
                    slot.insert(candidate);
                }
            }
        }
    }

    let mut table = SourceTable::new(UNICEF_SOURCE);
    let mut pivoted: BTreeMap<Iso3, (IndicatorValues, MatchKind, String)> = BTreeMap::new();
    for ((iso3, indicator), candidate) in best {
        let entry = pivoted.entry(iso3).or_insert_with(|| {
            (
                IndicatorValues::default(),
                candidate.kind,
                candidate.raw_name.clone(),
            )
        });
        match indicator {
            Indicator::Anc4 => entry.0.anc4 = candidate.value,
            Indicator::Sba => entry.0.sba = candidate.value,
        }
        if candidate.kind == MatchKind::Exact {
            entry.1 = MatchKind::Exact;
            entry.2 = candidate.raw_name;
        }
    }
    for (iso3, (values, kind, raw_name)) in pivoted {
        table.insert(iso3, kind, raw_name, values);
    }
    counts.kept = table.len();

    info!(
        source = UNICEF_SOURCE,
        input = counts.input_rows,
        kept = counts.kept,
        aggregate_excluded = counts.aggregate_excluded,
        unmatched = counts.unmatched_names,
        "extracted indicator survey data"
    );
    Ok(UnicefExtract { table, counts })
}
