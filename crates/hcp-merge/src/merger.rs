use hcp_extract::{StatusExtract, UnicefExtract, WppExtract};
use hcp_model::{CountryRecord, MergeSummary, MergedTable, MissingCounts, TrackStatus};
use hcp_normalize::CountryIndex;
use tracing::{debug, info};

/// Result of the merge stage: the analysis table plus the validation
/// summary that makes every filtering stage's row loss observable.
#[derive(Debug)]
pub struct MergeOutput {
    pub table: MergedTable,
    pub summary: MergeSummary,
}

/// Inner-join the three extracted sources on ISO3.
///
/// Only countries present in all three survive; completeness over coverage
/// is the deliberate tradeoff, so the output is bounded by the smallest
/// source. Display names come from the canonical list, falling back to the
/// classification file's official name for codes the list does not carry,
/// or to the bare code when that name is blank too.
pub fn merge_sources(
    index: &CountryIndex,
    unicef: &UnicefExtract,
    status: &StatusExtract,
    wpp: &WppExtract,
) -> MergeOutput {
    let mut rows = Vec::new();
    let mut missing = MissingCounts::default();
    let mut on_track = 0usize;
    let mut off_track = 0usize;

    for (iso3, status_row) in status.table.iter() {
        let Some(indicators) = unicef.table.get(iso3) else {
            debug!(%iso3, "dropped at merge: absent from indicator survey");
            continue;
        };
        let Some(births) = wpp.table.get(iso3) else {
            debug!(%iso3, "dropped at merge: absent from demographic projections");
            continue;
        };

        if indicators.value.anc4.is_none() {
            missing.anc4 += 1;
        }
        if indicators.value.sba.is_none() {
            missing.sba += 1;
        }
        if births.value.births_thousands.is_none() {
            missing.births += 1;
        }
        match status_row.value {
            TrackStatus::OnTrack => on_track += 1,
            TrackStatus::OffTrack => off_track += 1,
        }

        let fallback = if status_row.raw_name.trim().is_empty() {
            iso3.as_str()
        } else {
            status_row.raw_name.as_str()
        };
        let country = index.display_name(iso3).unwrap_or(fallback).to_string();
        rows.push(CountryRecord {
            iso3: iso3.clone(),
            country,
            status: status_row.value,
            anc4: indicators.value.anc4,
            sba: indicators.value.sba,
            births_thousands: births.value.births_thousands,
        });
    }

    let table = MergedTable::from_rows(rows);
    let summary = MergeSummary {
        sources: vec![
            unicef.counts.clone(),
            status.counts.clone(),
            wpp.counts.clone(),
        ],
        merged_rows: table.len(),
        missing,
        on_track,
        off_track,
    };

    info!(
        unicef = unicef.counts.kept,
        status = status.counts.kept,
        wpp = wpp.counts.kept,
        merged = table.len(),
        "inner join complete"
    );
    MergeOutput { table, summary }
}
