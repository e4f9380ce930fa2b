use std::path::Path;

use hcp_ingest::{cell, read_raw_table};
use hcp_model::{Iso3, MatchKind, SourceCounts, SourceTable, TrackStatus};
use hcp_normalize::{AggregateFilter, NameMatch, NameNormalizer, RowClass};
use tracing::{info, warn};

use crate::gate::note_insert;
use crate::{ExtractError, Result};

pub const STATUS_SOURCE: &str = "track-status";

#[derive(Debug)]
pub struct StatusExtract {
    pub table: SourceTable<TrackStatus>,
    pub counts: SourceCounts,
}

/// Binarize a raw under-five-mortality status value.
///
/// Fixed value mapping; anything outside it is an error for the caller to
/// surface, never a silent default bucket.
pub fn classify_status(raw: &str) -> Option<TrackStatus> {
    let lowered = raw.trim().to_lowercase();
    match lowered.as_str() {
        "achieved" | "on-track" | "on track" => Some(TrackStatus::OnTrack),
        _ if lowered.contains("acceleration needed") => Some(TrackStatus::OffTrack),
        _ => None,
    }
}

/// Extract the on-track/off-track classification from the flat three-column
/// status file.
///
/// The file's own ISO3 column is the key; a malformed code there is fatal.
/// The official name still passes through the aggregate filter, and a name
/// that normalizes to a different code is logged (the file's code wins).
pub fn extract_track_status(
    path: &Path,
    normalizer: &NameNormalizer<'_>,
    filter: &AggregateFilter,
) -> Result<StatusExtract> {
    let raw = read_raw_table(path)?;
    let name_col = raw.column_index("OfficialName")?;
    let iso3_col = raw.column_index("ISO3Code")?;
    let status_col = raw.column_index("Status.U5MR")?;

    let mut counts = SourceCounts::new(STATUS_SOURCE);
    let mut table = SourceTable::new(STATUS_SOURCE);

    for row in &raw.rows {
        counts.input_rows += 1;

        let raw_name = cell(row, name_col);
        let raw_iso3 = cell(row, iso3_col);
        let raw_status = cell(row, status_col);
        if raw_name.trim().is_empty() && raw_iso3.trim().is_empty() {
            counts.skipped_blank += 1;
            continue;
        }
        if filter.classify(raw_name) == RowClass::Aggregate {
            counts.aggregate_excluded += 1;
            continue;
        }
        if raw_status.trim().is_empty() {
            counts.skipped_blank += 1;
            continue;
        }

        let iso3 = Iso3::new(raw_iso3).map_err(|_| ExtractError::InvalidIso3 {
            path: path.to_path_buf(),
            country: raw_name.to_string(),
            value: raw_iso3.to_string(),
        })?;
        let status = classify_status(raw_status).ok_or_else(|| {
            ExtractError::UnrecognizedCategory {
                path: path.to_path_buf(),
                country: raw_name.to_string(),
                value: raw_status.to_string(),
            }
        })?;

        if let NameMatch::Exact(resolved) | NameMatch::Alias(resolved) =
            normalizer.resolve(raw_name)
            && resolved != iso3
        {
            warn!(
                name = raw_name,
                file_code = %iso3,
                resolved_code = %resolved,
                "official name disagrees with the file's ISO3 code; keeping the file's code"
            );
        }

        // The classification source carries authoritative codes, so every
        // surviving row counts as an exact match.
        let outcome = table.insert(iso3.clone(), MatchKind::Exact, raw_name, status);
        note_insert(outcome, &iso3, raw_name, &mut counts);
    }
    counts.kept = table.len();

    info!(
        source = STATUS_SOURCE,
        input = counts.input_rows,
        kept = counts.kept,
        "extracted track-status classification"
    );
    Ok(StatusExtract { table, counts })
}
