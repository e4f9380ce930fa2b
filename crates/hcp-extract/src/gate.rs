use hcp_model::{InsertOutcome, Iso3, MatchKind, SourceCounts};
use hcp_normalize::{AggregateFilter, NameMatch, NameNormalizer, RowClass};
use tracing::{debug, warn};

/// Shared per-row gate applied by every extractor: blank check, aggregate
/// filter, then name normalization. Returns the resolved key or `None`
/// after bumping the matching drop counter.
pub(crate) fn gate_row(
    raw_name: &str,
    filter: &AggregateFilter,
    normalizer: &NameNormalizer<'_>,
    counts: &mut SourceCounts,
) -> Option<(Iso3, MatchKind)> {
    if raw_name.trim().is_empty() {
        counts.skipped_blank += 1;
        return None;
    }
    if filter.classify(raw_name) == RowClass::Aggregate {
        counts.aggregate_excluded += 1;
        return None;
    }
    match normalizer.resolve(raw_name) {
        NameMatch::Exact(iso3) => Some((iso3, MatchKind::Exact)),
        NameMatch::Alias(iso3) => Some((iso3, MatchKind::Alias)),
        NameMatch::Unmatched => {
            debug!(source = %counts.source, name = raw_name, "unmatched country name");
            counts.unmatched_names += 1;
            None
        }
    }
}

/// Record a `SourceTable::insert` outcome in the counts.
pub(crate) fn note_insert(
    outcome: InsertOutcome,
    iso3: &Iso3,
    raw_name: &str,
    counts: &mut SourceCounts,
) {
    match outcome {
        InsertOutcome::Inserted => {}
        InsertOutcome::Replaced | InsertOutcome::Dropped => {
            warn!(
                source = %counts.source,
                %iso3,
                name = raw_name,
                "duplicate country key resolved deterministically"
            );
            counts.duplicates_dropped += 1;
        }
    }
}
