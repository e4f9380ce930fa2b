use serde::{Deserialize, Serialize};

/// Row-count accounting for one source as it moves through the pipeline.
///
/// Every dropped row lands in exactly one bucket; `kept` is the final
/// per-country count after any pivot, so it can be smaller than the sum of
/// surviving rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCounts {
    pub source: String,
    /// Data rows read from the file (header and preamble excluded).
    pub input_rows: usize,
    /// Rows outside the target indicators, years or reference year.
    pub out_of_scope: usize,
    /// Rows identified as regional/income aggregates.
    pub aggregate_excluded: usize,
    /// Rows whose name resolved to no canonical country.
    pub unmatched_names: usize,
    /// Rows skipped for a structurally blank field (empty name or status).
    pub skipped_blank: usize,
    /// Rows that lost the duplicate-ISO3 resolution.
    pub duplicates_dropped: usize,
    /// Countries in the extracted source table.
    pub kept: usize,
}

impl SourceCounts {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }
}

/// Column-wise missing-value counts in the merged table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCounts {
    pub anc4: usize,
    pub sba: usize,
    pub births: usize,
}

/// Run-level validation summary emitted by the merger.
///
/// Silent data loss is the failure mode this exists to prevent: counts are
/// reported at every filtering stage for every source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSummary {
    pub sources: Vec<SourceCounts>,
    pub merged_rows: usize,
    pub missing: MissingCounts,
    pub on_track: usize,
    pub off_track: usize,
}
