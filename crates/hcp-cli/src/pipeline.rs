//! Pipeline orchestration with explicit stages.
//!
//! 1. **Load reference data**: canonical country list, alias table,
//!    aggregate patterns
//! 2. **Extract**: the three source extractors, each producing an
//!    ISO3-keyed table plus stage counts
//! 3. **Merge**: strict inner join on ISO3 with a validation summary
//! 4. **Write**: the merged CSV and the optional JSON summary
//!
//! A failure in any extractor aborts the run: merge correctness depends on
//! all three sources being valid, so there is no graceful degradation.

use std::fs::File;

use anyhow::{Context, Result};
use tracing::info_span;

use hcp_extract::{extract_births, extract_indicators, extract_track_status};
use hcp_merge::{merge_sources, write_merged_csv};
use hcp_normalize::{AggregateFilter, CountryIndex, NameNormalizer};

use crate::types::{PipelineOptions, RunResult};

/// Run the full clean-and-merge pipeline.
pub fn run_pipeline(options: &PipelineOptions) -> Result<RunResult> {
    let index = CountryIndex::load_embedded().context("load canonical country list")?;
    let normalizer = NameNormalizer::new(&index).context("build name normalizer")?;
    let filter = AggregateFilter::new().context("compile aggregate patterns")?;

    let unicef = info_span!("extract", source = "unicef")
        .in_scope(|| extract_indicators(&options.unicef, &normalizer, &filter))
        .with_context(|| format!("extract indicator survey {}", options.unicef.display()))?;
    let status = info_span!("extract", source = "track-status")
        .in_scope(|| extract_track_status(&options.status, &normalizer, &filter))
        .with_context(|| format!("extract track status {}", options.status.display()))?;
    let wpp = info_span!("extract", source = "wpp")
        .in_scope(|| extract_births(&options.wpp, &normalizer, &filter))
        .with_context(|| format!("extract projections {}", options.wpp.display()))?;

    let merged = info_span!("merge").in_scope(|| merge_sources(&index, &unicef, &status, &wpp));

    if let Some(path) = &options.output {
        write_merged_csv(&merged.table, path)
            .with_context(|| format!("write merged table {}", path.display()))?;
    }
    if let Some(path) = &options.summary_json {
        let file = File::create(path)
            .with_context(|| format!("create summary file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &merged.summary).context("serialize run summary")?;
    }

    Ok(RunResult {
        output: options.output.clone(),
        summary: merged.summary,
        summary_json: options.summary_json.clone(),
    })
}

/// Print the embedded canonical country list.
pub fn run_countries() -> Result<()> {
    let index = CountryIndex::load_embedded().context("load canonical country list")?;
    for (iso3, name) in index.iter() {
        println!("{iso3}  {name}");
    }
    Ok(())
}
