use std::path::PathBuf;

use hcp_model::MergeSummary;

/// Resolved inputs for one pipeline run, independent of the CLI surface.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub unicef: PathBuf,
    pub status: PathBuf,
    pub wpp: PathBuf,
    /// Where to write the merged table; `None` for a dry run.
    pub output: Option<PathBuf>,
    /// Optional JSON copy of the run summary.
    pub summary_json: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RunResult {
    /// Where the merged table was written; `None` for dry runs.
    pub output: Option<PathBuf>,
    pub summary: MergeSummary,
    pub summary_json: Option<PathBuf>,
}
