//! CLI argument definitions for the health-coverage pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hcp",
    version,
    about = "Health-coverage pipeline - clean and merge country health datasets",
    long_about = "Clean three country-level health datasets and inner-join them on ISO3.\n\n\
                  Sources: UNICEF ANC4/SBA indicator survey, under-five mortality\n\
                  track-status classification, and UN WPP 2022 birth projections.\n\
                  Produces one merged CSV for downstream coverage analysis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full clean-and-merge pipeline on a data folder.
    Run(RunArgs),

    /// List the embedded canonical country list (ISO3 and display name).
    Countries,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Folder containing the three source CSV exports.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Indicator survey export (default: <DATA_DIR>/unicef_indicators.csv).
    #[arg(long = "unicef", value_name = "PATH")]
    pub unicef: Option<PathBuf>,

    /// Track-status classification (default: <DATA_DIR>/on_off_track.csv).
    #[arg(long = "status", value_name = "PATH")]
    pub status: Option<PathBuf>,

    /// WPP demographic projections (default: <DATA_DIR>/wpp_projections.csv).
    #[arg(long = "wpp", value_name = "PATH")]
    pub wpp: Option<PathBuf>,

    /// Merged output file (default: <DATA_DIR>/merged_health_data.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Validate and summarise without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write the run summary as JSON.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
