//! Health-coverage pipeline CLI.

use clap::{ColorChoice, Parser};
use hcp_cli::logging::{LogConfig, LogFormat, init_logging};
use hcp_cli::pipeline::{run_countries, run_pipeline};
use hcp_cli::types::PipelineOptions;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, RunArgs};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Run(args) => match run_pipeline(&pipeline_options(&args)) {
            Ok(result) => {
                print_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Countries => match run_countries() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Resolve CLI arguments to concrete file paths.
fn pipeline_options(args: &RunArgs) -> PipelineOptions {
    let in_dir = |name: &str| args.data_dir.join(name);
    PipelineOptions {
        unicef: args
            .unicef
            .clone()
            .unwrap_or_else(|| in_dir("unicef_indicators.csv")),
        status: args
            .status
            .clone()
            .unwrap_or_else(|| in_dir("on_off_track.csv")),
        wpp: args
            .wpp
            .clone()
            .unwrap_or_else(|| in_dir("wpp_projections.csv")),
        output: if args.dry_run {
            None
        } else {
            Some(
                args.output
                    .clone()
                    .unwrap_or_else(|| in_dir("merged_health_data.csv")),
            )
        },
        summary_json: args.summary_json.clone(),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
