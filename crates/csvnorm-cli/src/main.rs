//! csvnorm command-line entry point.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use csvnorm_cli::commands::{NormalizeRequest, run_normalize};
use csvnorm_cli::logging::{LogConfig, LogFormat, init_logging};
use csvnorm_cli::summary::{print_summary, summary_json};
use csvnorm_stats::DecimalPolicy;
use csvnorm_transform::{NormalizeOptions, TargetRange};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, SummaryFormatArg};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            std::process::exit(if error.use_stderr() { 1 } else { 0 });
        }
    };
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let request = request_from_cli(cli)?;
    let outcome = run_normalize(&request)?;
    match cli.summary {
        SummaryFormatArg::Table => print_summary(&outcome),
        SummaryFormatArg::Json => {
            let json = summary_json(&outcome).context("serialize summary")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn request_from_cli(cli: &Cli) -> Result<NormalizeRequest> {
    let mut options = NormalizeOptions::default().with_policy(
        DecimalPolicy::reference().with_intermediate_scale(cli.intermediate_scale),
    );
    if cli.range_min.is_some() || cli.range_max.is_some() {
        let defaults = TargetRange::unit();
        let lower = cli
            .range_min
            .clone()
            .unwrap_or_else(|| defaults.lower().clone());
        let upper = cli
            .range_max
            .clone()
            .unwrap_or_else(|| defaults.upper().clone());
        options = options.with_target_range(TargetRange::new(lower, upper)?);
    }
    Ok(NormalizeRequest {
        source: cli.source.clone(),
        destination_dir: cli.destination_dir.clone(),
        column: cli.column.clone(),
        method: cli.method.into(),
        output_column: cli.output_column.clone(),
        options,
    })
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
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
