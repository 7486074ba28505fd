// ABOUTME: Command-line entry point for the ANT+ zone display
// ABOUTME: Prints zone tables, classifies single readings, or streams readings from stdin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show the configured power and heart rate zones
//! ant-zone-display --config INPUT_CONSTANTS.yaml zones
//!
//! # Classify a single reading
//! ant-zone-display classify --metric power 250
//!
//! # Pipe decoded sensor readings through the monitor, one JSON update per line
//! printf 'power 250\nhr 150 12.0\n' | ant-zone-display stream
//! ```

use ant_zone_display::{
    config::{DisplaySettings, ZoneProfiles},
    errors::AppResult,
    input::{parse_metric, ReadingClock},
    logging::{AppLogger, LoggingConfig},
    monitor::ZoneMonitor,
    sink::{JsonLinesSink, ZoneSink},
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{error, info};
use zone_core::{Metric, ZoneConfig, ZoneResult};

#[derive(Parser)]
#[command(
    name = "ant-zone-display",
    version,
    about = "ANT+ power and heart rate zone display",
    long_about = "Classifies power meter and heart rate monitor readings into training zones for an LED zone display."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Settings file (defaults to $ZONE_CONFIG_PATH or INPUT_CONSTANTS.yaml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the configured power and heart rate zones
    Zones,

    /// Classify a single reading
    Classify {
        /// Metric of the reading (power, hr)
        #[arg(long, short = 'm', value_parser = parse_metric_arg)]
        metric: Metric,

        /// Reading in watts or bpm
        #[arg(allow_negative_numbers = true)]
        reading: f64,
    },

    /// Read `<metric> <value> [seconds]` lines from stdin and emit zone updates as JSON lines
    Stream,
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    metric: Metric,
    reading: f64,
    reference_value: f64,
    zone: ZoneResult<'a>,
}

fn parse_metric_arg(value: &str) -> Result<Metric, String> {
    parse_metric(value).map_err(|e| e.message)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("failed to initialise logging: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    // Invalid zones abort here, before any reading is processed
    let settings = DisplaySettings::from_env(cli.config.as_deref())?;
    let profiles = settings.zone_profiles()?;

    match cli.command {
        Command::Zones => {
            print_zone_table(&profiles.power);
            println!();
            print_zone_table(&profiles.heart_rate);
            Ok(())
        }
        Command::Classify { metric, reading } => classify(&profiles, metric, reading),
        Command::Stream => stream(&settings, &profiles).await,
    }
}

fn print_zone_table(config: &ZoneConfig) {
    let metric = config.metric();
    let unit = metric.unit();
    println!(
        "{metric} zones ({} {} {unit})",
        metric.reference_name(),
        config.reference_value()
    );

    for boundary in config.boundaries() {
        let range = config.boundary(boundary.index + 1).map_or_else(
            || format!(">= {}", boundary.lower_bound),
            |next| format!("{} - {}", boundary.lower_bound, next.lower_bound),
        );
        println!(
            "  {:>2}  {:<20} {range} {unit}",
            boundary.index, boundary.label
        );
    }
}

fn classify(profiles: &ZoneProfiles, metric: Metric, reading: f64) -> AppResult<()> {
    let config = profiles.get(metric);
    let output = ClassifyOutput {
        metric,
        reading,
        reference_value: config.reference_value(),
        zone: profiles.classifier(metric).classify(reading),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn stream(settings: &DisplaySettings, profiles: &ZoneProfiles) -> AppResult<()> {
    let mut monitor = ZoneMonitor::from_settings(profiles, &settings.ant);
    let mut sink = JsonLinesSink::new(io::stdout());
    let started = Instant::now();
    let mut clock = ReadingClock::new();

    let mut lines = BufReader::new(stdin()).lines();
    let mut line_number = 0;
    let mut published = 0_usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        match clock.parse_line(&line, started.elapsed()) {
            Ok(Some(reading)) => {
                if let Some(update) = monitor.ingest(reading) {
                    sink.publish(&update)?;
                    published += 1;
                }
            }
            Ok(None) => {}
            Err(e) => AppLogger::log_rejected_input(line_number, &e.message),
        }
    }

    info!(
        lines = line_number,
        updates = published,
        active = %monitor.active(),
        "reading stream closed"
    );
    Ok(())
}
