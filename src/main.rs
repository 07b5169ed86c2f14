//! Nutrient Advisor
//!
//! Evaluates a JSON file of intake observations and prints the daily summary
//! and trend report as JSON.
//!
//! Usage: `nutrient_advisor <observations.json> [YYYY-MM-DD]`

use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use nutrient_advisor::config::AdvisorConfig;
use nutrient_advisor::models::IntakeObservation;
use nutrient_advisor::nutrition::IntakeAggregator;
use nutrient_advisor::reference::{load_with_overlay, ReferenceTable};
use nutrient_advisor::store::MemoryIntakeLog;
use nutrient_advisor::tools::summary::{daily_summary, DailySummaryResponse};
use nutrient_advisor::tools::trends::{trend_report, TrendReportResponse};
use nutrient_advisor::EngineResult;

#[derive(Debug, Serialize)]
struct Report {
    summary: DailySummaryResponse,
    trends: TrendReportResponse,
}

fn load_observations(path: &Path) -> EngineResult<MemoryIntakeLog> {
    let raw = std::fs::read_to_string(path)?;
    let observations: Vec<IntakeObservation> = serde_json::from_str(&raw)?;
    MemoryIntakeLog::from_observations(observations)
}

fn build_report<Tz: TimeZone>(
    log: &MemoryIntakeLog,
    table: &ReferenceTable,
    config: &AdvisorConfig,
    tz: Tz,
    date: Option<&str>,
) -> EngineResult<Report> {
    let aggregator = IntakeAggregator::new(tz);
    let summary = daily_summary(log, table, &aggregator, config.profile, config.condition, date)?;
    let trends = trend_report(
        log,
        table,
        &aggregator,
        config.profile,
        config.condition,
        date,
        config.trend_days,
    )?;
    Ok(Report { summary, trends })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrient_advisor=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(observations_path) = args.next().map(PathBuf::from) else {
        eprintln!("Usage: nutrient_advisor <observations.json> [YYYY-MM-DD]");
        std::process::exit(2);
    };
    let date = args.next();

    let config = AdvisorConfig::from_env()?;
    tracing::info!(
        "Profile: {}, condition: {}",
        config.profile.display_name(),
        config.condition.as_str()
    );

    let table = match &config.reference_overlay {
        Some(path) => {
            tracing::info!("Loading reference overlay from {}", path.display());
            load_with_overlay(path)?
        }
        None => ReferenceTable::dge(),
    };

    let log = load_observations(&observations_path)?;
    tracing::info!(
        "Loaded {} observations from {}",
        log.len(),
        observations_path.display()
    );

    let report = match config.utc_offset {
        Some(offset) => build_report(&log, &table, &config, offset, date.as_deref())?,
        None => build_report(&log, &table, &config, Local, date.as_deref())?,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
