//! Trend report tool

use chrono::{Days, NaiveDate, TimeZone};
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{DemographicProfile, NutrientType, SpecialCondition};
use crate::nutrition::{parse_day, summarize, IntakeAggregator, RecommendationResolver, TrendSummary};
use crate::reference::ReferenceTable;
use crate::store::IntakeLog;

use super::fetch_days;

/// Longest window a report covers
pub const MAX_TREND_DAYS: u32 = 365;

#[derive(Debug, Clone, Serialize)]
pub struct TrendReportResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub profile: DemographicProfile,
    pub condition: SpecialCondition,
    /// Only nutrients recorded at least once in the window
    pub nutrients: Vec<TrendSummary>,
}

/// Trends over the `days` days ending on `end_date` (default today)
pub fn trend_report<L, Tz>(
    log: &L,
    table: &ReferenceTable,
    aggregator: &IntakeAggregator<Tz>,
    profile: DemographicProfile,
    condition: SpecialCondition,
    end_date: Option<&str>,
    days: u32,
) -> EngineResult<TrendReportResponse>
where
    L: IntakeLog + ?Sized,
    Tz: TimeZone,
{
    let days = days.clamp(1, MAX_TREND_DAYS);
    let end = match end_date {
        Some(d) => parse_day(d)?,
        None => aggregator.today(),
    };
    let start = end
        .checked_sub_days(Days::new(u64::from(days - 1)))
        .ok_or_else(|| EngineError::InvalidDate(end.to_string()))?;

    let observations = fetch_days(log, start, end)?;
    let aggregates = aggregator.aggregate_range(&observations, start, end)?;
    let resolver = RecommendationResolver::new(table);

    let nutrients: Vec<TrendSummary> = NutrientType::ALL
        .into_iter()
        .filter(|n| aggregates.iter().any(|a| a.get(*n).is_some()))
        .map(|n| summarize(&aggregates, &resolver.resolve(n, profile, condition)))
        .collect();

    tracing::debug!(
        "Trend report {}..={}: {} nutrients",
        start,
        end,
        nutrients.len()
    );

    Ok(TrendReportResponse {
        start_date: start,
        end_date: end,
        days,
        profile,
        condition,
        nutrients,
    })
}
