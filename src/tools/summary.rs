//! Daily summary tool
//!
//! One day's intake measured against the resolved recommendations, with the
//! supplements that contributed and the tips they trigger.

use chrono::{NaiveDate, TimeZone};
use serde::Serialize;

use crate::error::EngineResult;
use crate::models::{DemographicProfile, SpecialCondition};
use crate::nutrition::{
    generate_tips, parse_day, HealthTip, IntakeAggregator, NutrientProgress, NutrientStatus,
    RecommendationResolver, SourceContribution,
};
use crate::reference::ReferenceTable;
use crate::store::IntakeLog;

use super::fetch_days;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NutrientSummary {
    #[serde(flatten)]
    pub progress: NutrientProgress,
    pub unit: &'static str,
    pub formatted_amount: String,
    pub formatted_recommendation: String,
    pub sources: Vec<SourceContribution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCounts {
    pub none: usize,
    pub insufficient: usize,
    pub normal: usize,
    pub excessive: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailySummaryResponse {
    pub date: NaiveDate,
    pub profile: DemographicProfile,
    pub profile_name: String,
    pub condition: SpecialCondition,
    pub observation_count: usize,
    pub status_counts: StatusCounts,
    pub nutrients: Vec<NutrientSummary>,
    pub tips: Vec<HealthTip>,
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Summarize one day of intake, defaulting to today in the aggregator's zone
pub fn daily_summary<L, Tz>(
    log: &L,
    table: &ReferenceTable,
    aggregator: &IntakeAggregator<Tz>,
    profile: DemographicProfile,
    condition: SpecialCondition,
    date: Option<&str>,
) -> EngineResult<DailySummaryResponse>
where
    L: IntakeLog + ?Sized,
    Tz: TimeZone,
{
    let day = match date {
        Some(d) => parse_day(d)?,
        None => aggregator.today(),
    };

    let observations = fetch_days(log, day, day)?;
    let aggregate = aggregator.aggregate(&observations, day)?;
    let resolver = RecommendationResolver::new(table);

    let mut counts = StatusCounts {
        none: 0,
        insufficient: 0,
        normal: 0,
        excessive: 0,
    };

    let mut nutrients = Vec::new();
    for recommendation in resolver.all_recommendations(profile, condition) {
        let nutrient = recommendation.nutrient;
        let progress = NutrientProgress::new(aggregate.total(nutrient), recommendation);

        match progress.status {
            NutrientStatus::None => counts.none += 1,
            NutrientStatus::Insufficient => counts.insufficient += 1,
            NutrientStatus::Normal => counts.normal += 1,
            NutrientStatus::Excessive => counts.excessive += 1,
        }

        nutrients.push(NutrientSummary {
            unit: nutrient.unit().symbol(),
            formatted_amount: crate::models::format_amount(progress.amount, nutrient),
            formatted_recommendation: recommendation.formatted_amount(),
            sources: aggregator.sources(&observations, day, nutrient)?,
            progress,
        });
    }

    let tips = generate_tips(&aggregate, profile, condition, &resolver);

    tracing::debug!(
        "Summary for {}: {} observations, {} tips",
        day,
        aggregate.observation_count,
        tips.len()
    );

    Ok(DailySummaryResponse {
        date: day,
        profile,
        profile_name: profile.display_name(),
        condition,
        observation_count: aggregate.observation_count,
        status_counts: counts,
        nutrients,
        tips,
    })
}
