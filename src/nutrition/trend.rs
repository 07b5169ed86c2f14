//! Trend analysis
//!
//! Summarizes a multi-day window of daily aggregates for one nutrient.
//! Days in the window with no record of the nutrient count as zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DailyRecommendation, NutrientType};

use super::aggregator::DailyAggregate;
use super::status::{classify, percentage, NutrientStatus};

/// Relative change between window halves that counts as a trend
pub const TREND_THRESHOLD_FRACTION: f64 = 0.10;

/// Coarse direction of intake over a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

/// One chart point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn sorted_totals(aggregates: &[DailyAggregate], nutrient: NutrientType) -> Vec<(NaiveDate, f64)> {
    let mut totals: Vec<(NaiveDate, f64)> = aggregates
        .iter()
        .map(|a| (a.date, a.total(nutrient)))
        .collect();
    totals.sort_by_key(|(date, _)| *date);
    totals
}

/// Mean daily total over the window, 0 for an empty window
pub fn average(aggregates: &[DailyAggregate], nutrient: NutrientType) -> f64 {
    let totals: Vec<f64> = aggregates.iter().map(|a| a.total(nutrient)).collect();
    mean(&totals)
}

/// Compare the means of the first and second half of the window
///
/// For odd counts the middle day belongs to the second half. Fewer than two
/// days is always stable.
pub fn classify_trend(aggregates: &[DailyAggregate], nutrient: NutrientType) -> TrendDirection {
    if aggregates.len() < 2 {
        return TrendDirection::Stable;
    }

    let values: Vec<f64> = sorted_totals(aggregates, nutrient)
        .into_iter()
        .map(|(_, v)| v)
        .collect();
    let midpoint = values.len() / 2;
    let first_half = mean(&values[..midpoint]);
    let second_half = mean(&values[midpoint..]);
    let threshold = first_half.max(second_half) * TREND_THRESHOLD_FRACTION;

    if second_half > first_half + threshold {
        TrendDirection::Increasing
    } else if second_half < first_half - threshold {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

/// Daily totals in date order, zero days included
pub fn series(aggregates: &[DailyAggregate], nutrient: NutrientType) -> Vec<SeriesPoint> {
    sorted_totals(aggregates, nutrient)
        .into_iter()
        .map(|(date, value)| SeriesPoint { date, value })
        .collect()
}

/// Window summary for one nutrient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub nutrient: NutrientType,
    pub days: usize,
    pub average: f64,
    pub average_percentage: f64,
    pub average_status: NutrientStatus,
    pub trend: TrendDirection,
    pub recommendation: DailyRecommendation,
    pub series: Vec<SeriesPoint>,
}

/// Average, trend and series of a nutrient, with the average classified
pub fn summarize(
    aggregates: &[DailyAggregate],
    recommendation: &DailyRecommendation,
) -> TrendSummary {
    let nutrient = recommendation.nutrient;
    let avg = average(aggregates, nutrient);

    TrendSummary {
        nutrient,
        days: aggregates.len(),
        average: avg,
        average_percentage: percentage(avg, recommendation.recommended_amount),
        average_status: classify(avg, recommendation),
        trend: classify_trend(aggregates, nutrient),
        recommendation: *recommendation,
        series: series(aggregates, nutrient),
    }
}
