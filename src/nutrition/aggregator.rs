//! Intake aggregation
//!
//! Folds intake observations into per-nutrient daily totals. Days are
//! calendar days in the reporting time zone, not UTC.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{IntakeObservation, NutrientType};

/// Parse an ISO date ("2026-01-09")
pub fn parse_day(s: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidDate(s.to_string()))
}

/// Nutrient totals for one calendar day
///
/// A nutrient that was never recorded is absent from `totals`; one recorded
/// with a zero amount is present with 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub totals: BTreeMap<NutrientType, f64>,
    pub observation_count: usize,
}

impl DailyAggregate {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            totals: BTreeMap::new(),
            observation_count: 0,
        }
    }

    /// Total for a nutrient, 0 when never recorded
    pub fn total(&self, nutrient: NutrientType) -> f64 {
        self.totals.get(&nutrient).copied().unwrap_or(0.0)
    }

    /// Total for a nutrient, `None` when never recorded
    pub fn get(&self, nutrient: NutrientType) -> Option<f64> {
        self.totals.get(&nutrient).copied()
    }

    fn add(&mut self, observation: &IntakeObservation) {
        let servings = observation.servings_taken as f64;
        for entry in &observation.nutrients {
            *self.totals.entry(entry.nutrient).or_insert(0.0) += entry.amount_per_serving * servings;
        }
        self.observation_count += 1;
    }
}

/// Where part of a day's total came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceContribution {
    pub label: String,
    pub amount: f64,
}

/// Aggregates observations by calendar day in a reporting time zone
#[derive(Debug, Clone)]
pub struct IntakeAggregator<Tz: TimeZone> {
    tz: Tz,
}

impl IntakeAggregator<Local> {
    /// Aggregate by the system's local calendar day
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl<Tz: TimeZone> IntakeAggregator<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Calendar day an observation falls on in the reporting zone
    pub fn day_of(&self, observation: &IntakeObservation) -> NaiveDate {
        observation.timestamp.with_timezone(&self.tz).date_naive()
    }

    /// Today in the reporting zone
    pub fn today(&self) -> NaiveDate {
        chrono::Utc::now().with_timezone(&self.tz).date_naive()
    }

    /// Observations falling on `day`, validated
    fn on_day<'o>(
        &self,
        observations: &'o [IntakeObservation],
        day: NaiveDate,
    ) -> EngineResult<Vec<&'o IntakeObservation>> {
        observations
            .iter()
            .filter(|obs| self.day_of(obs) == day)
            .map(|obs| {
                obs.validate().map(|_| obs).map_err(|e| {
                    tracing::warn!("Rejected observation '{}': {}", obs.source_label, e);
                    e
                })
            })
            .collect()
    }

    /// Per-nutrient totals for one day
    pub fn aggregate(
        &self,
        observations: &[IntakeObservation],
        day: NaiveDate,
    ) -> EngineResult<DailyAggregate> {
        let mut aggregate = DailyAggregate::empty(day);
        for observation in self.on_day(observations, day)? {
            aggregate.add(observation);
        }
        Ok(aggregate)
    }

    /// Contribution of each observation on `day` with a positive amount of `nutrient`
    pub fn sources(
        &self,
        observations: &[IntakeObservation],
        day: NaiveDate,
        nutrient: NutrientType,
    ) -> EngineResult<Vec<SourceContribution>> {
        let contributions = self
            .on_day(observations, day)?
            .into_iter()
            .filter_map(|obs| {
                obs.contribution(nutrient)
                    .filter(|amount| *amount > 0.0)
                    .map(|amount| SourceContribution {
                        label: obs.source_label.clone(),
                        amount,
                    })
            })
            .collect();
        Ok(contributions)
    }

    /// One aggregate per day from `start` to `end` inclusive, empty days included
    pub fn aggregate_range(
        &self,
        observations: &[IntakeObservation],
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<DailyAggregate>> {
        let mut by_date: BTreeMap<NaiveDate, DailyAggregate> = start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(|d| (d, DailyAggregate::empty(d)))
            .collect();

        for observation in observations {
            let day = self.day_of(observation);
            if let Some(aggregate) = by_date.get_mut(&day) {
                if let Err(e) = observation.validate() {
                    tracing::warn!("Rejected observation '{}': {}", observation.source_label, e);
                    return Err(e);
                }
                aggregate.add(observation);
            }
        }

        Ok(by_date.into_values().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, Utc};
    use crate::models::NutrientEntry;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    fn obs(ts: &str, servings: u32, entries: &[(NutrientType, f64)], label: &str) -> IntakeObservation {
        IntakeObservation {
            timestamp: at(ts),
            servings_taken: servings,
            nutrients: entries
                .iter()
                .map(|(n, a)| NutrientEntry::new(*n, *a))
                .collect(),
            source_label: label.to_string(),
        }
    }

    fn day(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    fn utc() -> IntakeAggregator<Utc> {
        IntakeAggregator::new(Utc)
    }

    #[test]
    fn test_sums_same_day_and_excludes_other_days() {
        let observations = vec![
            obs("2026-05-04T08:00:00Z", 1, &[(NutrientType::VitaminC, 50.0)], "A"),
            obs("2026-05-04T19:00:00Z", 1, &[(NutrientType::VitaminC, 50.0)], "B"),
            obs("2026-05-05T08:00:00Z", 1, &[(NutrientType::VitaminC, 50.0)], "C"),
        ];
        let aggregate = utc().aggregate(&observations, day("2026-05-04")).unwrap();
        assert!((aggregate.total(NutrientType::VitaminC) - 100.0).abs() < 1e-9);
        assert_eq!(aggregate.observation_count, 2);
    }

    #[test]
    fn test_servings_multiply() {
        let observations = vec![obs(
            "2026-05-04T08:00:00Z",
            3,
            &[(NutrientType::Magnesium, 100.0), (NutrientType::Zinc, 5.0)],
            "Mag+Zinc",
        )];
        let aggregate = utc().aggregate(&observations, day("2026-05-04")).unwrap();
        assert_eq!(aggregate.total(NutrientType::Magnesium), 300.0);
        assert_eq!(aggregate.total(NutrientType::Zinc), 15.0);
    }

    #[test]
    fn test_unrecorded_is_absent_recorded_zero_is_present() {
        let observations = vec![obs(
            "2026-05-04T08:00:00Z",
            1,
            &[(NutrientType::Iron, 0.0)],
            "Zero iron",
        )];
        let aggregate = utc().aggregate(&observations, day("2026-05-04")).unwrap();
        assert_eq!(aggregate.get(NutrientType::Iron), Some(0.0));
        assert_eq!(aggregate.get(NutrientType::Calcium), None);
        assert_eq!(aggregate.total(NutrientType::Calcium), 0.0);
    }

    #[test]
    fn test_calendar_day_uses_reporting_zone() {
        // 23:30 UTC on the 4th is already the 5th in UTC+02:00
        let observations = vec![obs(
            "2026-05-04T23:30:00Z",
            1,
            &[(NutrientType::VitaminD, 20.0)],
            "Late",
        )];
        let berlin = IntakeAggregator::new(FixedOffset::east_opt(2 * 3600).unwrap());

        let on_4th = berlin.aggregate(&observations, day("2026-05-04")).unwrap();
        let on_5th = berlin.aggregate(&observations, day("2026-05-05")).unwrap();
        assert_eq!(on_4th.observation_count, 0);
        assert_eq!(on_5th.total(NutrientType::VitaminD), 20.0);

        let utc_4th = utc().aggregate(&observations, day("2026-05-04")).unwrap();
        assert_eq!(utc_4th.observation_count, 1);
    }

    #[test]
    fn test_rejects_invalid_observation_on_day() {
        let observations = vec![obs("2026-05-04T08:00:00Z", 0, &[(NutrientType::Iron, 5.0)], "Bad")];
        let result = utc().aggregate(&observations, day("2026-05-04"));
        assert!(matches!(result, Err(EngineError::InvalidServings(0))));
    }

    #[test]
    fn test_sources_rejects_invalid_observation_on_day() {
        let observations = vec![
            obs("2026-05-04T08:00:00Z", 1, &[(NutrientType::Iron, 5.0)], "Good"),
            obs("2026-05-04T09:00:00Z", 0, &[(NutrientType::Iron, 5.0)], "Bad"),
        ];
        let result = utc().sources(&observations, day("2026-05-04"), NutrientType::Iron);
        assert!(matches!(result, Err(EngineError::InvalidServings(0))));
    }

    #[test]
    fn test_aggregate_range_rejects_invalid_observation_in_window() {
        let observations = vec![
            obs("2026-05-03T08:00:00Z", 1, &[(NutrientType::Iron, 5.0)], "Good"),
            obs("2026-05-04T08:00:00Z", 0, &[(NutrientType::Iron, 5.0)], "Bad"),
        ];
        let result = utc().aggregate_range(&observations, day("2026-05-03"), day("2026-05-05"));
        assert!(matches!(result, Err(EngineError::InvalidServings(0))));
    }

    #[test]
    fn test_aggregate_range_ignores_invalid_observation_outside_window() {
        let observations = vec![
            obs("2026-05-01T08:00:00Z", 0, &[(NutrientType::Iron, 5.0)], "Bad"),
            obs("2026-05-04T08:00:00Z", 1, &[(NutrientType::Iron, 5.0)], "Good"),
        ];
        let aggregates = utc()
            .aggregate_range(&observations, day("2026-05-03"), day("2026-05-05"))
            .unwrap();
        assert_eq!(aggregates.len(), 3);
        assert_eq!(aggregates[1].get(NutrientType::Iron), Some(5.0));
        assert_eq!(aggregates.iter().map(|a| a.observation_count).sum::<usize>(), 1);
    }

    #[test]
    fn test_sources_preserve_order_and_skip_zero() {
        let observations = vec![
            obs("2026-05-04T07:00:00Z", 2, &[(NutrientType::VitaminC, 100.0)], "Multi"),
            obs("2026-05-04T08:00:00Z", 1, &[(NutrientType::VitaminC, 0.0)], "Empty C"),
            obs("2026-05-04T09:00:00Z", 1, &[(NutrientType::Zinc, 10.0)], "Zinc"),
            obs("2026-05-04T12:00:00Z", 1, &[(NutrientType::VitaminC, 250.0)], "Orange"),
            obs("2026-05-05T12:00:00Z", 1, &[(NutrientType::VitaminC, 250.0)], "Tomorrow"),
        ];
        let sources = utc()
            .sources(&observations, day("2026-05-04"), NutrientType::VitaminC)
            .unwrap();
        assert_eq!(
            sources,
            vec![
                SourceContribution { label: "Multi".to_string(), amount: 200.0 },
                SourceContribution { label: "Orange".to_string(), amount: 250.0 },
            ]
        );
    }

    #[test]
    fn test_aggregate_range_includes_empty_days() {
        let observations = vec![
            obs("2026-05-01T08:00:00Z", 1, &[(NutrientType::Iron, 10.0)], "A"),
            obs("2026-05-03T08:00:00Z", 1, &[(NutrientType::Iron, 20.0)], "B"),
            obs("2026-05-09T08:00:00Z", 1, &[(NutrientType::Iron, 99.0)], "Out of range"),
        ];
        let aggregates = utc()
            .aggregate_range(&observations, day("2026-05-01"), day("2026-05-04"))
            .unwrap();
        let dates: Vec<NaiveDate> = aggregates.iter().map(|a| a.date).collect();
        assert_eq!(
            dates,
            vec![day("2026-05-01"), day("2026-05-02"), day("2026-05-03"), day("2026-05-04")]
        );
        let totals: Vec<f64> = aggregates.iter().map(|a| a.total(NutrientType::Iron)).collect();
        assert_eq!(totals, vec![10.0, 0.0, 20.0, 0.0]);
    }

    #[test]
    fn test_aggregate_range_reversed_is_empty() {
        let aggregates = utc()
            .aggregate_range(&[], day("2026-05-04"), day("2026-05-01"))
            .unwrap();
        assert!(aggregates.is_empty());
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("2026-01-09").unwrap(), NaiveDate::from_ymd_opt(2026, 1, 9).unwrap());
        assert!(matches!(parse_day("09/01/2026"), Err(EngineError::InvalidDate(_))));
        assert!(parse_day("2026-02-30").is_err());
    }
}
