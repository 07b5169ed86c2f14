//! Intake status classification
//!
//! Compares an aggregated amount with a recommendation.

use serde::{Deserialize, Serialize};

use crate::models::{DailyRecommendation, NutrientType};

/// Share of the recommendation below which intake counts as insufficient
pub const INSUFFICIENT_BELOW_PERCENT: f64 = 80.0;

/// Classification of a day's intake of one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientStatus {
    None,
    Insufficient,
    Normal,
    Excessive,
}

impl NutrientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientStatus::None => "none",
            NutrientStatus::Insufficient => "insufficient",
            NutrientStatus::Normal => "normal",
            NutrientStatus::Excessive => "excessive",
        }
    }
}

/// Amount as a percentage of the recommendation, uncapped
pub fn percentage(amount: f64, recommended_amount: f64) -> f64 {
    (amount / recommended_amount) * 100.0
}

/// Classify an amount against a recommendation
///
/// An upper-limit breach wins over the insufficiency check, even when the
/// amount is also below the recommended amount.
pub fn classify(amount: f64, recommendation: &DailyRecommendation) -> NutrientStatus {
    if amount == 0.0 {
        return NutrientStatus::None;
    }

    if let Some(limit) = recommendation.upper_limit {
        if amount > limit {
            return NutrientStatus::Excessive;
        }
    }

    if percentage(amount, recommendation.recommended_amount) < INSUFFICIENT_BELOW_PERCENT {
        NutrientStatus::Insufficient
    } else {
        NutrientStatus::Normal
    }
}

/// One nutrient's intake measured against its recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientProgress {
    pub nutrient: NutrientType,
    pub amount: f64,
    pub recommendation: DailyRecommendation,
    /// Raw percentage of the recommendation
    pub percentage: f64,
    /// Percentage clamped to 0..=100 for progress bars
    pub display_percentage: f64,
    pub status: NutrientStatus,
}

impl NutrientProgress {
    pub fn new(amount: f64, recommendation: DailyRecommendation) -> Self {
        let pct = percentage(amount, recommendation.recommended_amount);
        Self {
            nutrient: recommendation.nutrient,
            amount,
            recommendation,
            percentage: pct,
            display_percentage: pct.clamp(0.0, 100.0),
            status: classify(amount, &recommendation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DemographicProfile;
    use crate::reference::ReferenceTable;

    fn rec(recommended: f64, upper_limit: Option<f64>) -> DailyRecommendation {
        DailyRecommendation::new(
            NutrientType::VitaminC,
            recommended,
            upper_limit,
            DemographicProfile::AdultMale,
        )
    }

    #[test]
    fn test_thresholds() {
        let r = rec(100.0, Some(200.0));
        assert_eq!(classify(0.0, &r), NutrientStatus::None);
        assert_eq!(classify(79.0, &r), NutrientStatus::Insufficient);
        assert_eq!(classify(80.0, &r), NutrientStatus::Normal);
        assert_eq!(classify(200.0, &r), NutrientStatus::Normal);
        assert_eq!(classify(201.0, &r), NutrientStatus::Excessive);
    }

    #[test]
    fn test_no_upper_limit_never_excessive() {
        let r = rec(100.0, None);
        assert_eq!(classify(1_000_000.0, &r), NutrientStatus::Normal);
    }

    #[test]
    fn test_upper_limit_breach_beats_insufficiency() {
        let r = rec(100.0, Some(50.0));
        assert_eq!(classify(60.0, &r), NutrientStatus::Excessive);
    }

    #[test]
    fn test_adult_magnesium_as_tabulated() {
        // UL 250 mg sits below the 300 mg recommendation for women: under
        // 240 mg is insufficient, 240-250 mg normal, above 250 mg excessive.
        // Reaching the full recommendation is therefore classified excessive.
        let table = ReferenceTable::dge();
        let r = table.lookup(NutrientType::Magnesium, DemographicProfile::AdultFemale);
        assert_eq!(classify(200.0, &r), NutrientStatus::Insufficient);
        assert_eq!(classify(245.0, &r), NutrientStatus::Normal);
        assert_eq!(classify(300.0, &r), NutrientStatus::Excessive);
    }

    #[test]
    fn test_percentage_is_uncapped() {
        assert!((percentage(250.0, 100.0) - 250.0).abs() < 1e-9);
        assert!((percentage(400.0, 450.0) - 88.888_888).abs() < 1e-3);
    }

    #[test]
    fn test_progress_clamps_display_only() {
        let progress = NutrientProgress::new(250.0, rec(100.0, Some(2000.0)));
        assert!((progress.percentage - 250.0).abs() < 1e-9);
        assert_eq!(progress.display_percentage, 100.0);
        assert_eq!(progress.status, NutrientStatus::Normal);
        assert_eq!(progress.nutrient, NutrientType::VitaminC);
    }
}
