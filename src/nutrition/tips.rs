//! Health tips
//!
//! Advisories derived from one day's classified intake. Warnings for
//! excessive nutrients always come before suggestions for insufficient ones;
//! within each group nutrients appear in enumeration order.

use serde::{Deserialize, Serialize};

use crate::models::{DemographicProfile, NutrientType, SpecialCondition};

use super::aggregator::DailyAggregate;
use super::resolver::RecommendationResolver;
use super::status::{classify, NutrientStatus};

/// Kind of advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    Warning,
    Suggestion,
}

/// A single advisory about one nutrient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthTip {
    pub kind: TipKind,
    pub nutrient: NutrientType,
    pub title: String,
    pub message: String,
}

impl HealthTip {
    /// Build the templated tip for a kind and nutrient
    pub fn new(kind: TipKind, nutrient: NutrientType) -> Self {
        let name = nutrient.display_name();
        let (title, message) = match kind {
            TipKind::Warning => (
                format!("High {} intake", name),
                format!(
                    "Your {} intake is above the tolerable upper limit. \
                     Consider reducing supplements that contain {}.",
                    name, name
                ),
            ),
            TipKind::Suggestion => (
                format!("Low {} intake", name),
                format!(
                    "Your {} intake is below the recommendation. Good sources include {}.",
                    name,
                    nutrient.food_sources()
                ),
            ),
        };

        Self {
            kind,
            nutrient,
            title,
            message,
        }
    }
}

/// Tips for every recorded nutrient that is excessive or insufficient
///
/// Nutrients with a zero or missing total produce no tip.
pub fn generate_tips(
    aggregate: &DailyAggregate,
    profile: DemographicProfile,
    condition: SpecialCondition,
    resolver: &RecommendationResolver<'_>,
) -> Vec<HealthTip> {
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    for (&nutrient, &amount) in &aggregate.totals {
        if amount <= 0.0 {
            continue;
        }
        let recommendation = resolver.resolve(nutrient, profile, condition);
        match classify(amount, &recommendation) {
            NutrientStatus::Excessive => warnings.push(HealthTip::new(TipKind::Warning, nutrient)),
            NutrientStatus::Insufficient => {
                suggestions.push(HealthTip::new(TipKind::Suggestion, nutrient))
            }
            NutrientStatus::Normal | NutrientStatus::None => {}
        }
    }

    warnings.extend(suggestions);
    warnings
}
