//! Recommendation resolver
//!
//! Single entry point for "how much of this nutrient should this person get".
//! Special conditions are tried first and silently fall back to the baseline
//! profile value when no override exists.

use crate::models::{DailyRecommendation, DemographicProfile, NutrientType, SpecialCondition};
use crate::reference::ReferenceTable;

/// Resolves recommendations against a reference table
#[derive(Debug, Clone, Copy)]
pub struct RecommendationResolver<'a> {
    table: &'a ReferenceTable,
}

impl<'a> RecommendationResolver<'a> {
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a ReferenceTable {
        self.table
    }

    /// Recommendation for one nutrient
    pub fn resolve(
        &self,
        nutrient: NutrientType,
        profile: DemographicProfile,
        condition: SpecialCondition,
    ) -> DailyRecommendation {
        if condition != SpecialCondition::None {
            if profile == DemographicProfile::AdultFemale {
                if let Some(rec) = self.resolve_special(nutrient, condition) {
                    return rec;
                }
                tracing::debug!(
                    "No {} override for {}, using baseline",
                    condition.as_str(),
                    nutrient.as_str()
                );
            } else {
                tracing::debug!(
                    "Ignoring {} for {}: only applies to adult women",
                    condition.as_str(),
                    profile.display_name()
                );
            }
        }

        self.table.lookup(nutrient, profile)
    }

    /// Override for an adult woman's condition; the larger of the two when both apply
    fn resolve_special(
        &self,
        nutrient: NutrientType,
        condition: SpecialCondition,
    ) -> Option<DailyRecommendation> {
        match condition {
            SpecialCondition::None => None,
            SpecialCondition::Pregnant | SpecialCondition::Breastfeeding => {
                self.table.lookup_special_condition(nutrient, condition)
            }
            SpecialCondition::PregnantAndBreastfeeding => {
                let pregnant = self
                    .table
                    .lookup_special_condition(nutrient, SpecialCondition::Pregnant);
                let breastfeeding = self
                    .table
                    .lookup_special_condition(nutrient, SpecialCondition::Breastfeeding);

                match (pregnant, breastfeeding) {
                    // ties go to the pregnancy value
                    (Some(p), Some(b)) => Some(if b.recommended_amount > p.recommended_amount {
                        b
                    } else {
                        p
                    }),
                    (Some(p), None) => Some(p),
                    (None, Some(b)) => Some(b),
                    (None, None) => None,
                }
            }
        }
    }

    /// Recommendations for every nutrient, in enumeration order
    pub fn all_recommendations(
        &self,
        profile: DemographicProfile,
        condition: SpecialCondition,
    ) -> Vec<DailyRecommendation> {
        NutrientType::ALL
            .into_iter()
            .map(|nutrient| self.resolve(nutrient, profile, condition))
            .collect()
    }
}
