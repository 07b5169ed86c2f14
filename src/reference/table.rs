//! Reference table
//!
//! Read-only store of recommended amounts and upper limits, keyed by
//! nutrient and demographic bucket, plus pregnancy/breastfeeding overrides.
//! The table is total: every nutrient has a value for every bucket.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AgeBracket, DailyRecommendation, DemographicProfile, NutrientType, SpecialCondition};

use super::dge::{DGE_ROWS, DGE_SPECIAL_ROWS};

/// Recommended amount and optional upper limit for one table cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceValue {
    pub recommended: f64,
    pub upper_limit: Option<f64>,
}

impl ReferenceValue {
    /// Reject values the classifier cannot divide by or compare against
    ///
    /// An upper limit below the recommended amount is accepted; the DGE
    /// magnesium entry has one.
    pub fn validate(&self, nutrient: NutrientType) -> EngineResult<()> {
        if !self.recommended.is_finite() || self.recommended <= 0.0 {
            return Err(EngineError::InvalidReference {
                nutrient,
                reason: format!(
                    "recommended amount must be greater than 0 (got {})",
                    self.recommended
                ),
            });
        }
        if let Some(limit) = self.upper_limit {
            if !limit.is_finite() || limit < 0.0 {
                return Err(EngineError::InvalidReference {
                    nutrient,
                    reason: format!("upper limit must be non-negative (got {})", limit),
                });
            }
        }
        Ok(())
    }
}

/// Baseline values of one nutrient for every demographic bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientReference {
    pub nutrient: NutrientType,
    pub male: ReferenceValue,
    pub female: ReferenceValue,
    /// Indexed by `AgeBracket::index`
    pub children: [ReferenceValue; 6],
}

/// Pregnancy and breastfeeding values of one nutrient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialReference {
    pub nutrient: NutrientType,
    pub pregnant: ReferenceValue,
    pub breastfeeding: ReferenceValue,
}

/// Table column a profile reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceBucket {
    AdultMale,
    AdultFemale,
    Child(AgeBracket),
}

impl ReferenceBucket {
    pub fn for_profile(profile: DemographicProfile) -> Self {
        match profile {
            DemographicProfile::AdultMale => ReferenceBucket::AdultMale,
            DemographicProfile::AdultFemale => ReferenceBucket::AdultFemale,
            DemographicProfile::Child { age } => ReferenceBucket::Child(AgeBracket::for_age(age)),
        }
    }
}

/// Single override a special condition maps onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOverride {
    Pregnancy,
    Breastfeeding,
}

/// Nutrient reference values
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    /// Indexed by `NutrientType::index`
    baseline: [NutrientReference; 23],
    special: HashMap<(NutrientType, ConditionOverride), ReferenceValue>,
}

impl ReferenceTable {
    /// Build the table from the compiled-in DGE values
    pub fn dge() -> Self {
        let mut special = HashMap::new();
        for row in DGE_SPECIAL_ROWS {
            special.insert((row.nutrient, ConditionOverride::Pregnancy), row.pregnant);
            special.insert((row.nutrient, ConditionOverride::Breastfeeding), row.breastfeeding);
        }

        Self {
            baseline: DGE_ROWS,
            special,
        }
    }

    /// Raw cell for a nutrient and bucket
    pub fn value(&self, nutrient: NutrientType, bucket: ReferenceBucket) -> ReferenceValue {
        let row = &self.baseline[nutrient.index()];
        match bucket {
            ReferenceBucket::AdultMale => row.male,
            ReferenceBucket::AdultFemale => row.female,
            ReferenceBucket::Child(bracket) => row.children[bracket.index()],
        }
    }

    /// Baseline recommendation for a profile; child ages are clamped to a bracket
    pub fn lookup(&self, nutrient: NutrientType, profile: DemographicProfile) -> DailyRecommendation {
        let value = self.value(nutrient, ReferenceBucket::for_profile(profile));
        DailyRecommendation::new(nutrient, value.recommended, value.upper_limit, profile)
    }

    /// Pregnancy or breastfeeding override, if one is defined
    ///
    /// Returns `None` for `SpecialCondition::None` and for
    /// `PregnantAndBreastfeeding`; callers combine the two single overrides
    /// themselves.
    pub fn lookup_special_condition(
        &self,
        nutrient: NutrientType,
        condition: SpecialCondition,
    ) -> Option<DailyRecommendation> {
        let kind = match condition {
            SpecialCondition::Pregnant => ConditionOverride::Pregnancy,
            SpecialCondition::Breastfeeding => ConditionOverride::Breastfeeding,
            SpecialCondition::None | SpecialCondition::PregnantAndBreastfeeding => return None,
        };

        self.special.get(&(nutrient, kind)).map(|value| {
            DailyRecommendation::new(
                nutrient,
                value.recommended,
                value.upper_limit,
                DemographicProfile::AdultFemale,
            )
        })
    }

    /// Nutrients with at least one special-condition override
    pub fn special_condition_nutrients(&self) -> Vec<NutrientType> {
        NutrientType::ALL
            .into_iter()
            .filter(|n| {
                self.special.contains_key(&(*n, ConditionOverride::Pregnancy))
                    || self.special.contains_key(&(*n, ConditionOverride::Breastfeeding))
            })
            .collect()
    }

    /// Replace one baseline cell
    pub fn set_baseline(
        &mut self,
        nutrient: NutrientType,
        bucket: ReferenceBucket,
        value: ReferenceValue,
    ) -> EngineResult<()> {
        value.validate(nutrient)?;

        let row = &mut self.baseline[nutrient.index()];
        match bucket {
            ReferenceBucket::AdultMale => row.male = value,
            ReferenceBucket::AdultFemale => row.female = value,
            ReferenceBucket::Child(bracket) => row.children[bracket.index()] = value,
        }
        Ok(())
    }

    /// Add or replace a special-condition override
    pub fn set_special(
        &mut self,
        nutrient: NutrientType,
        kind: ConditionOverride,
        value: ReferenceValue,
    ) -> EngineResult<()> {
        value.validate(nutrient)?;
        self.special.insert((nutrient, kind), value);
        Ok(())
    }

    /// Remove a special-condition override, returning the old value
    pub fn remove_special(
        &mut self,
        nutrient: NutrientType,
        kind: ConditionOverride,
    ) -> Option<ReferenceValue> {
        self.special.remove(&(nutrient, kind))
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::dge()
    }
}
