//! Daily recommendation model

use serde::{Deserialize, Serialize};

use super::{DemographicProfile, NutrientType};

/// Recommended daily amount of one nutrient for one profile
///
/// `recommended_amount` is always positive for table-sourced values.
/// `upper_limit` is `None` when no tolerable upper intake level exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecommendation {
    pub nutrient: NutrientType,
    pub recommended_amount: f64,
    pub upper_limit: Option<f64>,
    pub profile: DemographicProfile,
}

impl DailyRecommendation {
    pub fn new(
        nutrient: NutrientType,
        recommended_amount: f64,
        upper_limit: Option<f64>,
        profile: DemographicProfile,
    ) -> Self {
        Self {
            nutrient,
            recommended_amount,
            upper_limit,
            profile,
        }
    }

    /// Human-readable amount with unit, e.g. "450 µg"
    pub fn formatted_amount(&self) -> String {
        format_amount(self.recommended_amount, self.nutrient)
    }

    pub fn formatted_upper_limit(&self) -> Option<String> {
        self.upper_limit.map(|ul| format_amount(ul, self.nutrient))
    }
}

/// Format an amount in the nutrient's unit, dropping a trailing ".0"
pub fn format_amount(amount: f64, nutrient: NutrientType) -> String {
    let symbol = nutrient.unit().symbol();
    if amount.fract() == 0.0 {
        format!("{:.0} {}", amount, symbol)
    } else {
        format!("{:.1} {}", amount, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_amount() {
        let rec = DailyRecommendation::new(
            NutrientType::Folate,
            450.0,
            Some(1000.0),
            DemographicProfile::AdultFemale,
        );
        assert_eq!(rec.formatted_amount(), "450 µg");
        assert_eq!(rec.formatted_upper_limit().as_deref(), Some("1000 µg"));
    }

    #[test]
    fn test_formatted_fractional_amount() {
        let rec = DailyRecommendation::new(
            NutrientType::VitaminB1,
            1.2,
            None,
            DemographicProfile::AdultMale,
        );
        assert_eq!(rec.formatted_amount(), "1.2 mg");
        assert_eq!(rec.formatted_upper_limit(), None);
    }
}
