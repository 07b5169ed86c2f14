//! Nutrient model
//!
//! The closed set of tracked vitamins and minerals, their canonical units,
//! and per-serving nutrient entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Measurement unit a nutrient is always expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientUnit {
    Milligram,
    Microgram,
}

impl NutrientUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            NutrientUnit::Milligram => "mg",
            NutrientUnit::Microgram => "µg",
        }
    }
}

/// Vitamin or mineral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientCategory {
    Vitamin,
    Mineral,
}

/// Tracked nutrient
///
/// Declaration order is the natural enumeration order; `Ord` follows it so
/// that maps keyed by nutrient iterate in a stable, human-friendly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientType {
    // Vitamins
    VitaminA,
    VitaminD,
    VitaminE,
    VitaminK,
    VitaminC,
    VitaminB1,
    VitaminB2,
    VitaminB3,
    VitaminB5,
    VitaminB6,
    Biotin,
    Folate,
    VitaminB12,
    // Minerals
    Calcium,
    Magnesium,
    Iron,
    Zinc,
    Iodine,
    Selenium,
    Copper,
    Manganese,
    Chromium,
    Potassium,
}

impl NutrientType {
    /// Every nutrient, in enumeration order
    pub const ALL: [NutrientType; 23] = [
        NutrientType::VitaminA,
        NutrientType::VitaminD,
        NutrientType::VitaminE,
        NutrientType::VitaminK,
        NutrientType::VitaminC,
        NutrientType::VitaminB1,
        NutrientType::VitaminB2,
        NutrientType::VitaminB3,
        NutrientType::VitaminB5,
        NutrientType::VitaminB6,
        NutrientType::Biotin,
        NutrientType::Folate,
        NutrientType::VitaminB12,
        NutrientType::Calcium,
        NutrientType::Magnesium,
        NutrientType::Iron,
        NutrientType::Zinc,
        NutrientType::Iodine,
        NutrientType::Selenium,
        NutrientType::Copper,
        NutrientType::Manganese,
        NutrientType::Chromium,
        NutrientType::Potassium,
    ];

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientType::VitaminA => "vitamin_a",
            NutrientType::VitaminD => "vitamin_d",
            NutrientType::VitaminE => "vitamin_e",
            NutrientType::VitaminK => "vitamin_k",
            NutrientType::VitaminC => "vitamin_c",
            NutrientType::VitaminB1 => "vitamin_b1",
            NutrientType::VitaminB2 => "vitamin_b2",
            NutrientType::VitaminB3 => "vitamin_b3",
            NutrientType::VitaminB5 => "vitamin_b5",
            NutrientType::VitaminB6 => "vitamin_b6",
            NutrientType::Biotin => "biotin",
            NutrientType::Folate => "folate",
            NutrientType::VitaminB12 => "vitamin_b12",
            NutrientType::Calcium => "calcium",
            NutrientType::Magnesium => "magnesium",
            NutrientType::Iron => "iron",
            NutrientType::Zinc => "zinc",
            NutrientType::Iodine => "iodine",
            NutrientType::Selenium => "selenium",
            NutrientType::Copper => "copper",
            NutrientType::Manganese => "manganese",
            NutrientType::Chromium => "chromium",
            NutrientType::Potassium => "potassium",
        }
    }

    /// Parse a nutrient identifier, accepting a few common aliases
    pub fn from_str(s: &str) -> EngineResult<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        let nutrient = match normalized.as_str() {
            "vitamin_a" | "retinol" => NutrientType::VitaminA,
            "vitamin_d" => NutrientType::VitaminD,
            "vitamin_e" => NutrientType::VitaminE,
            "vitamin_k" => NutrientType::VitaminK,
            "vitamin_c" | "ascorbic_acid" => NutrientType::VitaminC,
            "vitamin_b1" | "thiamine" | "thiamin" => NutrientType::VitaminB1,
            "vitamin_b2" | "riboflavin" => NutrientType::VitaminB2,
            "vitamin_b3" | "niacin" => NutrientType::VitaminB3,
            "vitamin_b5" | "pantothenic_acid" => NutrientType::VitaminB5,
            "vitamin_b6" | "pyridoxine" => NutrientType::VitaminB6,
            "biotin" | "vitamin_b7" => NutrientType::Biotin,
            "folate" | "folic_acid" | "vitamin_b9" => NutrientType::Folate,
            "vitamin_b12" | "cobalamin" => NutrientType::VitaminB12,
            "calcium" => NutrientType::Calcium,
            "magnesium" => NutrientType::Magnesium,
            "iron" => NutrientType::Iron,
            "zinc" => NutrientType::Zinc,
            "iodine" => NutrientType::Iodine,
            "selenium" => NutrientType::Selenium,
            "copper" => NutrientType::Copper,
            "manganese" => NutrientType::Manganese,
            "chromium" => NutrientType::Chromium,
            "potassium" => NutrientType::Potassium,
            _ => return Err(EngineError::UnknownNutrient(s.to_string())),
        };
        Ok(nutrient)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NutrientType::VitaminA => "Vitamin A",
            NutrientType::VitaminD => "Vitamin D",
            NutrientType::VitaminE => "Vitamin E",
            NutrientType::VitaminK => "Vitamin K",
            NutrientType::VitaminC => "Vitamin C",
            NutrientType::VitaminB1 => "Vitamin B1 (Thiamine)",
            NutrientType::VitaminB2 => "Vitamin B2 (Riboflavin)",
            NutrientType::VitaminB3 => "Vitamin B3 (Niacin)",
            NutrientType::VitaminB5 => "Vitamin B5 (Pantothenic Acid)",
            NutrientType::VitaminB6 => "Vitamin B6",
            NutrientType::Biotin => "Biotin",
            NutrientType::Folate => "Folate",
            NutrientType::VitaminB12 => "Vitamin B12",
            NutrientType::Calcium => "Calcium",
            NutrientType::Magnesium => "Magnesium",
            NutrientType::Iron => "Iron",
            NutrientType::Zinc => "Zinc",
            NutrientType::Iodine => "Iodine",
            NutrientType::Selenium => "Selenium",
            NutrientType::Copper => "Copper",
            NutrientType::Manganese => "Manganese",
            NutrientType::Chromium => "Chromium",
            NutrientType::Potassium => "Potassium",
        }
    }

    /// Canonical unit for amounts of this nutrient
    pub fn unit(&self) -> NutrientUnit {
        match self {
            NutrientType::VitaminA
            | NutrientType::VitaminD
            | NutrientType::VitaminK
            | NutrientType::Biotin
            | NutrientType::Folate
            | NutrientType::VitaminB12
            | NutrientType::Iodine
            | NutrientType::Selenium
            | NutrientType::Chromium => NutrientUnit::Microgram,
            _ => NutrientUnit::Milligram,
        }
    }

    pub fn category(&self) -> NutrientCategory {
        if *self < NutrientType::Calcium {
            NutrientCategory::Vitamin
        } else {
            NutrientCategory::Mineral
        }
    }

    /// Typical dietary sources, used when suggesting how to close a gap
    pub fn food_sources(&self) -> &'static str {
        match self {
            NutrientType::VitaminA => "carrots, sweet potatoes, spinach and liver",
            NutrientType::VitaminD => "fatty fish, egg yolks and sunlight exposure",
            NutrientType::VitaminE => "nuts, seeds and vegetable oils",
            NutrientType::VitaminK => "leafy greens, broccoli and fermented foods",
            NutrientType::VitaminC => "citrus fruits, bell peppers and berries",
            NutrientType::VitaminB1 => "whole grains, legumes and pork",
            NutrientType::VitaminB2 => "dairy products, eggs and almonds",
            NutrientType::VitaminB3 => "poultry, fish and peanuts",
            NutrientType::VitaminB5 => "avocados, mushrooms and whole grains",
            NutrientType::VitaminB6 => "poultry, bananas and chickpeas",
            NutrientType::Biotin => "eggs, nuts and oats",
            NutrientType::Folate => "leafy greens, legumes and fortified cereals",
            NutrientType::VitaminB12 => "meat, fish, dairy products or fortified foods",
            NutrientType::Calcium => "dairy products, fortified plant milks and kale",
            NutrientType::Magnesium => "nuts, seeds, whole grains and dark chocolate",
            NutrientType::Iron => "red meat, lentils and spinach with vitamin C",
            NutrientType::Zinc => "meat, shellfish, legumes and seeds",
            NutrientType::Iodine => "iodized salt, seafood and dairy products",
            NutrientType::Selenium => "brazil nuts, fish and eggs",
            NutrientType::Copper => "shellfish, nuts and whole grains",
            NutrientType::Manganese => "whole grains, tea and legumes",
            NutrientType::Chromium => "broccoli, whole grains and meat",
            NutrientType::Potassium => "bananas, potatoes, beans and leafy greens",
        }
    }
}

impl fmt::Display for NutrientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One nutrient contained in a serving, in the nutrient's canonical unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientEntry {
    #[serde(rename = "type")]
    pub nutrient: NutrientType,
    pub amount_per_serving: f64,
}

impl NutrientEntry {
    pub fn new(nutrient: NutrientType, amount_per_serving: f64) -> Self {
        Self { nutrient, amount_per_serving }
    }

    /// Reject negative or non-finite amounts
    pub fn validate(&self) -> EngineResult<()> {
        if !self.amount_per_serving.is_finite() || self.amount_per_serving < 0.0 {
            return Err(EngineError::InvalidAmount {
                nutrient: self.nutrient,
                amount: self.amount_per_serving,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirteen_vitamins_ten_minerals() {
        let vitamins = NutrientType::ALL
            .iter()
            .filter(|n| n.category() == NutrientCategory::Vitamin)
            .count();
        let minerals = NutrientType::ALL
            .iter()
            .filter(|n| n.category() == NutrientCategory::Mineral)
            .count();
        assert_eq!(vitamins, 13);
        assert_eq!(minerals, 10);
    }

    #[test]
    fn test_all_is_sorted_in_enumeration_order() {
        let mut sorted = NutrientType::ALL;
        sorted.sort();
        assert_eq!(sorted, NutrientType::ALL);
    }

    #[test]
    fn test_from_str_round_trips_identifiers() {
        for nutrient in NutrientType::ALL {
            assert_eq!(NutrientType::from_str(nutrient.as_str()).unwrap(), nutrient);
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(NutrientType::from_str("Folic Acid").unwrap(), NutrientType::Folate);
        assert_eq!(NutrientType::from_str("vitamin-c").unwrap(), NutrientType::VitaminC);
        assert_eq!(NutrientType::from_str("thiamine").unwrap(), NutrientType::VitaminB1);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = NutrientType::from_str("vitamin_z").unwrap_err();
        assert!(matches!(err, EngineError::UnknownNutrient(ref s) if s == "vitamin_z"));
    }

    #[test]
    fn test_units() {
        assert_eq!(NutrientType::VitaminC.unit(), NutrientUnit::Milligram);
        assert_eq!(NutrientType::Folate.unit(), NutrientUnit::Microgram);
        assert_eq!(NutrientType::Iodine.unit().symbol(), "µg");
        assert_eq!(NutrientType::Iron.unit().symbol(), "mg");
    }

    #[test]
    fn test_entry_validation() {
        assert!(NutrientEntry::new(NutrientType::Zinc, 0.0).validate().is_ok());
        assert!(NutrientEntry::new(NutrientType::Zinc, -1.0).validate().is_err());
        assert!(NutrientEntry::new(NutrientType::Zinc, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_entry_serializes_type_key() {
        let entry = NutrientEntry::new(NutrientType::VitaminD, 20.0);
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["type"], "vitamin_d");
        assert_eq!(json["amount_per_serving"], 20.0);
    }
}
