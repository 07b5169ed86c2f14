//! Amount unit conversion
//!
//! Supplement labels state amounts in g, mg, µg or international units.
//! Everything is converted to the nutrient's canonical unit before it
//! becomes a `NutrientEntry`.

use crate::error::{EngineError, EngineResult};
use crate::models::{NutrientEntry, NutrientType, NutrientUnit};

// ============================================================================
// Mass Conversion Constants (to milligrams)
// ============================================================================

/// Milligrams per gram
pub const MG_PER_G: f64 = 1000.0;
/// Milligrams per microgram
pub const MG_PER_UG: f64 = 0.001;

// ============================================================================
// International Unit Conversion Constants
// ============================================================================

/// Micrograms of vitamin D (cholecalciferol) per IU
pub const UG_VITAMIN_D_PER_IU: f64 = 0.025;
/// Micrograms of retinol activity equivalent per IU of vitamin A
pub const UG_VITAMIN_A_PER_IU: f64 = 0.3;
/// Milligrams of alpha-tocopherol per IU of natural vitamin E
pub const MG_VITAMIN_E_PER_IU: f64 = 0.67;

/// Milligrams per one of the given mass unit
pub fn mg_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "g" | "gram" | "grams" => Some(MG_PER_G),
        "mg" | "milligram" | "milligrams" => Some(1.0),
        "µg" | "μg" | "ug" | "mcg" | "microgram" | "micrograms" => Some(MG_PER_UG),
        _ => None,
    }
}

/// Milligrams per IU, for the nutrients that are labelled in IU
fn mg_per_iu(nutrient: NutrientType) -> Option<f64> {
    match nutrient {
        NutrientType::VitaminD => Some(UG_VITAMIN_D_PER_IU * MG_PER_UG),
        NutrientType::VitaminA => Some(UG_VITAMIN_A_PER_IU * MG_PER_UG),
        NutrientType::VitaminE => Some(MG_VITAMIN_E_PER_IU),
        _ => None,
    }
}

fn is_iu(unit: &str) -> bool {
    matches!(
        unit.trim().to_lowercase().as_str(),
        "iu" | "ie" | "international unit" | "international units"
    )
}

/// Convert an amount in `unit` to the canonical unit of `nutrient`
pub fn to_canonical(amount: f64, unit: &str, nutrient: NutrientType) -> EngineResult<f64> {
    let mg = if is_iu(unit) {
        mg_per_iu(nutrient).map(|factor| amount * factor)
    } else {
        mg_per_unit(unit).map(|factor| amount * factor)
    }
    .ok_or_else(|| EngineError::UnknownUnit {
        nutrient,
        unit: unit.to_string(),
    })?;

    Ok(match nutrient.unit() {
        NutrientUnit::Milligram => mg,
        NutrientUnit::Microgram => mg / MG_PER_UG,
    })
}

/// Build a validated entry from a labelled amount
pub fn entry_from_label(nutrient: NutrientType, amount: f64, unit: &str) -> EngineResult<NutrientEntry> {
    let entry = NutrientEntry::new(nutrient, to_canonical(amount, unit, nutrient)?);
    entry.validate()?;
    Ok(entry)
}
