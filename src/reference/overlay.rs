//! Reference overlays
//!
//! JSON documents that replace individual cells of the DGE table. The table
//! stays total because an overlay can only replace cells, never remove them.
//!
//! ```json
//! {
//!   "baseline": [
//!     { "nutrient": "vitamin_d", "bucket": "adult_male", "recommended": 25.0, "upper_limit": 100.0 },
//!     { "nutrient": "zinc", "bucket": { "child": "toddler" }, "recommended": 3.5, "upper_limit": 7.0 }
//!   ],
//!   "special": [
//!     { "nutrient": "iron", "condition": "pregnancy", "recommended": 27.0, "upper_limit": 45.0 }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::NutrientType;

use super::table::{ConditionOverride, ReferenceBucket, ReferenceTable, ReferenceValue};

/// Replacement for one baseline cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineOverlay {
    pub nutrient: NutrientType,
    pub bucket: ReferenceBucket,
    pub recommended: f64,
    #[serde(default)]
    pub upper_limit: Option<f64>,
}

/// Replacement or addition of one special-condition value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialOverlay {
    pub nutrient: NutrientType,
    pub condition: ConditionOverride,
    pub recommended: f64,
    #[serde(default)]
    pub upper_limit: Option<f64>,
}

/// A set of cell replacements applied on top of a table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceOverlay {
    #[serde(default)]
    pub baseline: Vec<BaselineOverlay>,
    #[serde(default)]
    pub special: Vec<SpecialOverlay>,
}

impl ReferenceOverlay {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Apply to a copy of `base`; nothing is applied if any entry is invalid
    pub fn apply(&self, base: &ReferenceTable) -> EngineResult<ReferenceTable> {
        let mut table = base.clone();

        for entry in &self.baseline {
            table.set_baseline(
                entry.nutrient,
                entry.bucket,
                ReferenceValue {
                    recommended: entry.recommended,
                    upper_limit: entry.upper_limit,
                },
            )?;
        }

        for entry in &self.special {
            table.set_special(
                entry.nutrient,
                entry.condition,
                ReferenceValue {
                    recommended: entry.recommended,
                    upper_limit: entry.upper_limit,
                },
            )?;
        }

        tracing::info!(
            "Applied reference overlay: {} baseline, {} special-condition entries",
            self.baseline.len(),
            self.special.len()
        );

        Ok(table)
    }
}

/// Load the DGE table with an overlay file applied on top
pub fn load_with_overlay<P: AsRef<Path>>(path: P) -> EngineResult<ReferenceTable> {
    ReferenceOverlay::from_file(path)?.apply(&ReferenceTable::dge())
}
