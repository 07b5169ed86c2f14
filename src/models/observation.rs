//! Intake observation model
//!
//! A recorded intake: a snapshot of a supplement's nutrient list at the
//! moment it was taken. Later edits to the supplement never reach it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use super::{NutrientEntry, NutrientType};

/// A supplement or product definition that intakes are recorded from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplement {
    pub name: String,
    pub brand: Option<String>,
    pub nutrients: Vec<NutrientEntry>,
}

impl Supplement {
    pub fn new(name: impl Into<String>, nutrients: Vec<NutrientEntry>) -> Self {
        Self {
            name: name.into(),
            brand: None,
            nutrients,
        }
    }

    /// Label used on observations, "Brand Name" when a brand is set
    pub fn label(&self) -> String {
        match &self.brand {
            Some(brand) if !brand.is_empty() => format!("{} {}", brand, self.name),
            _ => self.name.clone(),
        }
    }
}

/// An immutable record of nutrients taken at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeObservation {
    pub timestamp: DateTime<Utc>,
    pub servings_taken: u32,
    pub nutrients: Vec<NutrientEntry>,
    pub source_label: String,
}

impl IntakeObservation {
    /// Create a validated observation
    pub fn new(
        timestamp: DateTime<Utc>,
        servings_taken: u32,
        nutrients: Vec<NutrientEntry>,
        source_label: impl Into<String>,
    ) -> EngineResult<Self> {
        let observation = Self {
            timestamp,
            servings_taken,
            nutrients,
            source_label: source_label.into(),
        };
        observation.validate()?;
        Ok(observation)
    }

    /// Snapshot a supplement's current nutrient list
    pub fn from_supplement(
        supplement: &Supplement,
        servings_taken: u32,
        timestamp: DateTime<Utc>,
    ) -> EngineResult<Self> {
        Self::new(
            timestamp,
            servings_taken,
            supplement.nutrients.clone(),
            supplement.label(),
        )
    }

    /// Check the caller contract: at least one serving, non-negative amounts
    pub fn validate(&self) -> EngineResult<()> {
        if self.servings_taken < 1 {
            return Err(EngineError::InvalidServings(self.servings_taken));
        }
        for entry in &self.nutrients {
            entry.validate()?;
        }
        Ok(())
    }

    /// Total amount of `nutrient` this observation contributes, `None` if absent
    pub fn contribution(&self, nutrient: NutrientType) -> Option<f64> {
        let mut entries = self
            .nutrients
            .iter()
            .filter(|e| e.nutrient == nutrient)
            .peekable();
        entries.peek()?;

        let per_serving: f64 = entries.map(|e| e.amount_per_serving).sum();
        Some(per_serving * self.servings_taken as f64)
    }
}
