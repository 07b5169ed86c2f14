//! Error types
//!
//! Contract violations raised at the engine boundary.

use thiserror::Error;

use crate::models::NutrientType;

/// Engine error types
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Servings taken must be at least 1 (got {0})")]
    InvalidServings(u32),

    #[error("Invalid amount for {nutrient}: {amount} (must be finite and non-negative)")]
    InvalidAmount { nutrient: NutrientType, amount: f64 },

    #[error("Unknown nutrient: {0}")]
    UnknownNutrient(String),

    #[error("Cannot convert '{unit}' for {nutrient}")]
    UnknownUnit { nutrient: NutrientType, unit: String },

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid profile '{0}': expected male, female or child:<age>")]
    InvalidProfile(String),

    #[error("Invalid special condition: {0}")]
    InvalidCondition(String),

    #[error("Invalid reference value for {nutrient}: {reason}")]
    InvalidReference { nutrient: NutrientType, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse reference data: {0}")]
    ReferenceParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Intake observation not found: {0}")]
    UnknownObservation(i64),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
