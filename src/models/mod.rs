//! Data models
//!
//! Plain value types shared by the reference table and the engine.

mod nutrient;
mod observation;
mod profile;
mod recommendation;

pub use nutrient::{NutrientCategory, NutrientEntry, NutrientType, NutrientUnit};
pub use observation::{IntakeObservation, Supplement};
pub use profile::{AgeBracket, DemographicProfile, Sex, SpecialCondition, ADULT_AGE};
pub use recommendation::{format_amount, DailyRecommendation};
