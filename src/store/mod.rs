//! Intake log
//!
//! The interface the engine reads observations through. Persistence lives
//! outside the crate; `MemoryIntakeLog` backs the binary and tests.

mod memory;

use chrono::{DateTime, Utc};

use crate::error::EngineResult;
use crate::models::IntakeObservation;

pub use memory::{MemoryIntakeLog, RecordedIntake};

/// Source of recorded intake observations
pub trait IntakeLog {
    /// Observations with `start <= timestamp < end`, oldest first
    fn observations_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<Vec<IntakeObservation>>;
}
