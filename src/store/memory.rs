//! In-memory intake log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{IntakeObservation, Supplement};

use super::IntakeLog;

/// An observation with the id it was recorded under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedIntake {
    pub id: i64,
    pub observation: IntakeObservation,
}

/// Intake log held in memory, ids assigned in recording order
#[derive(Debug, Clone, Default)]
pub struct MemoryIntakeLog {
    entries: Vec<RecordedIntake>,
    next_id: i64,
}

impl MemoryIntakeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load validated observations, e.g. from a JSON export
    pub fn from_observations(observations: Vec<IntakeObservation>) -> EngineResult<Self> {
        let mut log = Self::new();
        for observation in observations {
            log.record(observation)?;
        }
        Ok(log)
    }

    /// Record an observation and return its id
    pub fn record(&mut self, observation: IntakeObservation) -> EngineResult<i64> {
        observation.validate()?;

        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(RecordedIntake { id, observation });
        Ok(id)
    }

    /// Record an intake of a supplement taken at `timestamp`
    pub fn record_supplement(
        &mut self,
        supplement: &Supplement,
        servings_taken: u32,
        timestamp: DateTime<Utc>,
    ) -> EngineResult<i64> {
        let observation = IntakeObservation::from_supplement(supplement, servings_taken, timestamp)?;
        self.record(observation)
    }

    pub fn get(&self, id: i64) -> Option<&RecordedIntake> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Delete an observation by id
    pub fn delete(&mut self, id: i64) -> EngineResult<RecordedIntake> {
        let position = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(EngineError::UnknownObservation(id))?;
        Ok(self.entries.remove(position))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RecordedIntake] {
        &self.entries
    }
}

impl IntakeLog for MemoryIntakeLog {
    fn observations_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<Vec<IntakeObservation>> {
        let mut observations: Vec<IntakeObservation> = self
            .entries
            .iter()
            .filter(|e| e.observation.timestamp >= start && e.observation.timestamp < end)
            .map(|e| e.observation.clone())
            .collect();
        observations.sort_by_key(|o| o.timestamp);
        Ok(observations)
    }
}
