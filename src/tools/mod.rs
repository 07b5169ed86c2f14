//! Report tools
//!
//! Composed operations that read an intake log and return serializable
//! responses for display or export.

pub mod summary;
pub mod trends;

use chrono::{NaiveDate, NaiveTime};

use crate::error::EngineResult;
use crate::models::IntakeObservation;
use crate::store::IntakeLog;

/// Observations that may fall on `start..=end` in any reporting zone
///
/// Fetches one extra UTC day on each side; the aggregator does the exact
/// calendar-day filtering.
pub(crate) fn fetch_days<L: IntakeLog + ?Sized>(
    log: &L,
    start: NaiveDate,
    end: NaiveDate,
) -> EngineResult<Vec<IntakeObservation>> {
    let from = start.pred_opt().unwrap_or(start);
    let to = end
        .succ_opt()
        .and_then(|d| d.succ_opt())
        .unwrap_or(end);

    log.observations_between(
        from.and_time(NaiveTime::MIN).and_utc(),
        to.and_time(NaiveTime::MIN).and_utc(),
    )
}
