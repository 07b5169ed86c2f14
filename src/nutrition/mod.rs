//! Nutrition engine
//!
//! Recommendation resolution, intake aggregation, status classification,
//! trend analysis and health tips. Everything here is a pure function of its
//! inputs and a reference table.

pub mod aggregator;
pub mod resolver;
pub mod status;
pub mod tips;
pub mod trend;
pub mod units;

pub use aggregator::{parse_day, DailyAggregate, IntakeAggregator, SourceContribution};
pub use resolver::RecommendationResolver;
pub use status::{classify, percentage, NutrientProgress, NutrientStatus};
pub use tips::{generate_tips, HealthTip, TipKind};
pub use trend::{average, classify_trend, series, summarize, SeriesPoint, TrendDirection, TrendSummary};
pub use units::{entry_from_label, to_canonical};
