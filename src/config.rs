//! Runtime configuration
//!
//! Read from `NUTRIENT_ADVISOR_*` environment variables.

use std::path::PathBuf;

use chrono::FixedOffset;

use crate::error::{EngineError, EngineResult};
use crate::models::{DemographicProfile, SpecialCondition};

pub const ENV_PROFILE: &str = "NUTRIENT_ADVISOR_PROFILE";
pub const ENV_CONDITION: &str = "NUTRIENT_ADVISOR_CONDITION";
pub const ENV_REFERENCE: &str = "NUTRIENT_ADVISOR_REFERENCE";
pub const ENV_UTC_OFFSET: &str = "NUTRIENT_ADVISOR_UTC_OFFSET";
pub const ENV_TREND_DAYS: &str = "NUTRIENT_ADVISOR_TREND_DAYS";

pub const DEFAULT_TREND_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorConfig {
    pub profile: DemographicProfile,
    pub condition: SpecialCondition,
    /// JSON overlay applied on top of the built-in table
    pub reference_overlay: Option<PathBuf>,
    /// Reporting zone; `None` uses the system's local zone
    pub utc_offset: Option<FixedOffset>,
    pub trend_days: u32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            profile: DemographicProfile::AdultFemale,
            condition: SpecialCondition::None,
            reference_overlay: None,
            utc_offset: None,
            trend_days: DEFAULT_TREND_DAYS,
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(profile) = get(ENV_PROFILE) {
            config.profile = DemographicProfile::from_str(&profile)?;
        }
        if let Some(condition) = get(ENV_CONDITION) {
            config.condition = SpecialCondition::from_str(&condition)?;
        }
        config.reference_overlay = get(ENV_REFERENCE).map(PathBuf::from);
        if let Some(offset) = get(ENV_UTC_OFFSET) {
            config.utc_offset = Some(parse_utc_offset(&offset)?);
        }
        if let Some(days) = get(ENV_TREND_DAYS) {
            config.trend_days = match days.trim().parse::<u32>() {
                Ok(d) if d > 0 => d,
                _ => {
                    tracing::warn!(
                        "Ignoring {}='{}', using {}",
                        ENV_TREND_DAYS,
                        days,
                        DEFAULT_TREND_DAYS
                    );
                    DEFAULT_TREND_DAYS
                }
            };
        }

        Ok(config)
    }
}

/// Parse `+HH:MM`, `-HH:MM` or `Z`
pub fn parse_utc_offset(s: &str) -> EngineResult<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| invalid_offset(s));
    }

    s.parse::<FixedOffset>().map_err(|_| invalid_offset(s))
}

fn invalid_offset(s: &str) -> EngineError {
    EngineError::InvalidConfig(format!("{}='{}': expected +HH:MM", ENV_UTC_OFFSET, s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> EngineResult<AdvisorConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AdvisorConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]).unwrap();
        assert_eq!(c, AdvisorConfig::default());
        assert_eq!(c.profile, DemographicProfile::AdultFemale);
        assert_eq!(c.trend_days, 7);
    }

    #[test]
    fn test_all_vars() {
        let c = config(&[
            (ENV_PROFILE, "child:9"),
            (ENV_CONDITION, "none"),
            (ENV_REFERENCE, "/etc/dge.json"),
            (ENV_UTC_OFFSET, "+02:00"),
            (ENV_TREND_DAYS, "14"),
        ])
        .unwrap();
        assert_eq!(c.profile, DemographicProfile::Child { age: 9 });
        assert_eq!(c.reference_overlay, Some(PathBuf::from("/etc/dge.json")));
        assert_eq!(c.utc_offset, FixedOffset::east_opt(7200));
        assert_eq!(c.trend_days, 14);
    }

    #[test]
    fn test_bad_profile_is_error() {
        assert!(config(&[(ENV_PROFILE, "robot")]).is_err());
    }

    #[test]
    fn test_bad_condition_is_error() {
        assert!(matches!(
            config(&[(ENV_CONDITION, "tired")]),
            Err(EngineError::InvalidCondition(_))
        ));
    }

    #[test]
    fn test_bad_offset_is_config_error() {
        assert!(matches!(
            config(&[(ENV_UTC_OFFSET, "+-3")]),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            config(&[(ENV_UTC_OFFSET, "+02:-30")]),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_trend_days_falls_back() {
        assert_eq!(config(&[(ENV_TREND_DAYS, "0")]).unwrap().trend_days, 7);
        assert_eq!(config(&[(ENV_TREND_DAYS, "week")]).unwrap().trend_days, 7);
    }

    #[test]
    fn test_parse_utc_offset() {
        assert_eq!(parse_utc_offset("-05:30").unwrap(), FixedOffset::west_opt(19800).unwrap());
        assert_eq!(parse_utc_offset("Z").unwrap(), FixedOffset::east_opt(0).unwrap());
        assert_eq!(parse_utc_offset(" +02:00 ").unwrap(), FixedOffset::east_opt(7200).unwrap());
        assert!(parse_utc_offset("+-3").is_err());
        assert!(parse_utc_offset("+02:-30").is_err());
        assert!(parse_utc_offset("02:00").is_err());
        assert!(parse_utc_offset("+25:00").is_err());
    }
}
