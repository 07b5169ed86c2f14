//! Demographic profile model
//!
//! Who a recommendation is for: adult male, adult female, or a child of a
//! given age, plus the pregnancy/breastfeeding condition for adult women.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Age at which a person is treated as an adult
pub const ADULT_AGE: u32 = 18;

/// Biological sex used to pick the adult reference column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Demographic bucket a recommendation is resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DemographicProfile {
    AdultMale,
    AdultFemale,
    Child { age: u32 },
}

impl DemographicProfile {
    /// Derive the profile from a birth date as of `on`
    pub fn from_birth_date(sex: Sex, birth_date: NaiveDate, on: NaiveDate) -> Self {
        let age = age_on(birth_date, on);
        if age < ADULT_AGE {
            return DemographicProfile::Child { age };
        }
        match sex {
            Sex::Male => DemographicProfile::AdultMale,
            Sex::Female => DemographicProfile::AdultFemale,
        }
    }

    /// Parse `male`, `female` or `child:<age>`
    pub fn from_str(s: &str) -> EngineResult<Self> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "male" | "adult_male" | "m" => Ok(DemographicProfile::AdultMale),
            "female" | "adult_female" | "f" => Ok(DemographicProfile::AdultFemale),
            other => other
                .strip_prefix("child:")
                .and_then(|age| age.trim().parse::<u32>().ok())
                .map(|age| DemographicProfile::Child { age })
                .ok_or_else(|| EngineError::InvalidProfile(s.to_string())),
        }
    }

    /// Bracket for child profiles, `None` for adults
    pub fn age_bracket(&self) -> Option<AgeBracket> {
        match self {
            DemographicProfile::Child { age } => Some(AgeBracket::for_age(*age)),
            _ => None,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            DemographicProfile::AdultMale => "Adult male".to_string(),
            DemographicProfile::AdultFemale => "Adult female".to_string(),
            DemographicProfile::Child { age } => format!("Child ({} years)", age),
        }
    }
}

/// Whole years between `birth_date` and `on`, zero if `on` precedes birth
fn age_on(birth_date: NaiveDate, on: NaiveDate) -> u32 {
    if on < birth_date {
        return 0;
    }
    let mut years = on.year() - birth_date.year();
    if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Child age bracket of the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    /// 1 to 3 years
    Toddler,
    /// 4 to 6 years
    EarlyChild,
    /// 7 to 9 years
    MiddleChild,
    /// 10 to 12 years
    Preteen,
    /// 13 to 14 years
    EarlyTeen,
    /// 15 to 18 years
    LateTeen,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 6] = [
        AgeBracket::Toddler,
        AgeBracket::EarlyChild,
        AgeBracket::MiddleChild,
        AgeBracket::Preteen,
        AgeBracket::EarlyTeen,
        AgeBracket::LateTeen,
    ];

    /// Bracket containing `age`; below 1 clamps to the first, above 18 to the last
    pub fn for_age(age: u32) -> Self {
        match age {
            0..=3 => AgeBracket::Toddler,
            4..=6 => AgeBracket::EarlyChild,
            7..=9 => AgeBracket::MiddleChild,
            10..=12 => AgeBracket::Preteen,
            13..=14 => AgeBracket::EarlyTeen,
            _ => AgeBracket::LateTeen,
        }
    }

    /// Position in the table, 0-based
    pub fn index(&self) -> usize {
        match self {
            AgeBracket::Toddler => 0,
            AgeBracket::EarlyChild => 1,
            AgeBracket::MiddleChild => 2,
            AgeBracket::Preteen => 3,
            AgeBracket::EarlyTeen => 4,
            AgeBracket::LateTeen => 5,
        }
    }
}

/// Pregnancy/breastfeeding state, only meaningful for adult women
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialCondition {
    #[default]
    None,
    Pregnant,
    Breastfeeding,
    PregnantAndBreastfeeding,
}

impl SpecialCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialCondition::None => "none",
            SpecialCondition::Pregnant => "pregnant",
            SpecialCondition::Breastfeeding => "breastfeeding",
            SpecialCondition::PregnantAndBreastfeeding => "pregnant_and_breastfeeding",
        }
    }

    pub fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "" | "none" => Ok(SpecialCondition::None),
            "pregnant" | "pregnancy" => Ok(SpecialCondition::Pregnant),
            "breastfeeding" | "lactating" => Ok(SpecialCondition::Breastfeeding),
            "pregnant_and_breastfeeding" | "both" => {
                Ok(SpecialCondition::PregnantAndBreastfeeding)
            }
            _ => Err(EngineError::InvalidCondition(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(AgeBracket::for_age(1), AgeBracket::Toddler);
        assert_eq!(AgeBracket::for_age(3), AgeBracket::Toddler);
        assert_eq!(AgeBracket::for_age(4), AgeBracket::EarlyChild);
        assert_eq!(AgeBracket::for_age(9), AgeBracket::MiddleChild);
        assert_eq!(AgeBracket::for_age(10), AgeBracket::Preteen);
        assert_eq!(AgeBracket::for_age(14), AgeBracket::EarlyTeen);
        assert_eq!(AgeBracket::for_age(15), AgeBracket::LateTeen);
        assert_eq!(AgeBracket::for_age(18), AgeBracket::LateTeen);
    }

    #[test]
    fn test_bracket_clamping() {
        assert_eq!(AgeBracket::for_age(0), AgeBracket::Toddler);
        assert_eq!(AgeBracket::for_age(19), AgeBracket::LateTeen);
        assert_eq!(AgeBracket::for_age(200), AgeBracket::LateTeen);
    }

    #[test]
    fn test_child_equality_is_structural() {
        assert_eq!(DemographicProfile::Child { age: 5 }, DemographicProfile::Child { age: 5 });
        assert_ne!(DemographicProfile::Child { age: 5 }, DemographicProfile::Child { age: 6 });
    }

    #[test]
    fn test_from_birth_date() {
        let on = date(2026, 3, 15);
        assert_eq!(
            DemographicProfile::from_birth_date(Sex::Female, date(2019, 3, 16), on),
            DemographicProfile::Child { age: 6 }
        );
        assert_eq!(
            DemographicProfile::from_birth_date(Sex::Female, date(2019, 3, 15), on),
            DemographicProfile::Child { age: 7 }
        );
        assert_eq!(
            DemographicProfile::from_birth_date(Sex::Male, date(1980, 1, 1), on),
            DemographicProfile::AdultMale
        );
        assert_eq!(
            DemographicProfile::from_birth_date(Sex::Female, date(2030, 1, 1), on),
            DemographicProfile::Child { age: 0 }
        );
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!(DemographicProfile::from_str("male").unwrap(), DemographicProfile::AdultMale);
        assert_eq!(DemographicProfile::from_str("Female").unwrap(), DemographicProfile::AdultFemale);
        assert_eq!(
            DemographicProfile::from_str("child:12").unwrap(),
            DemographicProfile::Child { age: 12 }
        );
        assert!(DemographicProfile::from_str("child:abc").is_err());
        assert!(DemographicProfile::from_str("robot").is_err());
    }

    #[test]
    fn test_profile_serde_shape() {
        let json = serde_json::to_value(DemographicProfile::Child { age: 8 }).unwrap();
        assert_eq!(json["kind"], "child");
        assert_eq!(json["age"], 8);
    }

    #[test]
    fn test_condition_from_str() {
        assert_eq!(SpecialCondition::from_str("none").unwrap(), SpecialCondition::None);
        assert_eq!(
            SpecialCondition::from_str("pregnant-and-breastfeeding").unwrap(),
            SpecialCondition::PregnantAndBreastfeeding
        );
        assert!(SpecialCondition::from_str("sick").is_err());
    }
}
