//! Traveler profile: budget, stay length and priorities
//!
//! The newtypes here validate at construction, so the planner never sees a
//! non-positive budget or an out-of-range stay length.

use crate::{Result, TravelOsError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// A priority the traveler can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Priority {
    #[serde(rename = "Low cost")]
    LowCost,
    Comfort,
    Fast,
    Eco,
    Nightlife,
    Culture,
}

impl Priority {
    /// The full vocabulary, in display order
    pub const ALL: [Priority; 6] = [
        Priority::LowCost,
        Priority::Comfort,
        Priority::Fast,
        Priority::Eco,
        Priority::Nightlife,
        Priority::Culture,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Priority::LowCost => "Low cost",
            Priority::Comfort => "Comfort",
            Priority::Fast => "Fast",
            Priority::Eco => "Eco",
            Priority::Nightlife => "Nightlife",
            Priority::Culture => "Culture",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Priority {
    type Err = TravelOsError;

    /// Accepts labels case-insensitively, treating `-`, `_` and spaces alike
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect::<String>()
            .to_lowercase();

        Priority::ALL
            .into_iter()
            .find(|p| p.label().to_lowercase() == normalized)
            .ok_or_else(|| {
                let valid: Vec<&str> = Priority::ALL.iter().map(|p| p.label()).collect();
                TravelOsError::validation(format!(
                    "Unknown priority '{s}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }
}

impl TryFrom<String> for Priority {
    type Error = TravelOsError;

    fn try_from(label: String) -> Result<Self> {
        label.parse()
    }
}

/// Total trip budget in EUR, always finite and strictly positive
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Budget(f64);

impl Budget {
    /// Validate a budget amount
    pub fn new(amount: f64) -> Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TravelOsError::validation(format!(
                "Budget must be a positive amount, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    /// Validate a budget amount and clamp it into `min..=max`
    ///
    /// Bounds that are not finite or not `0 < min <= max` are a
    /// configuration error.
    pub fn clamped(amount: f64, min: f64, max: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && 0.0 < min && min <= max) {
            return Err(TravelOsError::config(format!(
                "Budget bounds must satisfy 0 < min <= max, got {min}..={max}"
            )));
        }
        let budget = Self::new(amount)?;
        let clamped = budget.0.clamp(min, max);
        if clamped != budget.0 {
            warn!(requested = amount, clamped, "Budget outside {min}..={max}, clamping");
        }
        Self::new(clamped)
    }

    #[must_use]
    pub fn amount(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Budget {
    type Error = TravelOsError;

    fn try_from(amount: f64) -> Result<Self> {
        Budget::new(amount)
    }
}

impl From<Budget> for f64 {
    fn from(budget: Budget) -> Self {
        budget.0
    }
}

/// Number of days spent in every city of a route (1-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DaysPerCity(u8);

impl DaysPerCity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    pub fn new(days: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&days) {
            return Err(TravelOsError::validation(format!(
                "Days per city must be between {} and {}, got {days}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(days))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DaysPerCity {
    type Error = TravelOsError;

    fn try_from(days: u8) -> Result<Self> {
        DaysPerCity::new(days)
    }
}

impl From<DaysPerCity> for u8 {
    fn from(days: DaysPerCity) -> Self {
        days.0
    }
}

/// Traveler profile built fresh from the current selections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelerProfile {
    pub budget: Budget,
    /// Travel pace tag; informational only
    pub pace: String,
    pub priorities: BTreeSet<Priority>,
}

impl TravelerProfile {
    #[must_use]
    pub fn new(budget: Budget, priorities: impl IntoIterator<Item = Priority>) -> Self {
        Self {
            budget,
            pace: "normal".to_string(),
            priorities: priorities.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn has(&self, priority: Priority) -> bool {
        self.priorities.contains(&priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Low cost", Priority::LowCost)]
    #[case("low-cost", Priority::LowCost)]
    #[case("LOW_COST", Priority::LowCost)]
    #[case(" eco ", Priority::Eco)]
    #[case("Nightlife", Priority::Nightlife)]
    #[case("culture", Priority::Culture)]
    fn test_priority_parsing(#[case] input: &str, #[case] expected: Priority) {
        assert_eq!(input.parse::<Priority>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_priority_lists_vocabulary() {
        let err = "cheap".parse::<Priority>().unwrap_err();
        assert!(matches!(err, TravelOsError::Validation { .. }));
        assert!(err.to_string().contains("Low cost, Comfort, Fast, Eco, Nightlife, Culture"));
    }

    #[test]
    fn test_priority_label_round_trips() {
        for priority in Priority::ALL {
            assert_eq!(priority.to_string().parse::<Priority>().unwrap(), priority);
        }
    }

    #[rstest]
    #[case(r#""low cost""#, Priority::LowCost)]
    #[case(r#""Low-Cost""#, Priority::LowCost)]
    #[case(r#""ECO""#, Priority::Eco)]
    #[case(r#""Culture""#, Priority::Culture)]
    fn test_priority_deserialization_is_tolerant(#[case] json: &str, #[case] expected: Priority) {
        assert_eq!(serde_json::from_str::<Priority>(json).unwrap(), expected);
    }

    #[test]
    fn test_priority_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Priority::LowCost).unwrap(), r#""Low cost""#);
        assert!(serde_json::from_str::<Priority>(r#""luxury""#).is_err());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_budget_rejects_invalid(#[case] amount: f64) {
        assert!(Budget::new(amount).is_err());
    }

    #[test]
    fn test_budget_clamping() {
        assert_eq!(Budget::clamped(100.0, 500.0, 20_000.0).unwrap().amount(), 500.0);
        assert_eq!(Budget::clamped(50_000.0, 500.0, 20_000.0).unwrap().amount(), 20_000.0);
        assert_eq!(Budget::clamped(3500.0, 500.0, 20_000.0).unwrap().amount(), 3500.0);
        assert!(Budget::clamped(0.0, 500.0, 20_000.0).is_err());
    }

    #[test]
    fn test_budget_clamping_rejects_inverted_bounds() {
        let err = Budget::clamped(3500.0, 1000.0, 500.0).unwrap_err();
        assert!(matches!(err, TravelOsError::Config { .. }));
        assert!(Budget::clamped(3500.0, f64::NAN, 500.0).is_err());
    }

    #[test]
    fn test_budget_deserialization_validates() {
        let budget: Budget = serde_json::from_str("3500").unwrap();
        assert_eq!(budget.amount(), 3500.0);
        assert!(serde_json::from_str::<Budget>("0").is_err());
    }

    #[rstest]
    #[case(1, true)]
    #[case(7, true)]
    #[case(0, false)]
    #[case(8, false)]
    fn test_days_per_city_range(#[case] days: u8, #[case] valid: bool) {
        assert_eq!(DaysPerCity::new(days).is_ok(), valid);
    }

    #[test]
    fn test_profile_priorities() {
        let profile = TravelerProfile::new(
            Budget::new(1000.0).unwrap(),
            [Priority::Eco, Priority::Eco, Priority::Fast],
        );
        assert_eq!(profile.priorities.len(), 2);
        assert!(profile.has(Priority::Eco));
        assert!(!profile.has(Priority::Comfort));
        assert_eq!(profile.pace, "normal");
    }
}
