//! Conditional insights about a planned trip
//!
//! Each rule is an independent predicate paired with a message producer.
//! Rules are evaluated in the order of [`RULES`]; adding one means adding an
//! entry, not touching control flow.

use crate::models::{Priority, Route, TransportMode, TravelerProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Eco rating below which the recommended transport conflicts with an eco priority
pub const ECO_CONFLICT_THRESHOLD: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightLevel {
    Info,
    Warning,
}

/// A short textual fact derived from the current selections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub level: InsightLevel,
    pub message: String,
}

impl Insight {
    fn info(message: String) -> Self {
        Self {
            level: InsightLevel::Info,
            message,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            level: InsightLevel::Warning,
            message,
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            InsightLevel::Info => write!(f, "ℹ️  {}", self.message),
            InsightLevel::Warning => write!(f, "⚠️  {}", self.message),
        }
    }
}

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    pub route: &'a Route,
    pub profile: &'a TravelerProfile,
    pub transport: TransportMode,
}

struct InsightRule {
    applies: fn(&InsightContext<'_>) -> bool,
    produce: fn(&InsightContext<'_>) -> Option<Insight>,
}

const RULES: &[InsightRule] = &[
    InsightRule {
        applies: |ctx| ctx.profile.has(Priority::Nightlife),
        produce: |ctx| {
            ctx.route
                .top_city_by(|c| c.ratings.nightlife)
                .map(|city| Insight::info(format!("🌃 Best nightlife on this route: {}", city.name)))
        },
    },
    InsightRule {
        applies: |ctx| ctx.profile.has(Priority::Culture),
        produce: |ctx| {
            ctx.route
                .top_city_by(|c| c.ratings.culture)
                .map(|city| Insight::info(format!("🎭 Cultural highlight: {}", city.name)))
        },
    },
    InsightRule {
        applies: |ctx| {
            ctx.profile.has(Priority::Eco) && ctx.transport.eco() < ECO_CONFLICT_THRESHOLD
        },
        produce: |_| {
            Some(Insight::warning(
                "♻️ Your eco priority conflicts with transport choice".to_string(),
            ))
        },
    },
];

/// Evaluate every rule against the context
#[must_use]
pub fn evaluate(ctx: &InsightContext<'_>) -> Vec<Insight> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .filter_map(|rule| (rule.produce)(ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::Budget;

    fn insights_for(route: &str, priorities: &[Priority], transport: TransportMode) -> Vec<Insight> {
        let route = Catalog::builtin().route(route).unwrap();
        let profile = TravelerProfile::new(Budget::new(3500.0).unwrap(), priorities.iter().copied());
        evaluate(&InsightContext {
            route,
            profile: &profile,
            transport,
        })
    }

    #[test]
    fn test_no_priorities_no_insights() {
        assert!(insights_for("Grand Explorer", &[], TransportMode::Plane).is_empty());
    }

    #[test]
    fn test_nightlife_highlight() {
        let insights = insights_for("Balkan Core", &[Priority::Nightlife], TransportMode::Car);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].message.ends_with("Budapest"));
        assert_eq!(insights[0].level, InsightLevel::Info);
    }

    #[test]
    fn test_culture_highlight_takes_first_of_tied_cities() {
        // Vienna and Prague both rate 9; Vienna comes first on this route.
        let insights = insights_for("Central Europe", &[Priority::Culture], TransportMode::Car);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].message.ends_with("Vienna"));
    }

    #[test]
    fn test_eco_conflict_only_for_low_eco_transport() {
        let with_plane = insights_for("Balkan Core", &[Priority::Eco], TransportMode::Plane);
        assert_eq!(with_plane.len(), 1);
        assert_eq!(with_plane[0].level, InsightLevel::Warning);
        assert!(with_plane[0].message.contains("conflicts"));

        assert!(insights_for("Balkan Core", &[Priority::Eco], TransportMode::Train).is_empty());
    }

    #[test]
    fn test_rules_keep_fixed_order() {
        let insights = insights_for(
            "Grand Explorer",
            &[Priority::Eco, Priority::Culture, Priority::Nightlife],
            TransportMode::Plane,
        );
        assert_eq!(insights.len(), 3);
        assert!(insights[0].message.contains("nightlife"));
        assert!(insights[1].message.contains("Cultural"));
        assert!(insights[2].message.contains("eco"));
    }
}
