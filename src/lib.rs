//! `TravelOS` - Multi-city travel decision support
//!
//! This library provides the static travel catalog and the planning engine:
//! transport recommendation, cost aggregation, budget risk classification
//! and route insights, plus the text, interactive and HTTP front ends.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod planner;
pub mod report;
pub mod session;
pub mod web;

// Re-export core types for public API
pub use catalog::Catalog;
pub use config::TravelOsConfig;
pub use error::TravelOsError;
pub use models::{Budget, City, DaysPerCity, Priority, Route, TransportMode, TravelerProfile};
pub use planner::{
    BudgetRisk, CostBreakdown, PlannerSettings, TripPlanner, TripReport, TripRequest,
    budget_risk, recommend_transport,
};
pub use session::{Session, SessionCommand};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelOsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
