//! Trip planning engine
//!
//! Pure functions over the catalog and the traveler's selections:
//! - Transport recommendation by weighted priority scoring
//! - Cost aggregation for hotels, food and transport
//! - Budget risk classification
//! - Conditional insights and a dated itinerary

pub mod costs;
pub mod insights;
pub mod itinerary;
pub mod risk;
pub mod transport;
pub mod trip;

pub use costs::CostBreakdown;
pub use insights::{Insight, InsightLevel};
pub use itinerary::{Itinerary, ItineraryStop};
pub use risk::{BudgetRisk, budget_risk};
pub use transport::{TransportScore, recommend_transport, score_transports};
pub use trip::{CityCard, PlannerSettings, TripPlanner, TripReport, TripRequest};
