//! Trip planning: from raw selections to a complete report
//!
//! [`TripPlanner::plan`] is the single entry point used by the CLI, the
//! interactive session and the HTTP API. It validates the raw request at the
//! boundary and then runs the pure engine steps in dependency order.

use super::costs::CostBreakdown;
use super::insights::{self, Insight, InsightContext};
use super::itinerary::Itinerary;
use super::risk::{self, BudgetRisk};
use super::transport::{self, TransportScore};
use crate::catalog::{Catalog, DEFAULT_SEGMENT_LENGTH_KM};
use crate::models::{Budget, City, DaysPerCity, Priority, TransportMode, TravelerProfile};
use crate::{Result, TravelOsError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Raw user selections, as typed in or received over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub route: String,
    pub budget: f64,
    /// Defaults to today
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub days_per_city: u8,
    #[serde(default)]
    pub priorities: Vec<Priority>,
}

impl TripRequest {
    #[must_use]
    pub fn new(route: impl Into<String>, budget: f64, days_per_city: u8) -> Self {
        Self {
            route: route.into(),
            budget,
            start_date: None,
            days_per_city,
            priorities: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        self.priorities = priorities.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
}

/// Tunables of the planning engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerSettings {
    pub segment_length_km: f64,
    pub budget_min: f64,
    pub budget_max: f64,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            segment_length_km: DEFAULT_SEGMENT_LENGTH_KM,
            budget_min: 500.0,
            budget_max: 20_000.0,
        }
    }
}

/// A city as displayed in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityCard {
    #[serde(flatten)]
    pub city: City,
    pub score: f64,
}

impl From<&City> for CityCard {
    fn from(city: &City) -> Self {
        Self {
            city: city.clone(),
            score: city.score(),
        }
    }
}

/// Everything derived from one set of selections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripReport {
    pub route: String,
    pub profile: TravelerProfile,
    pub days_per_city: DaysPerCity,
    pub city_count: usize,
    pub total_days: u32,
    pub distance_km: f64,
    pub transport: TransportMode,
    pub transport_scores: Vec<TransportScore>,
    pub cities: Vec<CityCard>,
    pub costs: CostBreakdown,
    pub budget_ratio: f64,
    pub risk: BudgetRisk,
    pub insights: Vec<Insight>,
    pub itinerary: Itinerary,
}

/// Runs the planning engine over a catalog
#[derive(Debug, Clone, Copy)]
pub struct TripPlanner<'a> {
    catalog: &'a Catalog,
    settings: PlannerSettings,
}

impl<'a> TripPlanner<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, settings: PlannerSettings) -> Self {
        Self { catalog, settings }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> PlannerSettings {
        self.settings
    }

    /// Validate a request and compute its full report
    #[instrument(level = "debug", skip(self), fields(route = %request.route))]
    pub fn plan(&self, request: &TripRequest) -> Result<TripReport> {
        let route = self.catalog.route(&request.route)?;
        let days = DaysPerCity::new(request.days_per_city)?;
        let budget = Budget::clamped(
            request.budget,
            self.settings.budget_min,
            self.settings.budget_max,
        )?;
        if !self.settings.segment_length_km.is_finite() || self.settings.segment_length_km < 0.0 {
            return Err(TravelOsError::config(format!(
                "Segment length must be a non-negative distance, got {}",
                self.settings.segment_length_km
            )));
        }
        let start_date = request
            .start_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let profile = TravelerProfile::new(budget, request.priorities.iter().copied());

        let distance_km = route.distance_km(self.settings.segment_length_km);
        let transport_scores = transport::score_transports(&profile, distance_km);
        let transport = transport::recommend_transport(&profile, distance_km);
        let costs = CostBreakdown::compute(route, days, transport, distance_km);
        let budget_ratio = risk::spend_ratio(costs.grand_total, budget);
        let risk = risk::budget_risk(costs.grand_total, budget);
        let insights = insights::evaluate(&InsightContext {
            route,
            profile: &profile,
            transport,
        });
        let itinerary = Itinerary::build(route, start_date, days)?;

        debug!(
            distance_km,
            %transport,
            total = costs.grand_total,
            %risk,
            "Trip planned"
        );

        Ok(TripReport {
            route: route.name.clone(),
            days_per_city: days,
            city_count: route.cities.len(),
            total_days: itinerary.total_days,
            distance_km,
            transport,
            transport_scores,
            cities: route.cities.iter().map(CityCard::from).collect(),
            costs,
            budget_ratio,
            risk,
            insights,
            itinerary,
            profile,
        })
    }
}
