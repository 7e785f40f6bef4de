//! Cost aggregation for a route

use crate::models::{DaysPerCity, Route, TransportMode};
use serde::{Deserialize, Serialize};

/// Per-category trip costs in EUR
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub hotel_total: f64,
    pub food_total: f64,
    pub transport_cost: f64,
    /// Time spent travelling, in hours
    pub transport_time_hours: f64,
    pub grand_total: f64,
}

impl CostBreakdown {
    /// Aggregate costs for staying `days` in every city of `route` and
    /// covering `distance_km` with `mode`
    #[must_use]
    pub fn compute(
        route: &Route,
        days: DaysPerCity,
        mode: TransportMode,
        distance_km: f64,
    ) -> Self {
        let days = f64::from(days.get());
        let hotel_total: f64 = route.cities.iter().map(|c| c.hotel_per_night * days).sum();
        let food_total: f64 = route.cities.iter().map(|c| c.food_per_day * days).sum();
        let transport_cost = mode.cost(distance_km);

        Self {
            hotel_total,
            food_total,
            transport_cost,
            transport_time_hours: mode.travel_time_hours(distance_km),
            grand_total: hotel_total + food_total + transport_cost,
        }
    }
}

/// Format an amount as euros with two decimals
#[must_use]
pub fn format_eur(amount: f64) -> String {
    format!("€{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn balkan_core() -> &'static Route {
        Catalog::builtin().route("Balkan Core").unwrap()
    }

    #[test]
    fn test_balkan_core_by_train() {
        let costs = CostBreakdown::compute(
            balkan_core(),
            DaysPerCity::new(3).unwrap(),
            TransportMode::Train,
            600.0,
        );
        assert_eq!(costs.hotel_total, 630.0);
        assert_eq!(costs.food_total, 195.0);
        assert!((costs.transport_cost - 108.0).abs() < 1e-9);
        assert!((costs.grand_total - 933.0).abs() < 1e-9);
        assert!((costs.transport_time_hours - 600.0 / 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_doubling_days_doubles_stay_costs_only() {
        let route = balkan_core();
        let short = CostBreakdown::compute(route, DaysPerCity::new(2).unwrap(), TransportMode::Bus, 600.0);
        let long = CostBreakdown::compute(route, DaysPerCity::new(4).unwrap(), TransportMode::Bus, 600.0);
        assert_eq!(long.hotel_total, short.hotel_total * 2.0);
        assert_eq!(long.food_total, short.food_total * 2.0);
        assert_eq!(long.transport_cost, short.transport_cost);
    }

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(933.0), "€933.00");
        assert_eq!(format_eur(1.005), "€1.00");
        assert_eq!(format_eur(0.0), "€0.00");
    }
}
