//! Dated itinerary for a route
//!
//! Dates are informational; costs never depend on them.

use crate::models::{DaysPerCity, Route};
use crate::{Result, TravelOsError};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryStop {
    pub city: String,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: u32,
    pub stops: Vec<ItineraryStop>,
}

impl Itinerary {
    /// Lay out consecutive stays of `days` in every city, starting on `start_date`
    pub fn build(route: &Route, start_date: NaiveDate, days: DaysPerCity) -> Result<Self> {
        let stay = u64::from(days.get());
        let offset = |n: u64| {
            start_date
                .checked_add_days(Days::new(n))
                .ok_or_else(|| TravelOsError::validation(format!("Start date {start_date} is out of range")))
        };

        let mut stops = Vec::with_capacity(route.cities.len());
        for (index, city) in (0u64..).zip(&route.cities) {
            stops.push(ItineraryStop {
                city: city.name.clone(),
                arrival: offset(index * stay)?,
                departure: offset((index + 1) * stay)?,
            });
        }

        let total_days = route.cities.len() as u64 * stay;
        Ok(Self {
            start_date,
            end_date: offset(total_days)?,
            total_days: u32::try_from(total_days).unwrap_or(u32::MAX),
            stops,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_balkan_core_itinerary() {
        let route = Catalog::builtin().route("Balkan Core").unwrap();
        let itinerary =
            Itinerary::build(route, date(2026, 10, 16), DaysPerCity::new(3).unwrap()).unwrap();

        assert_eq!(itinerary.total_days, 9);
        assert_eq!(itinerary.end_date, date(2026, 10, 25));
        assert_eq!(itinerary.stops.len(), 3);
        assert_eq!(itinerary.stops[0].city, "Sofia");
        assert_eq!(itinerary.stops[0].arrival, date(2026, 10, 16));
        assert_eq!(itinerary.stops[0].departure, date(2026, 10, 19));
        assert_eq!(itinerary.stops[2].arrival, date(2026, 10, 22));
        assert_eq!(itinerary.stops[2].departure, itinerary.end_date);
    }

    #[test]
    fn test_itinerary_crosses_month_end() {
        let route = Catalog::builtin().route("Grand Explorer").unwrap();
        let itinerary =
            Itinerary::build(route, date(2026, 12, 28), DaysPerCity::new(7).unwrap()).unwrap();
        assert_eq!(itinerary.total_days, 42);
        assert_eq!(itinerary.end_date, date(2027, 2, 8));
    }

    #[test]
    fn test_out_of_range_start_date() {
        let route = Catalog::builtin().route("Balkan Core").unwrap();
        let result = Itinerary::build(route, NaiveDate::MAX, DaysPerCity::new(1).unwrap());
        assert!(matches!(result, Err(TravelOsError::Validation { .. })));
    }
}
