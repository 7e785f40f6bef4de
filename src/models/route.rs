//! Route model: an ordered multi-city itinerary

use super::City;
use serde::{Deserialize, Serialize};

/// A named, ordered sequence of cities.
///
/// Order is travel order. Routes are only built by the catalog, which
/// guarantees at least one city per route.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Route {
    pub name: String,
    pub cities: Vec<City>,
}

impl Route {
    #[must_use]
    pub fn new(name: impl Into<String>, cities: Vec<City>) -> Self {
        Self {
            name: name.into(),
            cities,
        }
    }

    /// Number of legs between consecutive cities
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// Total distance when every segment has the same length
    #[must_use]
    pub fn distance_km(&self, segment_length_km: f64) -> f64 {
        self.segment_count() as f64 * segment_length_km
    }

    #[must_use]
    pub fn city_names(&self) -> Vec<&str> {
        self.cities.iter().map(|c| c.name.as_str()).collect()
    }

    /// First city with the highest value of `key`, in route order
    pub fn top_city_by<F>(&self, key: F) -> Option<&City>
    where
        F: Fn(&City) -> u8,
    {
        let mut best: Option<&City> = None;
        for city in &self.cities {
            match best {
                Some(current) if key(city) <= key(current) => {}
                _ => best = Some(city),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ratings;

    fn city(name: &str, nightlife: u8) -> City {
        City::new(
            name,
            "Testland",
            10.0,
            5.0,
            Ratings {
                safety: 5,
                internet: 5,
                walkability: 5,
                nightlife,
                culture: 5,
            },
        )
    }

    #[test]
    fn test_segment_count_and_distance() {
        let route = Route::new("Trio", vec![city("A", 1), city("B", 2), city("C", 3)]);
        assert_eq!(route.segment_count(), 2);
        assert_eq!(route.distance_km(300.0), 600.0);
    }

    #[test]
    fn test_single_city_route_has_no_distance() {
        let route = Route::new("Solo", vec![city("A", 1)]);
        assert_eq!(route.segment_count(), 0);
        assert_eq!(route.distance_km(300.0), 0.0);
    }

    #[test]
    fn test_top_city_prefers_first_on_tie() {
        let route = Route::new("Tie", vec![city("A", 4), city("B", 9), city("C", 9)]);
        let top = route.top_city_by(|c| c.ratings.nightlife).unwrap();
        assert_eq!(top.name, "B");
    }

    #[test]
    fn test_top_city_of_empty_route() {
        let route = Route::new("Empty", vec![]);
        assert!(route.top_city_by(|c| c.ratings.nightlife).is_none());
    }
}
