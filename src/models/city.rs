//! City model with price levels, ratings and the derived city score

use serde::{Deserialize, Serialize};

/// Quality ratings for a city, each on a 0-10 scale
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Ratings {
    pub safety: u8,
    pub internet: u8,
    pub walkability: u8,
    pub nightlife: u8,
    pub culture: u8,
}

/// A destination city
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct City {
    /// City name, unique within the catalog
    pub name: String,
    /// Country name
    pub country: String,
    /// Average hotel price in EUR per night
    pub hotel_per_night: f64,
    /// Average food spend in EUR per day
    pub food_per_day: f64,
    /// 0-10 quality ratings
    #[serde(flatten)]
    pub ratings: Ratings,
}

impl City {
    /// Create a new city
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        hotel_per_night: f64,
        food_per_day: f64,
        ratings: Ratings,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            hotel_per_night,
            food_per_day,
            ratings,
        }
    }

    /// Mean of safety, internet, walkability and culture, rounded to 2 decimals
    #[must_use]
    pub fn score(&self) -> f64 {
        let r = &self.ratings;
        let sum = f64::from(r.safety)
            + f64::from(r.internet)
            + f64::from(r.walkability)
            + f64::from(r.culture);
        round_to(sum / 4.0, 2)
    }

    /// Format the city as "Name, Country"
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

fn round_to(value: f64, precision: u32) -> f64 {
    let multiplier = 10_f64.powi(i32::try_from(precision).unwrap_or(2));
    (value * multiplier).round() / multiplier
}
