//! Transport modes and their fixed coefficients

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of transport modes.
///
/// Declaration order is the canonical order used to break scoring ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    Train,
    Plane,
    Bus,
}

impl TransportMode {
    /// All modes in canonical order
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Car,
        TransportMode::Train,
        TransportMode::Plane,
        TransportMode::Bus,
    ];

    /// Price in EUR per kilometer
    #[must_use]
    pub fn price_per_km(self) -> f64 {
        match self {
            TransportMode::Car => 0.25,
            TransportMode::Train => 0.18,
            TransportMode::Plane => 0.45,
            TransportMode::Bus => 0.12,
        }
    }

    /// Average speed in km/h
    #[must_use]
    pub fn speed_kmh(self) -> f64 {
        match self {
            TransportMode::Car => 80.0,
            TransportMode::Train => 130.0,
            TransportMode::Plane => 650.0,
            TransportMode::Bus => 70.0,
        }
    }

    /// Comfort rating (0-10)
    #[must_use]
    pub fn comfort(self) -> u8 {
        match self {
            TransportMode::Car => 7,
            TransportMode::Train => 8,
            TransportMode::Plane => 9,
            TransportMode::Bus => 5,
        }
    }

    /// Eco rating (0-10)
    #[must_use]
    pub fn eco(self) -> u8 {
        match self {
            TransportMode::Car => 6,
            TransportMode::Train => 9,
            TransportMode::Plane => 3,
            TransportMode::Bus => 7,
        }
    }

    /// Cost in EUR for the given distance
    #[must_use]
    pub fn cost(self, distance_km: f64) -> f64 {
        distance_km * self.price_per_km()
    }

    /// Travel time in hours for the given distance
    #[must_use]
    pub fn travel_time_hours(self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh()
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            TransportMode::Car => "🚗",
            TransportMode::Train => "🚆",
            TransportMode::Plane => "✈️",
            TransportMode::Bus => "🚌",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TransportMode::Car => "Car",
            TransportMode::Train => "Train",
            TransportMode::Plane => "Plane",
            TransportMode::Bus => "Bus",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        assert_eq!(
            TransportMode::ALL,
            [
                TransportMode::Car,
                TransportMode::Train,
                TransportMode::Plane,
                TransportMode::Bus
            ]
        );
    }

    #[test]
    fn test_cost_and_time() {
        assert!((TransportMode::Train.cost(600.0) - 108.0).abs() < 1e-9);
        assert!((TransportMode::Car.travel_time_hours(600.0) - 7.5).abs() < 1e-9);
        assert_eq!(TransportMode::Plane.cost(0.0), 0.0);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TransportMode::Plane).unwrap();
        assert_eq!(json, "\"plane\"");
        let mode: TransportMode = serde_json::from_str("\"bus\"").unwrap();
        assert_eq!(mode, TransportMode::Bus);
    }
}
