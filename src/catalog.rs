//! Static travel catalog
//!
//! The built-in cities and routes are authored as plain tables and resolved
//! once into an immutable [`Catalog`]. Route integrity (non-empty, every city
//! known) is checked while resolving; a violation in the built-in tables is a
//! programming error and aborts on first access.

use crate::models::{City, Ratings, Route};
use crate::{Result, TravelOsError};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Uniform distance between two consecutive cities of a route
pub const DEFAULT_SEGMENT_LENGTH_KM: f64 = 300.0;

/// One row of the city table:
/// name, country, hotel, food, safety, internet, walkability, nightlife, culture
type CityRow = (&'static str, &'static str, f64, f64, u8, u8, u8, u8, u8);

const CITY_TABLE: &[CityRow] = &[
    ("Sofia", "Bulgaria", 70.0, 20.0, 7, 8, 6, 6, 8),
    ("Belgrade", "Serbia", 65.0, 22.0, 6, 7, 6, 7, 7),
    ("Budapest", "Hungary", 75.0, 23.0, 8, 8, 7, 8, 8),
    ("Vienna", "Austria", 95.0, 30.0, 9, 9, 8, 6, 9),
    ("Prague", "Czech Republic", 85.0, 25.0, 8, 8, 9, 7, 9),
    ("Munich", "Germany", 100.0, 28.0, 9, 9, 8, 6, 8),
];

const ROUTE_TABLE: &[(&str, &[&str])] = &[
    ("Balkan Core", &["Sofia", "Belgrade", "Budapest"]),
    ("Central Europe", &["Munich", "Vienna", "Prague", "Budapest"]),
    (
        "Grand Explorer",
        &["Sofia", "Belgrade", "Budapest", "Vienna", "Prague", "Munich"],
    ),
];

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let cities = CITY_TABLE.iter().map(city_from_row).collect();
    Catalog::from_tables(cities, ROUTE_TABLE)
        .unwrap_or_else(|err| panic!("built-in catalog is invalid: {err}"))
});

fn city_from_row(row: &CityRow) -> City {
    let &(name, country, hotel, food, safety, internet, walkability, nightlife, culture) = row;
    City::new(
        name,
        country,
        hotel,
        food,
        Ratings {
            safety,
            internet,
            walkability,
            nightlife,
            culture,
        },
    )
}

/// Immutable lookup of cities and routes
#[derive(Debug, Clone)]
pub struct Catalog {
    cities: Vec<City>,
    routes: Vec<Route>,
}

impl Catalog {
    /// The built-in catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Resolve route tables against a city list, checking integrity
    pub fn from_tables(cities: Vec<City>, routes: &[(&str, &[&str])]) -> Result<Self> {
        let mut seen = HashSet::new();
        for city in &cities {
            if !seen.insert(city.name.as_str()) {
                return Err(TravelOsError::catalog(format!(
                    "duplicate city '{}'",
                    city.name
                )));
            }
        }

        let mut resolved = Vec::with_capacity(routes.len());
        for &(route_name, stops) in routes {
            if stops.is_empty() {
                return Err(TravelOsError::catalog(format!(
                    "route '{route_name}' has no cities"
                )));
            }

            let stops = stops
                .iter()
                .map(|stop| {
                    cities
                        .iter()
                        .find(|c| c.name == *stop)
                        .cloned()
                        .ok_or_else(|| {
                            TravelOsError::catalog(format!(
                                "route '{route_name}' references unknown city '{stop}'"
                            ))
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            resolved.push(Route::new(route_name, stops));
        }

        debug!(
            cities = cities.len(),
            routes = resolved.len(),
            "Catalog loaded"
        );

        Ok(Self {
            cities,
            routes: resolved,
        })
    }

    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Look up a route by name, ignoring case and surrounding whitespace
    pub fn route(&self, name: &str) -> Result<&Route> {
        let wanted = name.trim();
        self.routes
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<&str> = self.routes.iter().map(|r| r.name.as_str()).collect();
                TravelOsError::validation(format!(
                    "Unknown route '{name}'. Must be one of: {}",
                    names.join(", ")
                ))
            })
    }
}
