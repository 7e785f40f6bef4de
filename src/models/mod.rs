//! Data models for the TravelOS application
//!
//! This module contains the core domain models organized by concern:
//! - City: destination attributes and the derived city score
//! - Route: ordered multi-city itineraries
//! - Transport: the closed set of transport modes and their coefficients
//! - Profile: traveler budget, stay length and priorities

pub mod city;
pub mod profile;
pub mod route;
pub mod transport;

// Re-export all public types for convenient access
pub use city::{City, Ratings};
pub use profile::{Budget, DaysPerCity, Priority, TravelerProfile};
pub use route::Route;
pub use transport::TransportMode;
