//! Transport recommendation
//!
//! Every mode starts at zero and collects points for each selected priority.
//! The highest score wins; ties go to the mode that comes first in
//! [`TransportMode::ALL`].

use crate::models::{Priority, TransportMode, TravelerProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of one transport mode for a given profile and distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportScore {
    pub mode: TransportMode,
    pub score: f64,
}

/// Score a single mode
#[must_use]
pub fn transport_score(mode: TransportMode, profile: &TravelerProfile, distance_km: f64) -> f64 {
    let mut score = 0.0;
    if profile.has(Priority::LowCost) {
        score -= mode.cost(distance_km) / 100.0;
    }
    if profile.has(Priority::Comfort) {
        score += f64::from(mode.comfort()) * 2.0;
    }
    if profile.has(Priority::Eco) {
        score += f64::from(mode.eco()) * 2.0;
    }
    if profile.has(Priority::Fast) {
        score += mode.speed_kmh() / 100.0;
    }
    score
}

/// Score every mode, in canonical order
#[must_use]
pub fn score_transports(profile: &TravelerProfile, distance_km: f64) -> Vec<TransportScore> {
    TransportMode::ALL
        .into_iter()
        .map(|mode| TransportScore {
            mode,
            score: transport_score(mode, profile, distance_km),
        })
        .collect()
}

/// Pick the best transport mode for a profile over `distance_km`
#[instrument(level = "debug", skip(profile), fields(priorities = ?profile.priorities))]
#[must_use]
pub fn recommend_transport(profile: &TravelerProfile, distance_km: f64) -> TransportMode {
    let scores = score_transports(profile, distance_km);

    // Strictly greater only, so the earliest mode keeps a tie.
    let mut best = scores[0];
    for candidate in &scores[1..] {
        if candidate.score > best.score {
            best = *candidate;
        }
    }

    debug!(mode = %best.mode, score = best.score, "Transport recommended");
    best.mode
}
