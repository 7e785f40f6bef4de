//! Plain-text rendering of reports and catalog listings

use crate::catalog::Catalog;
use crate::planner::costs::format_eur;
use crate::planner::{CityCard, TripReport};
use std::fmt::{self, Display};

impl Display for TripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🌍 TravelOS: {}", self.route)?;
        writeln!(f)?;
        writeln!(f, "   Route length:          {:.0} km", self.distance_km)?;
        writeln!(
            f,
            "   Recommended transport: {} {}",
            self.transport.icon(),
            self.transport
        )?;
        writeln!(f, "   Cities:                {}", self.city_count)?;
        writeln!(f, "   Days:                  {}", self.total_days)?;
        writeln!(
            f,
            "   Dates:                 {} → {}",
            self.itinerary.start_date, self.itinerary.end_date
        )?;
        if !self.profile.priorities.is_empty() {
            let labels: Vec<&str> = self.profile.priorities.iter().map(|p| p.label()).collect();
            writeln!(f, "   Priorities:            {}", labels.join(", "))?;
        }

        writeln!(f)?;
        writeln!(f, "🏙️  City Intelligence")?;
        for (card, stop) in self.cities.iter().zip(&self.itinerary.stops) {
            write!(f, "{card}")?;
            writeln!(f, "   📅 {} → {}", stop.arrival, stop.departure)?;
        }

        writeln!(f)?;
        writeln!(f, "💰 Cost Breakdown")?;
        writeln!(f, "   Hotels:    {}", format_eur(self.costs.hotel_total))?;
        writeln!(f, "   Food:      {}", format_eur(self.costs.food_total))?;
        writeln!(
            f,
            "   Transport: {} ({:.1} h on the road)",
            format_eur(self.costs.transport_cost),
            self.costs.transport_time_hours
        )?;
        writeln!(f, "   💵 Total:  {}", format_eur(self.costs.grand_total))?;
        writeln!(
            f,
            "   {} Budget risk: {} ({:.0}% of {})",
            self.risk.marker(),
            self.risk,
            self.budget_ratio * 100.0,
            format_eur(self.profile.budget.amount())
        )?;

        if !self.insights.is_empty() {
            writeln!(f)?;
            writeln!(f, "🧠 System Insights")?;
            for insight in &self.insights {
                writeln!(f, "   {insight}")?;
            }
        }
        Ok(())
    }
}

impl Display for CityCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let city = &self.city;
        let r = &city.ratings;
        writeln!(f, "📍 {}", city.display_name())?;
        writeln!(
            f,
            "   🏨 Hotel: {}/night | 🍽️ Food: {}/day",
            format_eur(city.hotel_per_night),
            format_eur(city.food_per_day)
        )?;
        writeln!(
            f,
            "   🛡️ Safety: {}/10 | 🛜 Internet: {}/10 | 🚶 Walkability: {}/10",
            r.safety, r.internet, r.walkability
        )?;
        writeln!(
            f,
            "   🎭 Culture: {}/10 | 🌃 Nightlife: {}/10",
            r.culture, r.nightlife
        )?;
        writeln!(f, "   ⭐ City score: {}/10", self.score)
    }
}

/// Render every city of the catalog
#[must_use]
pub fn render_cities(catalog: &Catalog) -> String {
    catalog
        .cities()
        .iter()
        .map(|city| CityCard::from(city).to_string())
        .collect()
}

/// Render every route with its stops and distance
#[must_use]
pub fn render_routes(catalog: &Catalog, segment_length_km: f64) -> String {
    catalog
        .routes()
        .iter()
        .map(|route| {
            format!(
                "🗺️  {} ({:.0} km): {}\n",
                route.name,
                route.distance_km(segment_length_km),
                route.city_names().join(" → ")
            )
        })
        .collect()
}
