//! Trip plan assembly.

use std::sync::Arc;

use crate::domain::Route;
use crate::stations::StationStore;

use super::config::PlannerConfig;
use super::stops::{FuelStop, find_fuel_stops};

/// A fully planned trip: the route plus its selected fuel stops and costs.
#[derive(Debug, Clone)]
pub struct TripPlan {
    /// The routed trip.
    pub route: Arc<Route>,

    /// Selected stops, in driving order.
    pub stops: Vec<FuelStop>,

    /// Fuel the whole trip consumes, in gallons.
    pub total_gallons: f64,

    /// Sum of the fill-up costs, in USD. Zero when no stops are needed.
    pub total_fuel_cost: f64,
}

impl TripPlan {
    /// Plan fuel stops for a route.
    pub fn build(route: Arc<Route>, store: &StationStore, config: &PlannerConfig) -> Self {
        let stops = find_fuel_stops(&route, store, config);

        let total_gallons = route.distance_miles / config.vehicle_mpg;
        let total_fuel_cost = stops.iter().map(|s| s.cost).sum();

        Self {
            route,
            stops,
            total_gallons,
            total_fuel_cost,
        }
    }
}
