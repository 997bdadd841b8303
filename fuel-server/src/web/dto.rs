//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::{FuelStop, TripPlan};
use crate::stations::StationStats;

/// Request to optimize a route.
#[derive(Debug, Deserialize)]
pub struct OptimizeRouteRequest {
    /// Starting location within the USA (e.g. "New York, NY")
    pub start: String,

    /// Destination location within the USA (e.g. "Los Angeles, CA")
    pub end: String,
}

/// GeoJSON LineString geometry for the route.
#[derive(Debug, Serialize)]
pub struct RouteGeometry {
    #[serde(rename = "type")]
    pub geometry_type: &'static str,

    /// Coordinates in GeoJSON order: `[lon, lat]`.
    pub coordinates: Vec<[f64; 2]>,
}

/// A fuel stop in the response.
#[derive(Debug, Serialize)]
pub struct FuelStopResult {
    /// OPIS truckstop id
    pub opis_id: u32,

    /// Station name
    pub name: String,

    /// City
    pub city: String,

    /// Two-letter state code
    pub state: String,

    /// Price per gallon at this stop (USD)
    pub price: f64,

    /// Station coordinates as `[lat, lon]`
    pub coordinates: [f64; 2],

    /// Approximate distance along the route (miles)
    pub distance_from_start: f64,

    /// Gallons purchased at this stop
    pub gallons_needed: f64,

    /// Cost of this fill-up (USD)
    pub cost_at_stop: f64,
}

impl FuelStopResult {
    /// Build from a planner stop, rounding the money fields.
    pub fn from_stop(stop: &FuelStop) -> Self {
        Self {
            opis_id: stop.station.opis_id,
            name: stop.station.name.clone(),
            city: stop.station.city.clone(),
            state: stop.station.state.as_str().to_string(),
            price: stop.station.retail_price,
            coordinates: [stop.station.latitude, stop.station.longitude],
            distance_from_start: stop.distance_from_start,
            gallons_needed: round2(stop.gallons),
            cost_at_stop: round2(stop.cost),
        }
    }
}

/// Response for route optimization.
#[derive(Debug, Serialize)]
pub struct OptimizeRouteResponse {
    /// The route as GeoJSON
    pub route_geometry: RouteGeometry,

    /// Total driving distance (miles, 1 decimal)
    pub total_distance_miles: f64,

    /// Total spent on fuel (USD, 2 decimals)
    pub total_fuel_cost: f64,

    /// Fuel the trip consumes (gallons, 1 decimal)
    pub estimated_gallons: f64,

    /// Selected stops, in driving order
    pub fuel_stops: Vec<FuelStopResult>,

    /// Number of stops
    pub stops_count: usize,
}

impl OptimizeRouteResponse {
    /// Build the response from a trip plan.
    pub fn from_plan(plan: &TripPlan) -> Self {
        let coordinates = plan
            .route
            .points
            .iter()
            .map(|p| [p.lon, p.lat]) // GeoJSON wants [lon, lat]
            .collect();

        let fuel_stops: Vec<FuelStopResult> =
            plan.stops.iter().map(FuelStopResult::from_stop).collect();

        Self {
            route_geometry: RouteGeometry {
                geometry_type: "LineString",
                coordinates,
            },
            total_distance_miles: round1(plan.route.distance_miles),
            total_fuel_cost: round2(plan.total_fuel_cost),
            estimated_gallons: round1(plan.total_gallons),
            stops_count: fuel_stops.len(),
            fuel_stops,
        }
    }
}

/// Response for the health check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Response for station statistics.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_stations: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub states_covered: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheapest_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_price: Option<f64>,

    /// Operator hint, only present when the dataset is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl StatsResponse {
    /// Build from station store statistics.
    pub fn from_stats(stats: &StationStats) -> Self {
        if stats.total == 0 {
            return Self {
                total_stations: 0,
                states_covered: None,
                cheapest_price: None,
                highest_price: None,
                message: Some(
                    "No fuel stations loaded. Point FUEL_STATIONS_CSV at a geocoded dataset.",
                ),
            };
        }

        Self {
            total_stations: stats.total,
            states_covered: Some(stats.states),
            cheapest_price: stats.cheapest_price,
            highest_price: stats.highest_price,
            message: None,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Round to 1 decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to 2 decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FuelStation, GeoPoint, Route, StateCode};
    use crate::planner::{PlannerConfig, TripPlan};
    use crate::stations::StationStore;
    use std::sync::Arc;

    #[test]
    fn rounding() {
        assert_eq!(round1(789.54), 789.5);
        assert_eq!(round1(2.25), 2.3);
        assert_eq!(round2(96.728), 96.73);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn geometry_is_lon_lat_ordered() {
        let route = Arc::new(
            Route::new(
                vec![GeoPoint::new(40.71, -74.0), GeoPoint::new(41.88, -87.63)],
                789.5,
                GeoPoint::new(40.71, -74.0),
                GeoPoint::new(41.88, -87.63),
            )
            .unwrap(),
        );
        let plan = TripPlan::build(route, &StationStore::default(), &PlannerConfig::default());

        let resp = OptimizeRouteResponse::from_plan(&plan);

        assert_eq!(resp.route_geometry.geometry_type, "LineString");
        assert_eq!(resp.route_geometry.coordinates[0], [-74.0, 40.71]);
        assert_eq!(resp.total_distance_miles, 789.5);
        assert_eq!(resp.estimated_gallons, 79.0); // 78.95 rounded
        assert_eq!(resp.total_fuel_cost, 0.0);
        assert_eq!(resp.stops_count, 0);
    }

    #[test]
    fn fuel_stop_result_rounds_money_fields() {
        let stop = crate::planner::FuelStop {
            station: FuelStation {
                opis_id: 42,
                name: "Station".to_string(),
                address: String::new(),
                city: "Town".to_string(),
                state: StateCode::parse("NE").unwrap(),
                retail_price: 3.199,
                latitude: 41.0,
                longitude: -102.0,
            },
            distance_from_start: 425.25,
            gallons: 47.6412,
            cost: 152.404,
        };

        let result = FuelStopResult::from_stop(&stop);

        assert_eq!(result.gallons_needed, 47.64);
        assert_eq!(result.cost_at_stop, 152.4);
        assert_eq!(result.coordinates, [41.0, -102.0]); // [lat, lon]
        assert_eq!(result.state, "NE");
    }

    #[test]
    fn stats_response_for_empty_store() {
        let stats = crate::stations::StationStats {
            total: 0,
            states: 0,
            cheapest_price: None,
            highest_price: None,
        };

        let resp = StatsResponse::from_stats(&stats);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["total_stations"], 0);
        assert!(json.get("cheapest_price").is_none());
        assert!(json["message"].is_string());
    }

    #[test]
    fn stats_response_for_populated_store() {
        let stats = crate::stations::StationStats {
            total: 8000,
            states: 48,
            cheapest_price: Some(2.59),
            highest_price: Some(5.19),
        };

        let resp = StatsResponse::from_stats(&stats);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["total_stations"], 8000);
        assert_eq!(json["states_covered"], 48);
        assert_eq!(json["cheapest_price"], 2.59);
        assert!(json.get("message").is_none());
    }
}
