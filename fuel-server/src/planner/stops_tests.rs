//! Scenario tests for fuel stop selection.
//!
//! Routes run along the 40th parallel, built point-by-point so distances
//! are real haversine miles (one degree of longitude at this latitude is
//! about 53 miles).

use std::sync::Arc;

use super::*;
use crate::domain::{FuelStation, GeoPoint, Route, StateCode, haversine_miles};
use crate::stations::StationStore;

/// Build a west-to-east route along latitude 40 with 0.1-degree steps.
/// The reported distance is the summed haversine length of the polyline.
fn lat40_route(from_lon: f64, to_lon: f64) -> Route {
    let steps = ((to_lon - from_lon) / 0.1).round() as usize;
    let points: Vec<GeoPoint> = (0..=steps)
        .map(|i| GeoPoint::new(40.0, from_lon + i as f64 * 0.1))
        .collect();

    let distance: f64 = points
        .windows(2)
        .map(|w| haversine_miles(w[0], w[1]))
        .sum();

    Route::new(
        points.clone(),
        distance,
        points[0],
        *points.last().unwrap(),
    )
    .unwrap()
}

fn station(opis_id: u32, lat: f64, lon: f64, price: f64) -> FuelStation {
    FuelStation {
        opis_id,
        name: format!("Station {opis_id}"),
        address: String::new(),
        city: "Town".to_string(),
        state: StateCode::parse("KS").unwrap(),
        retail_price: price,
        latitude: lat,
        longitude: lon,
    }
}

#[test]
fn trip_within_range_needs_no_stops() {
    // ~423 miles, well under the 500-mile tank
    let route = lat40_route(-100.0, -92.0);
    let store = StationStore::new(vec![station(1, 40.0, -96.0, 2.50)]);

    let stops = find_fuel_stops(&route, &store, &PlannerConfig::default());

    assert!(stops.is_empty());
}

#[test]
fn trip_exactly_at_range_boundary_needs_no_stops() {
    let route = Route::new(
        vec![GeoPoint::new(40.0, -100.0), GeoPoint::new(40.0, -90.6)],
        500.0,
        GeoPoint::new(40.0, -100.0),
        GeoPoint::new(40.0, -90.6),
    )
    .unwrap();
    let store = StationStore::new(vec![station(1, 40.0, -95.0, 2.50)]);

    let stops = find_fuel_stops(&route, &store, &PlannerConfig::default());

    assert!(stops.is_empty());
}

#[test]
fn empty_corridor_yields_no_stops() {
    // ~598 miles but no stations at all
    let route = lat40_route(-100.0, -88.7);

    let stops = find_fuel_stops(&route, &StationStore::default(), &PlannerConfig::default());

    assert!(stops.is_empty());
}

#[test]
fn single_stop_on_a_600_mile_trip() {
    let route = lat40_route(-100.0, -88.7);
    let s = station(1, 40.3, -91.0, 3.50);
    let store = StationStore::new(vec![s.clone()]);

    let stops = find_fuel_stops(&route, &store, &PlannerConfig::default());

    assert_eq!(stops.len(), 1);
    let stop = &stops[0];
    assert_eq!(stop.station.opis_id, 1);

    // Gallons reflect the haversine distance from the route start
    let expected_gallons = haversine_miles(route.start, s.coords()) / 10.0;
    assert!((stop.gallons - expected_gallons).abs() < 1e-9);
    assert!((stop.cost - stop.gallons * 3.50).abs() < 1e-9);

    // The stop happens before the trip ends
    assert!(stop.distance_from_start > 0.0);
    assert!(stop.distance_from_start < route.distance_miles);
}

#[test]
fn stations_outside_bounding_box_are_never_considered() {
    let route = lat40_route(-100.0, -88.7);

    // The cheap station sits 1.2 degrees north of the route: inside the
    // 100-mile search radius but outside the 0.5-degree corridor margin.
    let cheap_outside = station(1, 41.2, -91.0, 2.00);
    let pricey_inside = station(2, 40.3, -91.0, 3.50);
    let store = StationStore::new(vec![cheap_outside, pricey_inside]);

    let stops = find_fuel_stops(&route, &store, &PlannerConfig::default());

    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].station.opis_id, 2);
}

#[test]
fn no_station_within_radius_means_no_stop() {
    let route = lat40_route(-100.0, -88.7);

    // In the corridor near the start, but the planner only looks for fuel
    // once range runs low, hundreds of miles east of this station.
    let store = StationStore::new(vec![station(1, 40.5, -100.5, 2.00)]);

    let stops = find_fuel_stops(&route, &store, &PlannerConfig::default());

    assert!(stops.is_empty());
}

#[test]
fn deviation_penalty_beats_a_cheaper_station_behind_the_vehicle() {
    // ~1323 miles: refueling starts around longitude -92
    let route = lat40_route(-100.0, -75.0);

    // Station 1 is cheaper but ~58 miles behind the low-fuel point, so its
    // detour penalty (~116 miles * 0.1) dwarfs the price advantage of
    // station 2, which lies directly ahead on the route.
    let cheap_behind = station(1, 40.0, -93.0, 2.80);
    let ahead_on_path = station(2, 40.0, -91.0, 3.20);
    let mid = station(3, 40.0, -84.0, 3.00);
    let late = station(4, 40.0, -77.0, 3.10);
    let store = StationStore::new(vec![cheap_behind, ahead_on_path, mid, late]);

    let stops = find_fuel_stops(&route, &store, &PlannerConfig::default());

    let ids: Vec<u32> = stops.iter().map(|s| s.station.opis_id).collect();
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn cross_country_trip_respects_the_tank_range() {
    let route = lat40_route(-100.0, -75.0);
    let store = StationStore::new(vec![
        station(2, 40.0, -91.0, 3.20),
        station(3, 40.0, -84.0, 3.00),
        station(4, 40.0, -77.0, 3.10),
    ]);

    let stops = find_fuel_stops(&route, &store, &PlannerConfig::default());
    assert_eq!(stops.len(), 3);

    // Stop positions increase monotonically along the route
    for pair in stops.windows(2) {
        assert!(pair[0].distance_from_start < pair[1].distance_from_start);
    }

    // No leg between consecutive stops exceeds a full tank
    let mut prev = route.start;
    for stop in &stops {
        let leg = haversine_miles(prev, stop.station.coords());
        assert!(leg <= 500.0, "leg of {leg} miles exceeds tank range");
        prev = stop.station.coords();
    }

    // Each fill-up is priced from its own leg
    for stop in &stops {
        assert!((stop.cost - stop.gallons * stop.station.retail_price).abs() < 1e-9);
        assert!(stop.gallons > 0.0);
    }
}

#[test]
fn trip_plan_totals_add_up() {
    let route = Arc::new(lat40_route(-100.0, -75.0));
    let store = StationStore::new(vec![
        station(2, 40.0, -91.0, 3.20),
        station(3, 40.0, -84.0, 3.00),
        station(4, 40.0, -77.0, 3.10),
    ]);

    let plan = TripPlan::build(route.clone(), &store, &PlannerConfig::default());

    assert_eq!(plan.stops.len(), 3);
    assert!((plan.total_gallons - route.distance_miles / 10.0).abs() < 1e-9);

    let sum: f64 = plan.stops.iter().map(|s| s.cost).sum();
    assert!((plan.total_fuel_cost - sum).abs() < 1e-9);
}

#[test]
fn a_tighter_tank_buys_more_stops() {
    let route = lat40_route(-100.0, -75.0);
    let store = StationStore::new(vec![
        station(1, 40.0, -95.0, 3.00),
        station(2, 40.0, -91.0, 3.20),
        station(3, 40.0, -87.0, 3.10),
        station(4, 40.0, -84.0, 3.00),
        station(5, 40.0, -80.0, 3.05),
        station(6, 40.0, -77.0, 3.10),
    ]);

    let default_config = PlannerConfig::default();
    let tight_config = PlannerConfig {
        vehicle_range_miles: 300.0,
        ..PlannerConfig::default()
    };

    let default_stops = find_fuel_stops(&route, &store, &default_config);
    let tight_stops = find_fuel_stops(&route, &store, &tight_config);

    assert!(
        tight_stops.len() > default_stops.len(),
        "tight: {}, default: {}",
        tight_stops.len(),
        default_stops.len()
    );
}
