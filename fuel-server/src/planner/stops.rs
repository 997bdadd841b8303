//! Fuel stop selection.
//!
//! A filter → score → greedy-select pass over the route polyline:
//! 1. Coarse bounding-box filter restricts the dataset to the route corridor.
//! 2. The polyline is sampled roughly every 50 miles and walked in order,
//!    tracking remaining range.
//! 3. When range runs low, nearby candidates are scored by
//!    `price + deviation * weight` and the best one becomes the next stop.
//!
//! Deviation is measured against the trip's end point, so a cheap station
//! that drags the vehicle backwards loses to a slightly pricier one that
//! lies ahead on the corridor.

use tracing::{debug, info, warn};

use crate::domain::{FuelStation, GeoPoint, Route, deviation_miles, haversine_miles};
use crate::stations::StationStore;

use super::config::PlannerConfig;

/// A selected refueling stop.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelStop {
    /// The chosen station.
    pub station: FuelStation,

    /// Approximate distance along the route where the stop occurs (miles).
    pub distance_from_start: f64,

    /// Gallons purchased: the distance driven since the previous stop
    /// divided by the vehicle's fuel economy.
    pub gallons: f64,

    /// Cost of this fill-up in USD.
    pub cost: f64,
}

/// Select fuel stops along a route.
///
/// Returns an empty list when the trip fits in a single tank, and also
/// when no stations lie near the route (the trip is still reported, with
/// its sparse coverage visible in the empty stop list).
pub fn find_fuel_stops(
    route: &Route,
    store: &StationStore,
    config: &PlannerConfig,
) -> Vec<FuelStop> {
    if route.distance_miles <= config.vehicle_range_miles {
        info!(
            distance = route.distance_miles,
            "trip fits in one tank, no fuel stops needed"
        );
        return Vec::new();
    }

    let bbox = route.bounding_box().expanded(config.bbox_margin_deg);
    let candidates = store.in_bounds(&bbox);

    if candidates.is_empty() {
        warn!("no fuel stations found in route corridor");
        return Vec::new();
    }

    debug!(count = candidates.len(), "stations in route corridor");

    let samples = sample_points(&route.points, route.distance_miles, config.sample_spacing_miles);

    let mut stops: Vec<FuelStop> = Vec::new();
    let mut remaining_range = config.vehicle_range_miles;
    let mut last_stop = route.start;

    for (i, point) in samples.iter().enumerate() {
        let progress = (i as f64 / samples.len() as f64) * route.distance_miles;

        if remaining_range < config.low_fuel_threshold() && progress < route.distance_miles {
            debug!(progress, remaining_range, "low on fuel, searching for a station");

            match best_candidate(*point, route.end, &candidates, config) {
                Some(station) => {
                    let distance_since_last = haversine_miles(last_stop, station.coords());
                    let gallons = distance_since_last / config.vehicle_mpg;

                    info!(
                        stop = stops.len() + 1,
                        name = %station.name,
                        location = %station.location_display(),
                        price = station.retail_price,
                        "selected fuel stop"
                    );

                    stops.push(FuelStop {
                        station: station.clone(),
                        distance_from_start: progress,
                        gallons,
                        cost: gallons * station.retail_price,
                    });

                    last_stop = station.coords();
                    remaining_range = config.vehicle_range_miles;
                }
                None => {
                    // Sparse corridor: keep driving and retry at the next sample
                    debug!(progress, "no station within search radius");
                }
            }
        }

        if i > 0 {
            remaining_range -= haversine_miles(samples[i - 1], *point);
        }
    }

    stops
}

/// Score the candidates near `point` and return the best one.
///
/// Candidates arrive cheapest-first, and `min_by` keeps the earliest of
/// equal scores, so price ties resolve to the cheaper pump.
fn best_candidate<'a>(
    point: GeoPoint,
    end: GeoPoint,
    candidates: &[&'a FuelStation],
    config: &PlannerConfig,
) -> Option<&'a FuelStation> {
    candidates
        .iter()
        .filter_map(|station| {
            let distance = haversine_miles(point, station.coords());
            if distance > config.search_radius() {
                return None;
            }

            let deviation = deviation_miles(point, station.coords(), end);
            let score = station.retail_price + deviation * config.deviation_weight;

            Some((*station, score))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(station, _)| station)
}

/// Sample the polyline at a stride targeting one point per
/// `spacing_miles` of route distance.
///
/// The first point is always included; the stride is at least 1, so short
/// polylines come back whole.
fn sample_points(points: &[GeoPoint], total_miles: f64, spacing_miles: f64) -> Vec<GeoPoint> {
    let target = (total_miles / spacing_miles) as usize;
    let stride = if target == 0 {
        1
    } else {
        (points.len() / target).max(1)
    };

    points.iter().step_by(stride).copied().collect()
}
