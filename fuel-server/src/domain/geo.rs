//! Geographic primitives.
//!
//! All distances are in statute miles, since the vehicle range and fuel
//! economy the planner works with are mile-denominated.

use serde::{Deserialize, Serialize};

/// Earth radius in statute miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new point.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance between two points, in miles.
pub fn haversine_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

/// Detour distance incurred by visiting `station` on the way from `point`
/// to `end`, in miles.
///
/// `dist(point → station) + dist(station → end) − dist(point → end)`,
/// clamped to zero. A station exactly on the great-circle path scores ~0.
pub fn deviation_miles(point: GeoPoint, station: GeoPoint, end: GeoPoint) -> f64 {
    let via = haversine_miles(point, station) + haversine_miles(station, end);
    let direct = haversine_miles(point, end);
    (via - direct).max(0.0)
}

/// An axis-aligned latitude/longitude rectangle.
///
/// Degenerate boxes (a single point) are valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Compute the bounding box of a set of points.
    ///
    /// Returns `None` for an empty set.
    pub fn of_points(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };
        for p in &points[1..] {
            bbox.min_lat = bbox.min_lat.min(p.lat);
            bbox.max_lat = bbox.max_lat.max(p.lat);
            bbox.min_lon = bbox.min_lon.min(p.lon);
            bbox.max_lon = bbox.max_lon.max(p.lon);
        }
        Some(bbox)
    }

    /// Return a copy grown by `margin` degrees on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min_lat: self.min_lat - margin,
            max_lat: self.max_lat + margin,
            min_lon: self.min_lon - margin,
            max_lon: self.max_lon + margin,
        }
    }

    /// Check whether a point lies inside the box (inclusive).
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.min_lat
            && p.lat <= self.max_lat
            && p.lon >= self.min_lon
            && p.lon <= self.max_lon
    }
}
