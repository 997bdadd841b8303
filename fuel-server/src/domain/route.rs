//! Route geometry returned by the routing provider.

use super::geo::{BoundingBox, GeoPoint};

/// Error returned when constructing an invalid route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route: {0}")]
pub struct InvalidRoute(&'static str);

/// A routed path between two geocoded locations.
///
/// The polyline is ordered from start to end. `distance_miles` is the
/// provider-reported driving distance, which is what range and fuel math
/// use; the polyline itself is only sampled for geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Ordered polyline from start to end.
    pub points: Vec<GeoPoint>,

    /// Driving distance in miles, as reported by the provider.
    pub distance_miles: f64,

    /// Geocoded start location.
    pub start: GeoPoint,

    /// Geocoded end location.
    pub end: GeoPoint,
}

impl Route {
    /// Create a route, validating the geometry.
    ///
    /// Requires at least two polyline points and a non-negative distance.
    pub fn new(
        points: Vec<GeoPoint>,
        distance_miles: f64,
        start: GeoPoint,
        end: GeoPoint,
    ) -> Result<Self, InvalidRoute> {
        if points.len() < 2 {
            return Err(InvalidRoute("polyline must have at least two points"));
        }
        if !distance_miles.is_finite() || distance_miles < 0.0 {
            return Err(InvalidRoute("distance must be a non-negative number"));
        }

        Ok(Self {
            points,
            distance_miles,
            start,
            end,
        })
    }

    /// Bounding box covering every polyline point.
    pub fn bounding_box(&self) -> BoundingBox {
        // The constructor guarantees a non-empty polyline
        BoundingBox::of_points(&self.points).unwrap()
    }
}
