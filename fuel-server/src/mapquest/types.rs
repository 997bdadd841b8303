//! MapQuest API response DTOs.
//!
//! These types map directly to the MapQuest Directions and Geocoding JSON
//! responses. Only the fields the planner needs are modelled; everything
//! else is ignored during deserialization.

use serde::Deserialize;

/// Response from the Directions API (`directions/v2/route`).
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Request status and any provider messages.
    pub info: Info,

    /// The computed route. Absent when the request failed.
    pub route: Option<RouteSection>,
}

/// Status block present on every MapQuest response.
#[derive(Debug, Clone, Deserialize)]
pub struct Info {
    /// 0 on success; non-zero codes indicate provider-side failures
    /// (e.g. 402 for an unroutable location).
    pub statuscode: i32,

    /// Human-readable error messages accompanying a failure.
    #[serde(default)]
    pub messages: Vec<String>,
}

/// The route portion of a directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteSection {
    /// Total driving distance. Already in miles (`unit=m` is requested).
    pub distance: f64,

    /// Full route geometry. Present when `fullShape=true` is requested.
    pub shape: Option<Shape>,

    /// Geocoded request locations, in request order (start, end).
    #[serde(default)]
    pub locations: Vec<RouteLocation>,
}

/// Route geometry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Flat `[lat0, lon0, lat1, lon1, …]` array (`shapeFormat=raw`).
    pub shape_points: Vec<f64>,
}

/// A geocoded location on the route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLocation {
    pub lat_lng: LatLng,
}

/// A latitude/longitude pair as MapQuest spells it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Response from the Geocoding API (`geocoding/v1/address`).
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

/// One geocoding result (per input location).
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub locations: Vec<GeocodeLocation>,
}

/// A candidate location for a geocoded address.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeLocation {
    pub lat_lng: LatLng,

    /// Match quality, e.g. "POINT", "ADDRESS", "CITY".
    pub geocode_quality: Option<String>,
}
