//! Conversion from MapQuest DTOs to domain types.

use crate::domain::{GeoPoint, Route};

use super::types::DirectionsResponse;

/// Error converting a provider response into domain types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Response carried no route section
    #[error("response contains no route")]
    MissingRoute,

    /// Route carried no shape (fullShape not honoured?)
    #[error("route contains no shape points")]
    MissingShape,

    /// Flat shape array had an odd number of values
    #[error("shape points array has an odd length ({0})")]
    OddShapePoints(usize),

    /// Fewer than two geocoded locations came back
    #[error("expected start and end locations, got {0}")]
    MissingLocations(usize),

    /// Geometry failed domain validation
    #[error("invalid route geometry: {0}")]
    InvalidGeometry(String),
}

/// Convert a successful directions response into a domain [`Route`].
///
/// The caller is expected to have already rejected responses with a
/// non-zero `info.statuscode`.
pub fn convert_directions(resp: &DirectionsResponse) -> Result<Route, ConversionError> {
    let section = resp.route.as_ref().ok_or(ConversionError::MissingRoute)?;

    let shape = section.shape.as_ref().ok_or(ConversionError::MissingShape)?;
    let raw = &shape.shape_points;

    if raw.len() % 2 != 0 {
        return Err(ConversionError::OddShapePoints(raw.len()));
    }
    if raw.is_empty() {
        return Err(ConversionError::MissingShape);
    }

    // shapeFormat=raw yields a flat [lat, lon, lat, lon, …] array
    let points: Vec<GeoPoint> = raw
        .chunks_exact(2)
        .map(|pair| GeoPoint::new(pair[0], pair[1]))
        .collect();

    if section.locations.len() < 2 {
        return Err(ConversionError::MissingLocations(section.locations.len()));
    }

    let start_ll = section.locations[0].lat_lng;
    let end_ll = section.locations[1].lat_lng;

    Route::new(
        points,
        section.distance,
        GeoPoint::new(start_ll.lat, start_ll.lng),
        GeoPoint::new(end_ll.lat, end_ll.lng),
    )
    .map_err(|e| ConversionError::InvalidGeometry(e.to_string()))
}
