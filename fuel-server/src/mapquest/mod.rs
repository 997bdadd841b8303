//! MapQuest routing and geocoding client.
//!
//! This module provides an HTTP client for the MapQuest APIs, which supply
//! the geocoded route polyline the planner works over.
//!
//! Key characteristics:
//! - A single Directions call geocodes both endpoints **and** returns the
//!   full route shape, so each trip request costs one provider call
//! - `unit=m` makes all distances statute miles
//! - `shapeFormat=raw` returns the polyline as a flat `[lat, lon, …]` array
//!   rather than an encoded string

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{GeocodedPoint, MapquestClient, MapquestConfig};
pub use convert::{ConversionError, convert_directions};
pub use error::MapquestError;
pub use mock::{MockMapquestClient, slugify};
pub use types::{DirectionsResponse, GeocodeResponse, Info, LatLng, RouteSection, Shape};
