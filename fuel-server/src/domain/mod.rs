//! Domain types for the fuel route planner.
//!
//! This module contains the core domain model types that represent
//! validated trip data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod geo;
mod location;
mod route;
mod station;

pub use geo::{BoundingBox, GeoPoint, deviation_miles, haversine_miles};
pub use location::{InvalidLocation, LocationQuery};
pub use route::{InvalidRoute, Route};
pub use station::{FuelStation, InvalidStateCode, StateCode};

pub(crate) use location::normalized;
