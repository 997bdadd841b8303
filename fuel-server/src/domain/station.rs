//! Fuel station types.

use std::fmt;

use serde::Serialize;

use super::geo::GeoPoint;

/// Error returned when parsing an invalid state code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid state code: {reason}")]
pub struct InvalidStateCode {
    reason: &'static str,
}

/// A valid two-letter US state abbreviation (e.g. "CA", "NY").
///
/// State codes are always 2 uppercase ASCII letters. This type guarantees
/// that any `StateCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::StateCode;
///
/// let ca = StateCode::parse("CA").unwrap();
/// assert_eq!(ca.as_str(), "CA");
///
/// // Lowercase is rejected
/// assert!(StateCode::parse("ca").is_err());
///
/// // Wrong length is rejected
/// assert!(StateCode::parse("C").is_err());
/// assert!(StateCode::parse("CAL").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateCode([u8; 2]);

impl StateCode {
    /// Parse a state code from a string.
    ///
    /// The input must be exactly 2 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStateCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidStateCode {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidStateCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(StateCode([bytes[0], bytes[1]]))
    }

    /// Returns the state code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only valid ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateCode({})", self.as_str())
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StateCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A fuel station with geocoded coordinates and price information.
///
/// Produced by the CSV importer, which guarantees the field invariants:
/// `retail_price` is in `[0, 10]` USD/gallon, coordinates are in range,
/// and text fields are trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelStation {
    /// Unique OPIS truckstop id.
    pub opis_id: u32,

    /// Station name.
    pub name: String,

    /// Street address (may be empty).
    pub address: String,

    /// City name.
    pub city: String,

    /// Two-letter state code.
    pub state: StateCode,

    /// Retail fuel price in USD per gallon.
    pub retail_price: f64,

    /// Geocoded latitude.
    pub latitude: f64,

    /// Geocoded longitude.
    pub longitude: f64,
}

impl FuelStation {
    /// The station's coordinates as a point.
    pub fn coords(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// "City, ST" display form.
    pub fn location_display(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

impl fmt::Display for FuelStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}, {} (${:.3}/gal)",
            self.name, self.city, self.state, self.retail_price
        )
    }
}
