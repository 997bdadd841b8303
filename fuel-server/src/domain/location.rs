//! Free-text location queries.

use std::fmt;

/// Error returned when a location query is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location: {reason}")]
pub struct InvalidLocation {
    reason: &'static str,
}

/// Maximum accepted length for a location query.
const MAX_LEN: usize = 200;

/// A free-text location within the USA, e.g. "New York, NY".
///
/// The provider geocodes these; we only guard against garbage input.
/// Valid by construction: trimmed, non-empty, at most 200 characters, and
/// containing only ASCII letters, digits, spaces, commas, periods, and
/// hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Parse a location query from raw user input.
    ///
    /// Leading and trailing whitespace is stripped before validation.
    pub fn parse(s: &str) -> Result<Self, InvalidLocation> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidLocation {
                reason: "must not be empty",
            });
        }

        if trimmed.len() > MAX_LEN {
            return Err(InvalidLocation {
                reason: "must be at most 200 characters",
            });
        }

        for c in trimmed.chars() {
            if !(c.is_ascii_alphanumeric() || matches!(c, ' ' | ',' | '.' | '-')) {
                return Err(InvalidLocation {
                    reason: "may only contain letters, digits, spaces, commas, periods, and hyphens",
                });
            }
        }

        Ok(LocationQuery(trimmed.to_string()))
    }

    /// Returns the query as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case- and whitespace-insensitive equality, used to reject trips where
    /// start and end are the same place spelled differently.
    pub fn same_place(&self, other: &LocationQuery) -> bool {
        normalized(&self.0) == normalized(&other.0)
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase with internal whitespace runs collapsed to single spaces.
pub(crate) fn normalized(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_typical_locations() {
        assert!(LocationQuery::parse("New York, NY").is_ok());
        assert!(LocationQuery::parse("Los Angeles, CA").is_ok());
        assert!(LocationQuery::parse("1600 Pennsylvania Ave.").is_ok());
        assert!(LocationQuery::parse("Winston-Salem, NC").is_ok());
    }

    #[test]
    fn parse_trims_whitespace() {
        let q = LocationQuery::parse("  Chicago, IL  ").unwrap();
        assert_eq!(q.as_str(), "Chicago, IL");
    }

    #[test]
    fn reject_empty_and_blank() {
        assert!(LocationQuery::parse("").is_err());
        assert!(LocationQuery::parse("   ").is_err());
    }

    #[test]
    fn reject_too_long() {
        let long = "a".repeat(201);
        assert!(LocationQuery::parse(&long).is_err());

        let max = "a".repeat(200);
        assert!(LocationQuery::parse(&max).is_ok());
    }

    #[test]
    fn reject_disallowed_characters() {
        assert!(LocationQuery::parse("Denver; DROP TABLE").is_err());
        assert!(LocationQuery::parse("Paris <b>").is_err());
        assert!(LocationQuery::parse("São Paulo").is_err());
        assert!(LocationQuery::parse("a/b").is_err());
    }

    #[test]
    fn same_place_ignores_case_and_spacing() {
        let a = LocationQuery::parse("New York, NY").unwrap();
        let b = LocationQuery::parse("new  york,   ny").unwrap();
        let c = LocationQuery::parse("Los Angeles, CA").unwrap();

        assert!(a.same_place(&b));
        assert!(!a.same_place(&c));
    }
}
