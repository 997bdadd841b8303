//! Mock MapQuest client for testing without API access.
//!
//! Loads canned directions responses from JSON files and serves them
//! as if they were live API responses.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{LocationQuery, Route};

use super::convert::convert_directions;
use super::error::MapquestError;
use super::types::DirectionsResponse;

/// Mock MapQuest client that serves data from JSON files.
///
/// Useful for development and testing without real API credentials.
#[derive(Debug, Clone)]
pub struct MockMapquestClient {
    /// Pre-loaded responses, keyed by "{from-slug}__{to-slug}".
    responses: HashMap<String, DirectionsResponse>,
}

impl MockMapquestClient {
    /// Create a new mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{from-slug}__{to-slug}.json`, where each slug is
    /// the [`slugify`]'d form of the location query (e.g.
    /// `new-york-ny__los-angeles-ca.json`).
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, MapquestError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| MapquestError::ApiError {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| MapquestError::ApiError {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let key = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| MapquestError::ApiError {
                    status: 0,
                    message: format!("Invalid filename: {:?}", path),
                })?
                .to_string();

            let json = std::fs::read_to_string(&path).map_err(|e| MapquestError::ApiError {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let response: DirectionsResponse =
                serde_json::from_str(&json).map_err(|e| MapquestError::ApiError {
                    status: 0,
                    message: format!("Failed to parse {:?}: {}", path, e),
                })?;

            responses.insert(key, response);
        }

        if responses.is_empty() {
            return Err(MapquestError::ApiError {
                status: 0,
                message: format!("No mock route files found in {:?}", data_dir),
            });
        }

        Ok(Self { responses })
    }

    /// Get the route for a trip, mimicking `MapquestClient::route`.
    pub async fn route(
        &self,
        from: &LocationQuery,
        to: &LocationQuery,
    ) -> Result<Route, MapquestError> {
        let key = format!("{}__{}", slugify(from.as_str()), slugify(to.as_str()));

        let directions = self
            .responses
            .get(&key)
            .ok_or_else(|| MapquestError::ApiError {
                status: 404,
                message: format!(
                    "No mock route for {}. Available: {:?}",
                    key,
                    self.responses.keys().collect::<Vec<_>>()
                ),
            })?;

        if directions.info.statuscode != 0 {
            return Err(MapquestError::RouteFailed {
                statuscode: directions.info.statuscode,
                messages: directions.info.messages.clone(),
            });
        }

        convert_directions(directions).map_err(|e| MapquestError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    /// List the trip keys available in the mock data.
    pub fn available_trips(&self) -> Vec<&str> {
        self.responses.keys().map(String::as_str).collect()
    }
}

/// Reduce a location query to a filename-safe slug: lowercase alphanumerics
/// with runs of anything else collapsed to single hyphens.
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    let mut last_was_dash = true; // suppress a leading dash

    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}
