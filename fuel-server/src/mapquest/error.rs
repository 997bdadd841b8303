//! MapQuest client error types.

use std::fmt;

/// Errors from the MapQuest HTTP client.
#[derive(Debug)]
pub enum MapquestError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// The provider could not route or geocode the request
    /// (non-zero `info.statuscode`, e.g. an unroutable location)
    RouteFailed { statuscode: i32, messages: Vec<String> },

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,

    /// No API key configured
    MissingApiKey,
}

impl fmt::Display for MapquestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapquestError::Http(e) => write!(f, "HTTP error: {e}"),
            MapquestError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            MapquestError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            MapquestError::RouteFailed {
                statuscode,
                messages,
            } => {
                if messages.is_empty() {
                    write!(f, "routing failed (status {statuscode})")
                } else {
                    write!(f, "routing failed: {}", messages.join(", "))
                }
            }
            MapquestError::RateLimited => write!(f, "rate limited by MapQuest API"),
            MapquestError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            MapquestError::MissingApiKey => write!(
                f,
                "MAPQUEST_API_KEY not set; get a free key at https://developer.mapquest.com/"
            ),
        }
    }
}

impl std::error::Error for MapquestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapquestError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MapquestError {
    fn from(err: reqwest::Error) -> Self {
        MapquestError::Http(err)
    }
}
