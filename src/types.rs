//! Core types for the geocoding client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinates and precision descriptor for one lookup.
///
/// On a match, `accuracy` carries the provider's location type verbatim
/// (e.g. "ROOFTOP"). When the provider answered without coordinates, the
/// fields hold the synthesized failure shape: zeroed coordinates and an
/// `accuracy` of the form `"<status> WITH STATUSCODE <http code>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lng: f64,
    pub accuracy: String,
    /// Upstream `error_message`, when the response carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Outcome of a lookup that did not fail hard.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The provider matched the query to coordinates.
    Match(GeocodeResult),
    /// The provider answered, but without coordinates. The carried result
    /// holds the synthesized descriptor and any upstream error message.
    NoMatch(GeocodeResult),
    /// The query was empty. No request was issued.
    NoInput,
}

impl Resolution {
    /// The result mapping, if the provider was consulted at all.
    pub fn result(&self) -> Option<&GeocodeResult> {
        match self {
            Self::Match(r) | Self::NoMatch(r) => Some(r),
            Self::NoInput => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }
}

/// Failures that abort a lookup instead of being reported as data.
#[derive(Debug)]
pub enum GeocodeError {
    /// The provider responded with HTTP 503. Only 503 trips this; every
    /// other status is classified from the response body.
    Unavailable(u16),
    /// The request never produced a response (DNS, refused, timeout).
    Network(String),
    /// The body was not JSON, or a non-empty `results` array was missing
    /// the expected geometry keys.
    InvalidResponse(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(code) => {
                write!(f, "could not connect to the geocoding provider, status code {}", code)
            }
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid API response: {}", msg),
        }
    }
}

impl std::error::Error for GeocodeError {}
