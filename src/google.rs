//! Google Maps geocoding provider.

use crate::types::{GeocodeError, GeocodeResult, Resolution};
use crate::Geocode;
use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;

/// Production endpoint of the Google geocoding web service.
pub const GOOGLE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Characters percent-encoded inside a query parameter value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

// ─── Wire format ────────────────────────────────────────────────

/// Response envelope. Every field is tolerated when missing so that error
/// bodies like {"status": "ZERO_RESULTS"} classify instead of failing to
/// deserialize.
#[derive(Deserialize, Debug)]
struct GeocodeResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeHit>,
}

#[derive(Deserialize, Debug)]
struct GeocodeHit {
    geometry: Geometry,
}

#[derive(Deserialize, Debug)]
struct Geometry {
    location: Location,
    location_type: String,
}

#[derive(Deserialize, Debug)]
struct Location {
    lat: f64,
    lng: f64,
}

// ─── Provider ───────────────────────────────────────────────────

/// Geocoder backed by the Google Maps web service.
///
/// Holds a shared [`ureq::Agent`]; connection pooling, timeouts, and TLS are
/// whatever the agent was built with. The geocoder itself keeps no state
/// between calls.
pub struct GoogleGeocoder {
    agent: ureq::Agent,
    endpoint: String,
    api_key: Option<String>,
}

impl GoogleGeocoder {
    pub fn new(agent: ureq::Agent) -> Self {
        Self {
            agent,
            endpoint: GOOGLE_ENDPOINT.to_string(),
            api_key: None,
        }
    }

    /// Point the geocoder at a different endpoint (tests, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Attach an API key, sent as the `key` parameter. Without one the
    /// request goes out keyless.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    fn request_url(&self, query: &str) -> String {
        let mut url = format!(
            "{}?address={}&sensor=false",
            self.endpoint,
            utf8_percent_encode(query, QUERY_VALUE),
        );
        if let Some(key) = &self.api_key {
            url.push_str("&key=");
            url.push_str(&utf8_percent_encode(key, QUERY_VALUE).to_string());
        }
        url
    }
}

impl Geocode for GoogleGeocoder {
    fn coordinates_for(&self, query: &str) -> Result<Resolution, GeocodeError> {
        if query.is_empty() {
            return Ok(Resolution::NoInput);
        }

        let url = self.request_url(query);
        let response = match self.agent.get(&url).call() {
            Ok(r) => r,
            // Non-2xx responses still carry the provider's error envelope.
            Err(ureq::Error::Status(_, r)) => r,
            Err(e) => return Err(GeocodeError::Network(e.to_string())),
        };

        let http_status = response.status();
        if http_status == 503 {
            warn!("geocoding provider unavailable (status 503)");
            return Err(GeocodeError::Unavailable(http_status));
        }

        let body: GeocodeResponse = response
            .into_json()
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

        let resolution = classify(http_status, body);
        match &resolution {
            Resolution::Match(r) => {
                debug!("resolved '{}' to ({}, {}) [{}]", query, r.lat, r.lng, r.accuracy);
            }
            Resolution::NoMatch(r) => {
                warn!("no coordinates for '{}': {}", query, r.accuracy);
            }
            Resolution::NoInput => {}
        }
        Ok(resolution)
    }
}

/// Map the provider envelope to a resolution.
///
/// A non-empty `results` array wins regardless of the `status` field.
/// Anything else becomes a no-match carrying the descriptor synthesized from
/// `status` (empty text when absent) and the HTTP status code.
fn classify(http_status: u16, body: GeocodeResponse) -> Resolution {
    if let Some(hit) = body.results.into_iter().next() {
        return Resolution::Match(GeocodeResult {
            lat: hit.geometry.location.lat,
            lng: hit.geometry.location.lng,
            accuracy: hit.geometry.location_type,
            error_message: None,
        });
    }

    let status = body.status.unwrap_or_default();
    Resolution::NoMatch(GeocodeResult {
        lat: 0.0,
        lng: 0.0,
        accuracy: format!("{} WITH STATUSCODE {}", status, http_status),
        error_message: body.error_message,
    })
}
