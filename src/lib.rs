//! Address geocoding over the Google Maps web service.
//!
//! One contract, one provider: [`Geocode`] declares the lookup operation and
//! [`GoogleGeocoder`] implements it with a single blocking GET per call.
//! Provider answers without coordinates come back as data, not errors; only
//! an HTTP 503 or a transport-level failure aborts the lookup.

pub mod google;
pub mod types;

pub use google::{GoogleGeocoder, GOOGLE_ENDPOINT};
pub use types::{GeocodeError, GeocodeResult, Resolution};

/// Lookup contract: resolve a free-text address to coordinates.
///
/// The trait is the seam for alternative providers; [`GoogleGeocoder`] is
/// the one conforming implementation today.
pub trait Geocode {
    /// Resolve `query` to coordinates.
    ///
    /// The empty string short-circuits to [`Resolution::NoInput`] without a
    /// network call. A provider answer without coordinates is
    /// [`Resolution::NoMatch`], carrying the synthesized descriptor.
    fn coordinates_for(&self, query: &str) -> Result<Resolution, GeocodeError>;
}
