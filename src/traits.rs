//! Collaborator traits for the optimization engine.
//!
//! These are intentionally minimal. The HTTP adapters implement them for
//! production use and tests implement them with canned data, which keeps
//! the engine itself free of network concerns.

use crate::error::ProviderError;
use crate::request::RouteRequest;
use crate::stop::Coordinate;

/// Resolves a free-text address to a coordinate.
pub trait Geocoder {
    /// Returns `None` when the address cannot be resolved. Adapters must
    /// swallow transient failures here so one bad address costs a single
    /// stop, never the whole run.
    fn geocode(&self, address: &str) -> Option<Coordinate>;
}

/// Computes one optimized route for a batch request.
pub trait RouteProvider {
    fn compute_route(&self, request: &RouteRequest) -> Result<ProviderRoute, ProviderError>;
}

/// A successful provider response, normalized across providers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRoute {
    /// Route geometry in encoded polyline form.
    pub encoded_polyline: String,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    /// Visiting order for the request's intermediates, as indices into the
    /// request's intermediate list. `None` means the provider kept the
    /// submitted order.
    pub waypoint_order: Option<Vec<usize>>,
}
