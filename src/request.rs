//! Per-batch route request construction.
//!
//! Selects origin, destination, and intermediates for one batch and applies
//! the request-validity rules providers enforce: no duplicate waypoints, no
//! zero-length origin/destination pair.

use std::collections::HashSet;

use crate::stop::{Coordinate, Stop};

/// A stop paired with its coordinate, extracted once at build time so the
/// request's waypoint indices stay aligned with the stops behind them.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub stop: Stop,
    pub coordinate: Coordinate,
}

impl Waypoint {
    pub fn from_stop(stop: &Stop) -> Option<Self> {
        let coordinate = stop.coordinate()?;
        Some(Self {
            stop: stop.clone(),
            coordinate,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Drive,
}

/// Provider-agnostic descriptor of one optimization request.
///
/// Both provider adapters serialize this same descriptor; only the wire
/// shape differs between them.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Waypoint,
    /// Ordered intermediate waypoints, deduplicated by exact coordinate.
    pub intermediates: Vec<Waypoint>,
    pub travel_mode: TravelMode,
    pub optimize_order: bool,
}

/// Why a batch produced no provider request. Logged, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than two routable stops: no origin/destination pair exists.
    TooFewStops,
    /// Origin and destination coordinates are identical; a zero-length
    /// route has nothing to optimize and providers reject it.
    IdenticalEndpoints,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::TooFewStops => "fewer than two stops",
            SkipReason::IdenticalEndpoints => "origin equals destination",
        }
    }
}

/// Builds the request descriptor for batch `batch_index`.
///
/// Origin is the live-origin snapshot for the first batch and the batch's
/// own first stop afterwards. Destination is the last stop. Intermediates
/// are every stop but the last, deduplicated by exact coordinate equality;
/// for later batches that includes the stop doubling as origin.
pub fn build_batch_request(
    batch: &[Stop],
    batch_index: usize,
    live_origin: Coordinate,
) -> Result<RouteRequest, SkipReason> {
    // Ungeocoded stops cannot become waypoints; they are passed over rather
    // than failing the whole batch.
    let routable: Vec<Waypoint> = batch.iter().filter_map(Waypoint::from_stop).collect();
    let Some((destination, rest)) = routable.split_last() else {
        return Err(SkipReason::TooFewStops);
    };
    if rest.is_empty() {
        return Err(SkipReason::TooFewStops);
    }

    let origin = if batch_index == 0 {
        live_origin
    } else {
        rest[0].coordinate
    };

    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    let intermediates: Vec<Waypoint> = rest
        .iter()
        .filter(|waypoint| seen.insert(waypoint.coordinate.bits()))
        .cloned()
        .collect();

    if origin == destination.coordinate {
        return Err(SkipReason::IdenticalEndpoints);
    }

    Ok(RouteRequest {
        origin,
        destination: destination.clone(),
        intermediates,
        travel_mode: TravelMode::Drive,
        optimize_order: true,
    })
}
