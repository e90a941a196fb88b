//! Turns a raw provider response back into ordered stops and map geometry.

use tracing::warn;

use crate::polyline::Polyline;
use crate::request::{RouteRequest, Waypoint};
use crate::stop::Stop;
use crate::traits::ProviderRoute;

/// One batch's share of the final route.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRoute {
    /// Stops in visiting order, destination last.
    pub stops: Vec<Stop>,
    pub path: Polyline,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// Reorders the request's intermediates by the provider's chosen order and
/// rebuilds the batch route around them. The first batch gets a synthetic
/// start marker so the rendered route begins at the driver's position.
pub fn reconcile_batch(
    request: &RouteRequest,
    route: &ProviderRoute,
    batch_index: usize,
) -> BatchRoute {
    let ordered = apply_waypoint_order(&request.intermediates, route.waypoint_order.as_deref());

    let mut stops = Vec::with_capacity(ordered.len() + 2);
    if batch_index == 0 {
        stops.push(Stop::start_marker(request.origin));
    }
    stops.extend(ordered.into_iter().map(|waypoint| waypoint.stop.clone()));
    stops.push(request.destination.stop.clone());

    BatchRoute {
        stops,
        path: Polyline::decode(&route.encoded_polyline),
        distance_meters: route.distance_meters,
        duration_seconds: route.duration_seconds,
    }
}

/// `order[i]` names the intermediate to visit i-th. A missing order means
/// the provider kept the submitted order. Indices past the end are logged
/// and skipped rather than failing the batch.
fn apply_waypoint_order<'a>(
    intermediates: &'a [Waypoint],
    order: Option<&[usize]>,
) -> Vec<&'a Waypoint> {
    let Some(order) = order else {
        return intermediates.iter().collect();
    };

    order
        .iter()
        .filter_map(|&index| {
            let waypoint = intermediates.get(index);
            if waypoint.is_none() {
                warn!(
                    index,
                    count = intermediates.len(),
                    "reconcile: waypoint index out of range"
                );
            }
            waypoint
        })
        .collect()
}
