//! Near-duplicate stop filtering.
//!
//! Delivery manifests routinely list several packages for one building.
//! Feeding those to a provider as separate waypoints burns the per-request
//! waypoint budget and produces degenerate near-zero legs, so stops are
//! collapsed before batching: once by a rounded-coordinate grid key and once
//! by great-circle proximity to any stop already kept.

use std::collections::HashSet;

use crate::haversine;
use crate::stop::Stop;

/// Grid scale for the exact-duplicate key: 4 decimal places, ~11 m cells.
const GRID_SCALE: f64 = 10_000.0;
/// Stops closer than this to an already-kept stop are dropped.
const PROXIMITY_RADIUS_KM: f64 = 0.025;

/// Collapses near-identical stops, keeping the first seen.
///
/// The grid key is registered before the proximity test runs, so a stop
/// dropped for proximity still claims its cell and later stops in that cell
/// are skipped. Survivor order follows input order. Inputs are assumed
/// geocoded; anything without coordinates is passed over.
pub fn dedup_stops(stops: &[Stop]) -> Vec<Stop> {
    let mut seen: HashSet<(i64, i64)> = HashSet::new();
    let mut kept: Vec<Stop> = Vec::new();

    for stop in stops {
        let Some(coordinate) = stop.coordinate() else {
            continue;
        };

        let key = (
            (coordinate.latitude * GRID_SCALE).round() as i64,
            (coordinate.longitude * GRID_SCALE).round() as i64,
        );
        if !seen.insert(key) {
            continue;
        }

        let too_close = kept.iter().any(|existing| {
            existing
                .coordinate()
                .is_some_and(|kept_coord| {
                    haversine::distance_km(kept_coord, coordinate) < PROXIMITY_RADIUS_KM
                })
        });

        if !too_close {
            kept.push(stop.clone());
        }
    }

    kept
}
