//! Partitioning deduplicated stops into provider-sized batches.

use crate::stop::Stop;

/// Default provider cap on waypoints per optimization request.
pub const DEFAULT_MAX_STOPS_PER_REQUEST: usize = 15;

/// Splits stops into consecutive batches of at most `max_size` stops.
///
/// Pure partitioning: order is preserved, nothing is filtered, and only the
/// final batch may come up short. `max_size` must be at least 1; the
/// orchestrator validates options before calling.
pub fn batch_stops(stops: &[Stop], max_size: usize) -> Vec<&[Stop]> {
    stops.chunks(max_size).collect()
}
