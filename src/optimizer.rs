//! Optimization run orchestration: geocode, dedup, batch, route, aggregate.

use tracing::{debug, info, warn};

use crate::batch::{DEFAULT_MAX_STOPS_PER_REQUEST, batch_stops};
use crate::dedup::dedup_stops;
use crate::error::{Error, ProviderError, Result};
use crate::geocode::geocode_stops;
use crate::polyline::Polyline;
use crate::reconcile::{BatchRoute, reconcile_batch};
use crate::request::{RouteRequest, SkipReason, build_batch_request};
use crate::stop::{Coordinate, Stop};
use crate::traits::{Geocoder, ProviderRoute, RouteProvider};

/// Called after each batch with (completed, total).
pub type ProgressCallback = Box<dyn FnMut(usize, usize) + Send>;
/// Polled between batches; returning true aborts the run.
pub type CancelCallback = Box<dyn Fn() -> bool + Send + Sync>;

fn should_abort(cancel: Option<&CancelCallback>) -> bool {
    cancel.map(|cb| cb()).unwrap_or(false)
}

fn emit_progress(progress: &mut Option<ProgressCallback>, current: usize, total: usize) {
    if let Some(cb) = progress.as_mut() {
        (**cb)(current, total);
    }
}

#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// Upper bound on stops submitted per provider request.
    pub max_stops_per_request: usize,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            max_stops_per_request: DEFAULT_MAX_STOPS_PER_REQUEST,
        }
    }
}

/// Which attempt produced a batch's route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderAttempt {
    Primary,
    Fallback,
}

/// Outcome of one batch. Failures are reported here, never swallowed.
#[derive(Debug)]
pub enum BatchStatus {
    Routed {
        via: ProviderAttempt,
    },
    /// No request was issued; nothing to route.
    Skipped(SkipReason),
    /// Both attempts failed; the batch is absent from the aggregate.
    Failed {
        primary: ProviderError,
        fallback: ProviderError,
    },
}

#[derive(Debug)]
pub struct BatchReport {
    pub index: usize,
    pub stop_count: usize,
    pub status: BatchStatus,
}

/// Distance and duration totals across routed batches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStats {
    pub distance_km: f64,
    pub duration_minutes: f64,
}

#[derive(Debug)]
pub struct OptimizeResult {
    /// Every routed stop in visiting order, start marker first.
    pub stops: Vec<Stop>,
    /// Concatenated route geometry across batches.
    pub path: Polyline,
    pub stats: RouteStats,
    /// Per-batch outcome, in batch order.
    pub batches: Vec<BatchReport>,
    /// Stops dropped because their address never resolved.
    pub dropped: Vec<Stop>,
}

impl OptimizeResult {
    /// False when any batch failed both attempts, meaning the returned
    /// route is missing stops and callers should say so.
    pub fn is_complete(&self) -> bool {
        self.failed_batches().is_empty()
    }

    pub fn failed_batches(&self) -> Vec<usize> {
        self.batches
            .iter()
            .filter(|report| matches!(report.status, BatchStatus::Failed { .. }))
            .map(|report| report.index)
            .collect()
    }
}

pub fn optimize<G, P, F>(
    stops: &[Stop],
    origin: Coordinate,
    geocoder: &G,
    primary: &P,
    fallback: &F,
    options: OptimizeOptions,
) -> Result<OptimizeResult>
where
    G: Geocoder + Sync,
    P: RouteProvider,
    F: RouteProvider,
{
    optimize_with_callbacks(stops, origin, geocoder, primary, fallback, options, None, None)
}

/// Runs the full pipeline against an origin snapshot taken at call time.
///
/// Moving origins are sampled once here; a position update arriving while
/// batches are in flight does not retroactively change the first batch.
pub fn optimize_with_callbacks<G, P, F>(
    stops: &[Stop],
    origin: Coordinate,
    geocoder: &G,
    primary: &P,
    fallback: &F,
    options: OptimizeOptions,
    mut progress: Option<ProgressCallback>,
    cancel: Option<CancelCallback>,
) -> Result<OptimizeResult>
where
    G: Geocoder + Sync,
    P: RouteProvider,
    F: RouteProvider,
{
    if options.max_stops_per_request == 0 {
        return Err(Error::invalid_options("max_stops_per_request must be at least 1"));
    }

    info!("optimize: start stops={}", stops.len());

    // Visit intent is the caller's sequence numbers, not input order.
    let mut ordered: Vec<Stop> = stops.to_vec();
    ordered.sort_by_key(|stop| stop.sequence);

    let (geocoded, dropped) = geocode_stops(geocoder, &ordered);
    if !dropped.is_empty() {
        warn!("optimize: dropped {} stops with unresolved addresses", dropped.len());
    }
    if geocoded.is_empty() {
        return Err(Error::InsufficientData);
    }

    let deduped = dedup_stops(&geocoded);
    debug!("optimize: dedup kept {} of {} stops", deduped.len(), geocoded.len());

    let batches = batch_stops(&deduped, options.max_stops_per_request);
    let total = batches.len();
    info!("optimize: routing {total} batches");

    let mut reports: Vec<BatchReport> = Vec::with_capacity(total);
    let mut routed: Vec<BatchRoute> = Vec::new();

    for (index, batch) in batches.into_iter().enumerate() {
        if should_abort(cancel.as_ref()) {
            info!("optimize: cancelled at batch {index}");
            return Err(Error::Cancelled);
        }

        let status = match build_batch_request(batch, index, origin) {
            Err(reason) => {
                debug!("optimize: batch {index} skipped ({})", reason.as_str());
                BatchStatus::Skipped(reason)
            }
            Ok(request) => match route_batch(primary, fallback, &request, index) {
                Ok((route, via)) => {
                    routed.push(reconcile_batch(&request, &route, index));
                    BatchStatus::Routed { via }
                }
                Err((primary_err, fallback_err)) => {
                    warn!(
                        "optimize: batch {index} failed both attempts (primary: {primary_err}, fallback: {fallback_err})"
                    );
                    BatchStatus::Failed {
                        primary: primary_err,
                        fallback: fallback_err,
                    }
                }
            },
        };

        reports.push(BatchReport {
            index,
            stop_count: batch.len(),
            status,
        });
        emit_progress(&mut progress, index + 1, total);
    }

    Ok(aggregate(routed, reports, dropped))
}

/// Primary first, fallback at most once, both with the same semantic request.
fn route_batch<P, F>(
    primary: &P,
    fallback: &F,
    request: &RouteRequest,
    index: usize,
) -> std::result::Result<(ProviderRoute, ProviderAttempt), (ProviderError, ProviderError)>
where
    P: RouteProvider,
    F: RouteProvider,
{
    match primary.compute_route(request) {
        Ok(route) => Ok((route, ProviderAttempt::Primary)),
        Err(primary_err) => {
            warn!("optimize: batch {index} primary attempt failed ({primary_err}), trying fallback");
            match fallback.compute_route(request) {
                Ok(route) => Ok((route, ProviderAttempt::Fallback)),
                Err(fallback_err) => Err((primary_err, fallback_err)),
            }
        }
    }
}

fn aggregate(routed: Vec<BatchRoute>, batches: Vec<BatchReport>, dropped: Vec<Stop>) -> OptimizeResult {
    let mut stops = Vec::new();
    let mut path = Polyline::default();
    let mut distance_meters = 0.0;
    let mut duration_seconds = 0.0;

    for route in routed {
        stops.extend(route.stops);
        path.extend(route.path);
        distance_meters += route.distance_meters;
        duration_seconds += route.duration_seconds;
    }

    let stats = RouteStats {
        distance_km: distance_meters / 1000.0,
        duration_minutes: duration_seconds / 60.0,
    };

    info!(
        "optimize: complete stops={} distance_km={:.1} duration_min={:.0}",
        stops.len(),
        stats.distance_km,
        stats.duration_minutes
    );

    OptimizeResult {
        stops,
        path,
        stats,
        batches,
        dropped,
    }
}
