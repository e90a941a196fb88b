//! route-optimizer core engine
//!
//! Multi-stop delivery route optimization: geocode stops, collapse
//! near-duplicates, batch within provider waypoint limits, route each batch
//! through a primary provider with a legacy fallback, and stitch the
//! reordered stops and geometry back into one aggregate route.

pub mod traits;
pub mod error;
pub mod stop;
pub mod haversine;
pub mod polyline;
pub mod dedup;
pub mod batch;
pub mod request;
pub mod geocode;
pub mod routes_api;
pub mod directions_api;
pub mod reconcile;
pub mod optimizer;
