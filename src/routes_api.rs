//! Primary routing adapter, speaking the computeRoutes wire shape.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::request::{RouteRequest, TravelMode};
use crate::stop::Coordinate;
use crate::traits::{ProviderRoute, RouteProvider};

/// Field mask limiting the response to what reconciliation consumes.
const FIELD_MASK: &str = "routes.distanceMeters,routes.duration,routes.polyline.encodedPolyline,routes.optimizedIntermediateWaypointIndex";

#[derive(Debug, Clone)]
pub struct RoutesApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for RoutesApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://routes.googleapis.com/directions/v2:computeRoutes".to_string(),
            api_key: String::new(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoutesApiClient {
    config: RoutesApiConfig,
    client: reqwest::blocking::Client,
}

impl RoutesApiClient {
    pub fn new(config: RoutesApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl RouteProvider for RoutesApiClient {
    fn compute_route(&self, request: &RouteRequest) -> Result<ProviderRoute, ProviderError> {
        let body = ComputeRoutesBody::from_request(request);
        let response: ComputeRoutesResponse = self
            .client
            .post(&self.config.base_url)
            .query(&[("key", self.config.api_key.as_str())])
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        route_from_response(response)
    }
}

fn route_from_response(response: ComputeRoutesResponse) -> Result<ProviderRoute, ProviderError> {
    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(ProviderError::NoRoute)?;

    let encoded_polyline = route
        .polyline
        .and_then(|polyline| polyline.encoded_polyline)
        .filter(|encoded| !encoded.is_empty())
        .ok_or(ProviderError::MissingPolyline)?;

    Ok(ProviderRoute {
        encoded_polyline,
        distance_meters: route.distance_meters.unwrap_or(0.0),
        duration_seconds: parse_duration_seconds(route.duration.as_deref()),
        waypoint_order: route.optimized_intermediate_waypoint_index,
    })
}

/// Durations arrive as decimal seconds with a trailing unit, e.g. `"912s"`.
fn parse_duration_seconds(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim_end_matches('s').parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn travel_mode_value(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Drive => "DRIVE",
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComputeRoutesBody {
    origin: WaypointBody,
    destination: WaypointBody,
    intermediates: Vec<WaypointBody>,
    travel_mode: &'static str,
    routing_preference: &'static str,
    optimize_waypoint_order: bool,
    polyline_encoding: &'static str,
}

impl ComputeRoutesBody {
    fn from_request(request: &RouteRequest) -> Self {
        Self {
            origin: WaypointBody::at(request.origin),
            destination: WaypointBody::at(request.destination.coordinate),
            intermediates: request
                .intermediates
                .iter()
                .map(|waypoint| WaypointBody::at(waypoint.coordinate))
                .collect(),
            travel_mode: travel_mode_value(request.travel_mode),
            routing_preference: "TRAFFIC_AWARE_OPTIMAL",
            optimize_waypoint_order: request.optimize_order,
            polyline_encoding: "ENCODED_POLYLINE",
        }
    }
}

#[derive(Debug, Serialize)]
struct WaypointBody {
    location: LocationBody,
}

impl WaypointBody {
    fn at(coordinate: Coordinate) -> Self {
        Self {
            location: LocationBody {
                lat_lng: coordinate,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct LocationBody {
    #[serde(rename = "latLng")]
    lat_lng: Coordinate,
}

#[derive(Debug, Deserialize)]
struct ComputeRoutesResponse {
    #[serde(default)]
    routes: Vec<RouteBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteBody {
    distance_meters: Option<f64>,
    duration: Option<String>,
    polyline: Option<PolylineBody>,
    optimized_intermediate_waypoint_index: Option<Vec<usize>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PolylineBody {
    encoded_polyline: Option<String>,
}
