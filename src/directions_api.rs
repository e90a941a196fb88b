//! Fallback routing adapter, speaking the legacy directions wire shape.
//!
//! Slower and less precise than the primary service, but tolerant of the
//! request shapes the primary occasionally rejects. Per-leg distance and
//! duration are summed into route totals during normalization.

use serde::Deserialize;

use crate::error::ProviderError;
use crate::request::RouteRequest;
use crate::stop::Coordinate;
use crate::traits::{ProviderRoute, RouteProvider};

#[derive(Debug, Clone)]
pub struct DirectionsApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for DirectionsApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api/directions/json".to_string(),
            api_key: String::new(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectionsApiClient {
    config: DirectionsApiConfig,
    client: reqwest::blocking::Client,
}

impl DirectionsApiClient {
    pub fn new(config: DirectionsApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl RouteProvider for DirectionsApiClient {
    fn compute_route(&self, request: &RouteRequest) -> Result<ProviderRoute, ProviderError> {
        let origin = format_coordinate(request.origin);
        let destination = format_coordinate(request.destination.coordinate);
        let waypoints = waypoints_param(request);

        let response: DirectionsResponse = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("origin", origin.as_str()),
                ("destination", destination.as_str()),
                ("waypoints", waypoints.as_str()),
                ("key", self.config.api_key.as_str()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        route_from_response(response)
    }
}

fn format_coordinate(coordinate: Coordinate) -> String {
    format!("{},{}", coordinate.latitude, coordinate.longitude)
}

/// `optimize:true` ahead of the pipe-joined waypoints asks the service to
/// reorder them; the chosen order comes back as `waypoint_order`.
fn waypoints_param(request: &RouteRequest) -> String {
    let mut parts = Vec::with_capacity(request.intermediates.len() + 1);
    if request.optimize_order {
        parts.push("optimize:true".to_string());
    }
    parts.extend(
        request
            .intermediates
            .iter()
            .map(|waypoint| format_coordinate(waypoint.coordinate)),
    );
    parts.join("|")
}

fn route_from_response(response: DirectionsResponse) -> Result<ProviderRoute, ProviderError> {
    if response.status != "OK" {
        return Err(ProviderError::Status(response.status));
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(ProviderError::NoRoute)?;

    let encoded_polyline = route
        .overview_polyline
        .and_then(|polyline| polyline.points)
        .filter(|points| !points.is_empty())
        .ok_or(ProviderError::MissingPolyline)?;

    let distance_meters = route
        .legs
        .iter()
        .filter_map(|leg| leg.distance.as_ref())
        .map(|field| field.value)
        .sum();
    let duration_seconds = route
        .legs
        .iter()
        .filter_map(|leg| leg.duration.as_ref())
        .map(|field| field.value)
        .sum();

    Ok(ProviderRoute {
        encoded_polyline,
        distance_meters,
        duration_seconds,
        waypoint_order: route.waypoint_order,
    })
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    overview_polyline: Option<OverviewPolyline>,
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
    waypoint_order: Option<Vec<usize>>,
}

#[derive(Debug, Deserialize)]
struct OverviewPolyline {
    points: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    distance: Option<ValueField>,
    duration: Option<ValueField>,
}

#[derive(Debug, Deserialize)]
struct ValueField {
    value: f64,
}
