//! Geocoding HTTP adapter and the parallel fan-out over a stop list.

use rayon::prelude::*;
use serde::Deserialize;
use tracing::warn;

use crate::stop::{Coordinate, Stop};
use crate::traits::Geocoder;

#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api/geocode/json".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    config: GeocodeConfig,
    client: reqwest::blocking::Client,
}

impl GeocodeClient {
    pub fn new(config: GeocodeConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for GeocodeClient {
    fn geocode(&self, address: &str) -> Option<Coordinate> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("address", address), ("key", self.config.api_key.as_str())])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<GeocodeResponse>());

        match response {
            Ok(body) if body.status == "OK" => body
                .results
                .into_iter()
                .next()
                .map(|result| Coordinate::new(result.geometry.location.lat, result.geometry.location.lng)),
            Ok(body) => {
                warn!(status = %body.status, address, "geocode: no result");
                None
            }
            Err(err) => {
                warn!(error = %err, address, "geocode: request failed");
                None
            }
        }
    }
}

/// Resolves coordinates for every stop, fanning requests out across the
/// rayon pool. Stops that already carry a coordinate are passed through
/// untouched. Returns the geocoded stops in input order plus the stops
/// that could not be resolved and were dropped.
pub fn geocode_stops<G>(geocoder: &G, stops: &[Stop]) -> (Vec<Stop>, Vec<Stop>)
where
    G: Geocoder + Sync,
{
    let attempted: Vec<Stop> = stops
        .par_iter()
        .map(|stop| {
            if stop.is_geocoded() {
                return stop.clone();
            }
            match geocoder.geocode(&stop.address) {
                Some(coordinate) => stop.clone().with_coordinate(coordinate),
                None => stop.clone(),
            }
        })
        .collect();

    attempted.into_iter().partition(|stop| stop.is_geocoded())
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: GeocodeLocation,
}

#[derive(Debug, Deserialize)]
struct GeocodeLocation {
    lat: f64,
    lng: f64,
}
