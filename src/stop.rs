//! Core data model: coordinates and delivery stops.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Bit-exact key for coordinate identity checks.
    ///
    /// Providers reject duplicate waypoints, so request construction dedups
    /// on exact equality rather than a rounding grid.
    pub fn bits(&self) -> (u64, u64) {
        (self.latitude.to_bits(), self.longitude.to_bits())
    }
}

/// A single delivery stop from a route manifest.
///
/// `sequence` is the source-assigned order (ties and zeros allowed).
/// Coordinates are unset until the stop has been geocoded; ungeocoded stops
/// are excluded from optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub sequence: i64,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Stop {
    pub fn new(sequence: i64, address: impl Into<String>) -> Self {
        Self {
            sequence,
            address: address.into(),
            latitude: None,
            longitude: None,
        }
    }

    /// Attaches coordinates, the only mutation a stop ever sees.
    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.latitude = Some(coordinate.latitude);
        self.longitude = Some(coordinate.longitude);
        self
    }

    /// Synthetic stop marking the live origin at the head of the first batch.
    pub fn start_marker(origin: Coordinate) -> Self {
        Self::new(0, "Start").with_coordinate(origin)
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn is_geocoded(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
