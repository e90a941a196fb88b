//! Encoded-polyline codec and decoded route geometry.
//!
//! Both routing providers return path geometry in the standard polyline
//! format: signed per-axis deltas, zig-zag encoded, emitted as 5-bit groups
//! with a continuation bit, at 1e-5 degree precision. This module decodes
//! that format into coordinate sequences for internal processing and encodes
//! coordinate sequences back at API boundaries.

use serde::{Deserialize, Serialize};

use crate::stop::Coordinate;

/// Continuation bit marking "more 5-bit groups follow" in an encoded value.
const CONTINUATION_BIT: u8 = 0x20;
/// Offset added to every emitted byte to keep the output printable ASCII.
const ASCII_OFFSET: u8 = 63;
/// Coordinates are stored at 1e-5 degree precision.
const PRECISION: f64 = 1e5;

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes the compact polyline format into coordinate points.
    ///
    /// Characters carry their value minus 63; the low 5 bits of each
    /// contribute to the current delta, and bit 0x20 marks continuation.
    /// Deltas accumulate per axis and divide by 1e5 to recover degrees.
    pub fn decode(encoded: &str) -> Self {
        let bytes = encoded.as_bytes();
        let mut points = Vec::new();
        let mut index = 0;
        let mut lat: i64 = 0;
        let mut lng: i64 = 0;

        while index < bytes.len() {
            let Some(delta_lat) = next_delta(bytes, &mut index) else {
                break;
            };
            let Some(delta_lng) = next_delta(bytes, &mut index) else {
                break;
            };
            lat += delta_lat;
            lng += delta_lng;
            points.push(Coordinate::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
        }

        Self { points }
    }

    /// Encodes the points back into the compact polyline format.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        let mut prev_lat: i64 = 0;
        let mut prev_lng: i64 = 0;

        for point in &self.points {
            let lat = (point.latitude * PRECISION).round() as i64;
            let lng = (point.longitude * PRECISION).round() as i64;
            push_delta(&mut out, lat - prev_lat);
            push_delta(&mut out, lng - prev_lng);
            prev_lat = lat;
            prev_lng = lng;
        }

        out
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Appends another polyline's points, used when stitching batch paths.
    pub fn extend(&mut self, other: Polyline) {
        self.points.extend(other.points);
    }
}

/// Reads one zig-zag-decoded signed delta; `None` on a truncated or
/// overlong chunk.
fn next_delta(bytes: &[u8], index: &mut usize) -> Option<i64> {
    let mut shift = 0;
    let mut result: i64 = 0;

    loop {
        // A chunk that never terminates would shift past the accumulator.
        if shift >= 64 {
            return None;
        }
        let byte = bytes.get(*index)?.checked_sub(ASCII_OFFSET)?;
        *index += 1;
        result |= i64::from(byte & 0x1f) << shift;
        shift += 5;
        if byte < CONTINUATION_BIT {
            break;
        }
    }

    if result & 1 == 1 {
        Some(!(result >> 1))
    } else {
        Some(result >> 1)
    }
}

/// Writes one signed delta as zig-zag 5-bit groups.
fn push_delta(out: &mut String, delta: i64) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };

    while value >= i64::from(CONTINUATION_BIT) {
        let chunk = (value & 0x1f) as u8 | CONTINUATION_BIT;
        out.push(char::from(chunk + ASCII_OFFSET));
        value >>= 5;
    }
    out.push(char::from(value as u8 + ASCII_OFFSET));
}
