//! Haversine great-circle distance between coordinates.
//!
//! Used by the stop deduplicator to drop waypoints that sit within a few
//! meters of one another (multiple packages at the same building).

use crate::stop::Coordinate;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two points in meters.
pub fn distance_meters(from: Coordinate, to: Coordinate) -> f64 {
    distance_km(from, to) * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point() {
        let p = Coordinate::new(51.0447, -114.0719);
        assert!(distance_km(p, p) < 0.001, "same point should have ~0 distance");
    }

    #[test]
    fn test_known_distance() {
        // Calgary (51.0447, -114.0719) to Edmonton (53.5461, -113.4938)
        // Great-circle distance ~280 km
        let dist = distance_km(
            Coordinate::new(51.0447, -114.0719),
            Coordinate::new(53.5461, -113.4938),
        );
        assert!(
            dist > 270.0 && dist < 295.0,
            "Calgary to Edmonton should be ~280km, got {}",
            dist
        );
    }

    #[test]
    fn test_symmetric() {
        let a = Coordinate::new(51.0447, -114.0719);
        let b = Coordinate::new(51.0486, -114.0708);
        let forward = distance_km(a, b);
        let back = distance_km(b, a);
        assert!((forward - back).abs() < 1e-12, "distance should be symmetric");
    }

    #[test]
    fn test_meter_scale() {
        // 0.0002 degrees of latitude is roughly 22 meters
        let a = Coordinate::new(51.0447, -114.0719);
        let b = Coordinate::new(51.0449, -114.0719);
        let meters = distance_meters(a, b);
        assert!(
            meters > 20.0 && meters < 25.0,
            "0.0002 deg lat should be ~22m, got {}",
            meters
        );
    }
}
