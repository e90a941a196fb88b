//! Named Calgary delivery locations for realistic test fixtures.
//!
//! Every location sits far enough from its neighbours that the stop
//! deduplicator keeps all of them, so tests can reason about exact counts.

use route_optimizer::stop::{Coordinate, Stop};

/// A named delivery location with coordinates.
#[derive(Debug, Clone)]
pub struct DeliveryLocation {
    pub address: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl DeliveryLocation {
    pub const fn new(address: &'static str, lat: f64, lng: f64) -> Self {
        Self { address, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    pub fn stop(&self, sequence: i64) -> Stop {
        Stop::new(sequence, self.address).with_coordinate(self.coordinate())
    }
}

// ============================================================================
// Downtown Core (good for depot/origin locations)
// ============================================================================

pub const DOWNTOWN: &[DeliveryLocation] = &[
    DeliveryLocation::new("Calgary Tower", 51.0444, -114.0631),
    DeliveryLocation::new("Stephen Avenue Place", 51.0455, -114.0669),
    DeliveryLocation::new("The CORE Shopping Centre", 51.0462, -114.0676),
    DeliveryLocation::new("Central Library", 51.0451, -114.0569),
    DeliveryLocation::new("Fairmont Palliser", 51.0441, -114.0650),
    DeliveryLocation::new("The Bow", 51.0468, -114.0585),
    DeliveryLocation::new("Telus Convention Centre", 51.0450, -114.0612),
    DeliveryLocation::new("Eau Claire Market", 51.0527, -114.0683),
    DeliveryLocation::new("Dragon City Mall", 51.0511, -114.0594),
    DeliveryLocation::new("Bankers Hall", 51.0460, -114.0698),
];

// ============================================================================
// Beltline / Mission
// ============================================================================

pub const BELTLINE: &[DeliveryLocation] = &[
    DeliveryLocation::new("Tompkins Park", 51.0380, -114.0790),
    DeliveryLocation::new("Mount Royal Village", 51.0377, -114.0846),
    DeliveryLocation::new("Haultain Park", 51.0403, -114.0650),
    DeliveryLocation::new("Central Memorial Park", 51.0420, -114.0705),
    DeliveryLocation::new("Sheldon M. Chumir Centre", 51.0413, -114.0661),
    DeliveryLocation::new("First Street Market", 51.0394, -114.0630),
    DeliveryLocation::new("Victoria Park Station", 51.0405, -114.0565),
];

// ============================================================================
// Kensington / Hillhurst
// ============================================================================

pub const KENSINGTON: &[DeliveryLocation] = &[
    DeliveryLocation::new("Kensington Riverside Inn", 51.0516, -114.0800),
    DeliveryLocation::new("Hillhurst Community Hall", 51.0563, -114.0881),
    DeliveryLocation::new("Riley Park", 51.0570, -114.0928),
    DeliveryLocation::new("SAIT Campus Centre", 51.0646, -114.0898),
    DeliveryLocation::new("Sunnyside Station", 51.0565, -114.0838),
];

// ============================================================================
// Inglewood / East
// ============================================================================

pub const INGLEWOOD: &[DeliveryLocation] = &[
    DeliveryLocation::new("Inglewood Bird Sanctuary", 51.0360, -114.0267),
    DeliveryLocation::new("Crossroads Market", 51.0337, -114.0166),
    DeliveryLocation::new("Fort Calgary", 51.0450, -114.0466),
    DeliveryLocation::new("Pearce Estate Park", 51.0409, -114.0163),
    DeliveryLocation::new("Blackfoot Truckstop Diner", 51.0308, -114.0413),
];

// ============================================================================
// Northeast
// ============================================================================

pub const NORTHEAST: &[DeliveryLocation] = &[
    DeliveryLocation::new("Marlborough Mall", 51.0569, -113.9786),
    DeliveryLocation::new("Sunridge Mall", 51.0665, -113.9775),
    DeliveryLocation::new("Peter Lougheed Centre", 51.0751, -113.9838),
    DeliveryLocation::new("Village Square Leisure Centre", 51.0882, -113.9534),
    DeliveryLocation::new("Genesis Centre", 51.1145, -113.9444),
    DeliveryLocation::new("Calgary International Airport", 51.1215, -114.0076),
];

// ============================================================================
// South
// ============================================================================

pub const SOUTH: &[DeliveryLocation] = &[
    DeliveryLocation::new("Chinook Centre", 50.9984, -114.0730),
    DeliveryLocation::new("Heritage Park", 50.9859, -114.1123),
    DeliveryLocation::new("Rockyview General Hospital", 50.9854, -114.0935),
    DeliveryLocation::new("Southcentre Mall", 50.9627, -114.0640),
    DeliveryLocation::new("Fish Creek Library", 50.9442, -114.0709),
    DeliveryLocation::new("Spruce Meadows", 50.9060, -114.0829),
];

// ============================================================================
// West
// ============================================================================

pub const WEST: &[DeliveryLocation] = &[
    DeliveryLocation::new("Westbrook Mall", 51.0384, -114.1293),
    DeliveryLocation::new("Edworthy Park", 51.0539, -114.1329),
    DeliveryLocation::new("Foothills Medical Centre", 51.0645, -114.1325),
    DeliveryLocation::new("Market Mall", 51.0789, -114.1434),
    DeliveryLocation::new("Canada Olympic Park", 51.0812, -114.2162),
    DeliveryLocation::new("Mount Royal University", 50.9475, -114.1298),
];

// ============================================================================
// All Locations Combined
// ============================================================================

/// Returns all locations as a single list.
pub fn all_locations() -> Vec<DeliveryLocation> {
    let mut all = Vec::with_capacity(45);
    all.extend_from_slice(DOWNTOWN);
    all.extend_from_slice(BELTLINE);
    all.extend_from_slice(KENSINGTON);
    all.extend_from_slice(INGLEWOOD);
    all.extend_from_slice(NORTHEAST);
    all.extend_from_slice(SOUTH);
    all.extend_from_slice(WEST);
    all
}

/// Returns a subset of locations for smaller tests.
pub fn sample_locations(count: usize) -> Vec<DeliveryLocation> {
    all_locations().into_iter().take(count).collect()
}

/// Builds a stop manifest from the first `count` locations, sequences 1..=count.
pub fn sample_stops(count: usize) -> Vec<Stop> {
    sample_locations(count)
        .iter()
        .enumerate()
        .map(|(index, location)| location.stop(index as i64 + 1))
        .collect()
}

/// Locations spread across the metro area (good for multi-batch tests).
pub fn metro_spread_locations() -> Vec<DeliveryLocation> {
    vec![
        // Downtown
        DeliveryLocation::new("Calgary Tower", 51.0444, -114.0631),
        DeliveryLocation::new("Eau Claire Market", 51.0527, -114.0683),
        // North of the river
        DeliveryLocation::new("SAIT Campus Centre", 51.0646, -114.0898),
        DeliveryLocation::new("Calgary International Airport", 51.1215, -114.0076),
        // East
        DeliveryLocation::new("Marlborough Mall", 51.0569, -113.9786),
        DeliveryLocation::new("Crossroads Market", 51.0337, -114.0166),
        // South
        DeliveryLocation::new("Chinook Centre", 50.9984, -114.0730),
        DeliveryLocation::new("Southcentre Mall", 50.9627, -114.0640),
        // West
        DeliveryLocation::new("Westbrook Mall", 51.0384, -114.1293),
        DeliveryLocation::new("Market Mall", 51.0789, -114.1434),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_optimizer::haversine::distance_km;

    #[test]
    fn test_coordinates_in_calgary_area() {
        for location in all_locations() {
            assert!(
                location.lat > 50.85 && location.lat < 51.25,
                "{} lat out of range: {}",
                location.address,
                location.lat
            );
            assert!(
                location.lng > -114.3 && location.lng < -113.85,
                "{} lng out of range: {}",
                location.address,
                location.lng
            );
        }
    }

    #[test]
    fn test_no_two_locations_within_dedup_radius() {
        let all = all_locations();
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                let km = distance_km(a.coordinate(), b.coordinate());
                assert!(
                    km > 0.025,
                    "{} and {} are only {:.0} m apart",
                    a.address,
                    b.address,
                    km * 1000.0
                );
            }
        }
    }
}
