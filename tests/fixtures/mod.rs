//! Test fixtures for route-optimizer.
//!
//! Provides realistic test data including:
//! - Named Calgary delivery locations spread across the metro area
//! - Helpers for building stop manifests from them

pub mod calgary_locations;

pub use calgary_locations::*;
