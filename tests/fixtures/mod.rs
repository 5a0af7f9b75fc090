//! Test fixtures for trip-tracks.
//!
//! Provides realistic test data including:
//! - A day of pings for one vehicle around Las Vegas (coordinates from OpenStreetMap)
//! - Builders for points at minute offsets

pub mod las_vegas_drive;

pub use las_vegas_drive::*;
