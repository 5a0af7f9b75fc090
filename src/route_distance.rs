//! Total travelled distance along an ordered point sequence.

use crate::haversine::Haversine;
use crate::point::LocationPoint;
use crate::traits::DistanceMetric;

/// Sum of haversine distances between consecutive points, in kilometers.
///
/// Fewer than two points yields `0.0`.
pub fn route_distance(points: &[LocationPoint]) -> f64 {
    route_distance_with(points, Haversine)
}

/// Same as [`route_distance`] with a caller-chosen metric.
pub fn route_distance_with<M: DistanceMetric>(points: &[LocationPoint], metric: M) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .windows(2)
        .map(|pair| metric.distance_km(pair[0].coords(), pair[1].coords()))
        .fold(0.0, |total, leg| total + leg)
}
