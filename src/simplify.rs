//! Douglas-Peucker reduction of a point sequence.
//!
//! Deviation is measured in a planar approximation: `lng` is used as `x` and
//! `lat` as `y`, both in degrees. This is only accurate for small extents and
//! small tolerances; distortion grows with tolerance size and with distance
//! from the equator. Output shape depends on this metric, so it is kept as is
//! rather than replaced by a spherical one.
//!
//! Ranges are processed from an explicit stack over the input slice instead of
//! recursing on copied sub-slices. The retained set, and so the output, is the
//! same as the recursive formulation, including the lowest-index tie-break.

use tracing::debug;

use crate::error::{require_positive, Result};
use crate::point::LocationPoint;
use crate::polyline::SimplifiedRoute;

const DEFAULT_TOLERANCE_DEGREES: f64 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplifyOptions {
    tolerance: f64,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE_DEGREES,
        }
    }
}

impl SimplifyOptions {
    /// `tolerance` is the largest allowed deviation in degrees. Must be finite
    /// and positive.
    pub fn new(tolerance: f64) -> Result<Self> {
        Ok(Self {
            tolerance: require_positive("tolerance", tolerance)?,
        })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

/// Planar distance from `point` to the infinite line through `line_start` and
/// `line_end`.
///
/// The point is projected onto the line and the Euclidean distance to the
/// projection is returned. A zero-length line falls back to the distance to
/// `line_start`. Missing or non-finite coordinates yield NaN.
pub fn perpendicular_distance(
    point: &LocationPoint,
    line_start: &LocationPoint,
    line_end: &LocationPoint,
) -> f64 {
    let dx = line_end.lng - line_start.lng;
    let dy = line_end.lat - line_start.lat;
    let length_sq = dx * dx + dy * dy;

    if length_sq == 0.0 {
        return euclidean(point.lng, point.lat, line_start.lng, line_start.lat);
    }

    let u = ((point.lng - line_start.lng) * dx + (point.lat - line_start.lat) * dy) / length_sq;
    let x = line_start.lng + u * dx;
    let y = line_start.lat + u * dy;

    euclidean(point.lng, point.lat, x, y)
}

fn euclidean(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt()
}

/// Interior point of `points[start..=end]` farthest from the chord, if any.
///
/// Only strictly greater distances replace the current best, so the lowest
/// index wins ties. NaN distances never win.
fn farthest_from_chord(points: &[LocationPoint], start: usize, end: usize) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut max_distance = 0.0;

    for index in start + 1..end {
        let distance = perpendicular_distance(&points[index], &points[start], &points[end]);
        if distance > max_distance {
            max_distance = distance;
            best = Some((index, distance));
        }
    }

    best
}

/// Reduce `points` so that every dropped point lies within the tolerance of
/// the chord that replaced it.
///
/// The first and last points are always kept and no points are reordered or
/// synthesized. Inputs with fewer than three points are returned unchanged.
pub fn simplify(points: &[LocationPoint], options: SimplifyOptions) -> SimplifiedRoute {
    if points.len() < 3 {
        return SimplifiedRoute::new(points.to_vec());
    }

    let tolerance = options.tolerance;
    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut ranges = vec![(0, last)];
    while let Some((start, end)) = ranges.pop() {
        if let Some((pivot, distance)) = farthest_from_chord(points, start, end) {
            if distance > tolerance {
                keep[pivot] = true;
                ranges.push((pivot, end));
                ranges.push((start, pivot));
            }
        }
    }

    let retained: Vec<LocationPoint> = points
        .iter()
        .zip(&keep)
        .filter_map(|(point, &kept)| kept.then_some(*point))
        .collect();

    debug!(
        input = points.len(),
        output = retained.len(),
        tolerance,
        "route simplified"
    );

    SimplifiedRoute::new(retained)
}
