//! Splitting a ping stream into trips at idle gaps.
//!
//! A trip is a maximal run of consecutive points where no gap between
//! neighbours exceeds the stop threshold. Gaps are compared strictly, so a gap
//! of exactly the threshold continues the trip, and zero or negative gaps
//! (duplicate or out-of-order timestamps) never split.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{require_positive, Result};
use crate::point::LocationPoint;
use crate::route_distance::route_distance;

const DEFAULT_STOP_THRESHOLD_MINUTES: f64 = 30.0;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentOptions {
    stop_threshold_minutes: f64,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            stop_threshold_minutes: DEFAULT_STOP_THRESHOLD_MINUTES,
        }
    }
}

impl SegmentOptions {
    /// `stop_threshold_minutes` is the longest idle gap, in minutes, that
    /// still belongs to the same trip. Must be finite and positive.
    pub fn new(stop_threshold_minutes: f64) -> Result<Self> {
        Ok(Self {
            stop_threshold_minutes: require_positive("stop_threshold_minutes", stop_threshold_minutes)?,
        })
    }

    pub fn stop_threshold_minutes(&self) -> f64 {
        self.stop_threshold_minutes
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Index of the first point in the input sequence.
    pub start_index: usize,
    /// Index of the last point in the input sequence (inclusive).
    pub end_index: usize,
    pub points: Vec<LocationPoint>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub duration_minutes: f64,
    pub distance_km: f64,
}

impl Trip {
    fn from_run(points: &[LocationPoint], start_index: usize, end_index: usize) -> Self {
        let run = &points[start_index..=end_index];
        let first = run[0];
        let last = run[run.len() - 1];

        Self {
            start_index,
            end_index,
            points: run.to_vec(),
            start_time: first.timestamp,
            end_time: last.timestamp,
            duration_minutes: minutes_between(&first, &last),
            distance_km: route_distance(run),
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Mean speed over the trip in km/h, `None` if no time elapsed.
    pub fn average_speed_kmh(&self) -> Option<f64> {
        if self.duration_minutes > 0.0 {
            Some(self.distance_km / (self.duration_minutes / 60.0))
        } else {
            None
        }
    }
}

fn minutes_between(from: &LocationPoint, to: &LocationPoint) -> f64 {
    (to.millis() - from.millis()) as f64 / MILLIS_PER_MINUTE
}

/// Partition `points` into trips separated by gaps longer than the threshold.
///
/// Inputs with fewer than two points produce no trips. A single point left
/// open at the end of the stream is dropped; an isolated ping with no onward
/// movement is not a trip. Isolated pings earlier in the stream are closed by
/// the following gap and come out as one-point trips.
pub fn segment_trips(points: &[LocationPoint], options: SegmentOptions) -> Vec<Trip> {
    if points.len() < 2 {
        return Vec::new();
    }

    let threshold = options.stop_threshold_minutes;
    let mut trips = Vec::new();
    let mut run_start = 0;

    for curr_index in 1..points.len() {
        let gap_minutes = minutes_between(&points[curr_index - 1], &points[curr_index]);
        if gap_minutes > threshold {
            trace!(at = curr_index, gap_minutes, "idle gap closes trip");
            trips.push(emit(points, run_start, curr_index - 1));
            run_start = curr_index;
        }
    }

    let last_index = points.len() - 1;
    if last_index > run_start {
        trips.push(emit(points, run_start, last_index));
    } else {
        debug!(index = last_index, "dropping trailing single-point run");
    }

    trips
}

fn emit(points: &[LocationPoint], start_index: usize, end_index: usize) -> Trip {
    let trip = Trip::from_run(points, start_index, end_index);
    debug!(
        start_index,
        end_index,
        points = trip.point_count(),
        distance_km = trip.distance_km,
        duration_minutes = trip.duration_minutes,
        "trip closed"
    );
    trip
}
