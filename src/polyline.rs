//! Simplified route geometry.
//!
//! A [`SimplifiedRoute`] is always an ordered subsequence of the points it was
//! reduced from. Encoding for rendering or storage is left to the caller.

use serde::{Deserialize, Serialize};

use crate::point::LocationPoint;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedRoute {
    points: Vec<LocationPoint>,
}

impl SimplifiedRoute {
    pub(crate) fn new(points: Vec<LocationPoint>) -> Self {
        Self { points }
    }

    /// Returns a reference to the retained points.
    pub fn points(&self) -> &[LocationPoint] {
        &self.points
    }

    /// Consumes the route and returns the owned points.
    pub fn into_points(self) -> Vec<LocationPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&LocationPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&LocationPoint> {
        self.points.last()
    }

    /// Fraction of `original_len` that was retained, `1.0` for an empty original.
    pub fn reduction_ratio(&self, original_len: usize) -> f64 {
        if original_len == 0 {
            1.0
        } else {
            self.points.len() as f64 / original_len as f64
        }
    }
}
