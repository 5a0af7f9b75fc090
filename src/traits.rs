//! Seams between the distance math and the code that consumes it.

/// Distance in kilometers between two `(lat, lng)` points given in degrees.
///
/// Implementations must be symmetric and return zero for identical points.
pub trait DistanceMetric {
    fn distance_km(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance_km(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        (**self).distance_km(from, to)
    }
}
