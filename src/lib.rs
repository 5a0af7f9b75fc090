//! trip-tracks core
//!
//! Pure functions over ordered vehicle location pings: great-circle distance,
//! route length, trip segmentation at idle gaps, and Douglas-Peucker route
//! simplification. Callers own fetching pings and persisting the results.

pub mod error;
pub mod traits;
pub mod haversine;
pub mod point;
pub mod route_distance;
pub mod trips;
pub mod simplify;
pub mod polyline;

pub use error::{Result, TrackError};
pub use haversine::{distance, Haversine, EARTH_RADIUS_KM};
pub use point::{parse_pings, LocationPoint, RawPing, RawTimestamp};
pub use polyline::SimplifiedRoute;
pub use route_distance::{route_distance, route_distance_with};
pub use simplify::{perpendicular_distance, simplify, SimplifyOptions};
pub use traits::DistanceMetric;
pub use trips::{segment_trips, SegmentOptions, Trip};
