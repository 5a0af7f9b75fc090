//! Location pings and their conversion from raw caller input.
//!
//! The surrounding service hands over pings whose timestamps are either epoch
//! milliseconds or ISO-8601 strings. They are resolved to [`Timestamp`] here,
//! once, so the rest of the crate never deals with unparsed time values.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, TrackError};

/// A single vehicle location at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    pub timestamp: Timestamp,
}

impl LocationPoint {
    pub fn new(lat: f64, lng: f64, timestamp: Timestamp) -> Self {
        Self { lat, lng, timestamp }
    }

    /// Build a point from epoch milliseconds.
    pub fn from_millis(lat: f64, lng: f64, millis: i64) -> Result<Self> {
        let timestamp = RawTimestamp::Millis(millis).resolve()?;
        Ok(Self::new(lat, lng, timestamp))
    }

    /// Coordinates as a `(lat, lng)` pair.
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub(crate) fn millis(&self) -> i64 {
        self.timestamp.as_millisecond()
    }
}

/// Timestamp exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// ISO-8601 / RFC 3339 instant with an offset, e.g. `2024-03-01T08:00:00Z`.
    Text(String),
}

impl RawTimestamp {
    pub fn resolve(&self) -> Result<Timestamp> {
        match self {
            RawTimestamp::Millis(millis) => {
                Timestamp::from_millisecond(*millis).map_err(|err| TrackError::InvalidTimestamp {
                    value: millis.to_string(),
                    reason: err.to_string(),
                })
            }
            RawTimestamp::Text(text) => {
                text.trim()
                    .parse::<Timestamp>()
                    .map_err(|err| TrackError::InvalidTimestamp {
                        value: text.clone(),
                        reason: err.to_string(),
                    })
            }
        }
    }
}

impl From<i64> for RawTimestamp {
    fn from(millis: i64) -> Self {
        RawTimestamp::Millis(millis)
    }
}

impl From<&str> for RawTimestamp {
    fn from(text: &str) -> Self {
        RawTimestamp::Text(text.to_string())
    }
}

/// An unvalidated ping as received from storage or the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPing {
    pub lat: f64,
    pub lng: f64,
    pub timestamp: RawTimestamp,
}

impl RawPing {
    pub fn new(lat: f64, lng: f64, timestamp: impl Into<RawTimestamp>) -> Self {
        Self {
            lat,
            lng,
            timestamp: timestamp.into(),
        }
    }

    pub fn into_point(self) -> Result<LocationPoint> {
        let timestamp = self.timestamp.resolve()?;
        Ok(LocationPoint::new(self.lat, self.lng, timestamp))
    }
}

/// Convert a batch of raw pings, stopping at the first bad timestamp.
///
/// Coordinates are passed through as-is; only timestamps are validated.
pub fn parse_pings<I>(pings: I) -> Result<Vec<LocationPoint>>
where
    I: IntoIterator<Item = RawPing>,
{
    pings
        .into_iter()
        .enumerate()
        .map(|(index, ping)| {
            ping.into_point().inspect_err(|err| {
                warn!(index, error = %err, "rejecting ping with invalid timestamp");
            })
        })
        .collect()
}
