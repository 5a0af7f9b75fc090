//! One vehicle's day around Las Vegas / Henderson.
//!
//! Stop coordinates sourced from OpenStreetMap. Pings are one per minute while
//! driving, interpolated between stops.

use trip_tracks::LocationPoint;

/// 2024-03-01T08:00:00Z in epoch milliseconds.
pub const DAY_START_MS: i64 = 1_709_280_000_000;

/// A named stop with coordinates.
#[derive(Debug, Clone)]
pub struct Stop {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Stop {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

pub const MORNING_ROUTE: &[Stop] = &[
    Stop::new("MGM Grand", 36.1023654, -115.1688720),
    Stop::new("Bellagio", 36.1126, -115.1767),
    Stop::new("Caesars Palace", 36.1162, -115.1745),
    Stop::new("Wynn Las Vegas", 36.1263781, -115.1658180),
];

pub const AFTERNOON_ROUTE: &[Stop] = &[
    Stop::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Stop::new("Encore at Wynn", 36.1289345, -115.1653620),
    Stop::new("Longhorn Casino", 36.1070664, -115.0591256),
];

/// Point `minutes` after [`DAY_START_MS`].
pub fn point_at(lat: f64, lng: f64, minutes: i64) -> LocationPoint {
    LocationPoint::from_millis(lat, lng, DAY_START_MS + minutes * 60_000).unwrap()
}

/// Points along a north-south line, one per listed minute offset.
pub fn points_at_minutes(offsets: &[i64]) -> Vec<LocationPoint> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, &minutes)| point_at(36.10 + i as f64 * 0.002, -115.17, minutes))
        .collect()
}

/// Drive through `stops` starting at `start_minute`, `legs` pings per leg,
/// one minute apart. Returns the pings and the minute after the last one.
pub fn drive(stops: &[Stop], start_minute: i64, legs: usize) -> (Vec<LocationPoint>, i64) {
    let mut pings = Vec::new();
    let mut minute = start_minute;
    for pair in stops.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        for step in 0..legs {
            let t = step as f64 / legs as f64;
            pings.push(point_at(
                from.lat + (to.lat - from.lat) * t,
                from.lng + (to.lng - from.lng) * t,
                minute,
            ));
            minute += 1;
        }
    }
    if let Some(last) = stops.last() {
        pings.push(point_at(last.lat, last.lng, minute));
        minute += 1;
    }
    (pings, minute)
}

/// Morning drive, a two hour park at the Wynn, then the afternoon drive and a
/// single late check-in ping hours later.
pub fn full_day() -> Vec<LocationPoint> {
    let (mut day, end_of_morning) = drive(MORNING_ROUTE, 0, 5);
    let (afternoon, end_of_afternoon) = drive(AFTERNOON_ROUTE, end_of_morning + 120, 10);
    day.extend(afternoon);
    let last = AFTERNOON_ROUTE[AFTERNOON_ROUTE.len() - 1].clone();
    day.push(point_at(last.lat, last.lng, end_of_afternoon + 300));
    day
}
