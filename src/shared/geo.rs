use std::{cmp, fmt::Display};

use serde::{Deserialize, Serialize};

/// Mean earth radius used by the haversine formula.
pub(crate) const EARTH_RADIUS: Distance = Distance::from_kilometers(6371.0);

#[derive(Debug, Clone, Copy, Default)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl From<f64> for Distance {
    fn from(meters: f64) -> Self {
        Self::from_meters(meters)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 >= 1000.0 {
            write!(f, "{:.2} km", self.as_kilometers())
        } else {
            write!(f, "{:.1} m", self.0)
        }
    }
}

impl Distance {
    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

/// A WGS84 point in decimal degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both components are finite and inside the WGS84 range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance using the haversine formula.
    pub fn distance_to(&self, coord: &Self) -> Distance {
        let dist_lat = f64::to_radians(coord.latitude - self.latitude);
        let dist_lon = f64::to_radians(coord.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(coord.latitude))
                * f64::powi(f64::sin(dist_lon / 2.0), 2);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        Distance::from_meters(EARTH_RADIUS.as_meters() * c)
    }

    /// Linear interpolation between two points, `t` clamped to `[0, 1]`.
    /// Longitude takes the short way round, across the antimeridian if needed.
    pub fn lerp(&self, coord: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mut dist_lon = coord.longitude - self.longitude;
        if dist_lon > 180.0 {
            dist_lon -= 360.0;
        } else if dist_lon <= -180.0 {
            dist_lon += 360.0;
        }
        Self {
            latitude: self.latitude + (coord.latitude - self.latitude) * t,
            longitude: wrap_longitude(self.longitude + dist_lon * t),
        }
    }
}

/// Folds a longitude back into `[-180, 180]`.
fn wrap_longitude(longitude: f64) -> f64 {
    if longitude > 180.0 {
        longitude - 360.0
    } else if longitude < -180.0 {
        longitude + 360.0
    } else {
        longitude
    }
}

#[test]
fn distance_test() {
    let seoul_station = Coordinate::new(37.554648, 126.970607);
    let city_hall = Coordinate::new(37.566535, 126.977969);
    let d = seoul_station.distance_to(&city_hall);
    assert!((d.as_meters() - 1470.0).abs() < 50.0, "{d}");
}

#[test]
fn distance_zero_test() {
    let coord = Coordinate::new(37.5, 127.0);
    assert_eq!(coord.distance_to(&coord), Distance::from_meters(0.0));
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn valid_range_test() {
    assert!(Coordinate::new(90.0, -180.0).is_valid());
    assert!(!Coordinate::new(90.1, 0.0).is_valid());
    assert!(!Coordinate::new(0.0, 180.5).is_valid());
    assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
}

#[test]
fn lerp_test() {
    let a = Coordinate::new(37.0, 127.0);
    let b = Coordinate::new(38.0, 128.0);
    assert_eq!(a.lerp(&b, 0.5), Coordinate::new(37.5, 127.5));
    assert_eq!(a.lerp(&b, 2.0), b);
}

#[test]
fn lerp_antimeridian_test() {
    let fiji = Coordinate::new(-17.0, 179.9);
    let across = Coordinate::new(-17.0, -179.9);
    let mid = fiji.lerp(&across, 0.5);
    assert!(mid.longitude.abs() > 179.9, "{mid}");
    assert!(mid.is_valid());
    assert!(fiji.lerp(&across, 0.75).longitude < -179.9);
    assert!((fiji.lerp(&across, 1.0).longitude - across.longitude).abs() < 1e-9);
}
