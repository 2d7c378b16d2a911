use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Rough length of one degree of latitude (and of longitude near the equator).
pub const DEGREE_DISTANCE: Distance = Distance::from_kilometers(111.0);

/// Stored in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Display for Distance {
    /// Kilometers with a single decimal, the way distances are read out.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.as_kilometers())
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

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Flat-earth distance: the degree delta scaled by a fixed length per degree.
    /// Good enough for "is this on campus", useless across continents.
    pub fn equirectangular_distance(&self, coord: &Self, per_degree: Distance) -> Distance {
        let dist_lat = coord.latitude - self.latitude;
        let dist_lon = coord.longitude - self.longitude;
        let degrees = f64::sqrt(dist_lat * dist_lat + dist_lon * dist_lon);
        Distance::from_meters(degrees * per_degree.as_meters())
    }
}

#[test]
fn equirectangular_one_degree_test() {
    let a = Coordinate::new(6.0, 3.0);
    let b = Coordinate::new(7.0, 3.0);
    let d = a.equirectangular_distance(&b, DEGREE_DISTANCE);
    assert!((d.as_kilometers() - 111.0).abs() < 1e-9);
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_display_test() {
    assert_eq!(Distance::from_meters(1_260.0).to_string(), "1.3");
    assert_eq!(Distance::from_meters(40.0).to_string(), "0.0");
}

#[test]
fn coordinate_validity_test() {
    assert!(Coordinate::new(6.6717, 3.1583).is_valid());
    assert!(!Coordinate::new(91.0, 0.0).is_valid());
    assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
}
