use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::datum::Datum;

/// A point on the surface of the Earth, latitude and longitude in degrees.
///
/// Equality is exact floating point equality.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Sentinel value for "no position yet". It is not [`valid`](Coordinate::is_valid).
    pub const INVALID: Self = Self {
        lat: -180.0,
        lon: -180.0,
    };

    /// Creates a coordinate from latitude and longitude (in this order).
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians.
    pub fn lon_rad(&self) -> f64 {
        self.lon.to_radians()
    }

    /// Returns true if latitude is within `[-90, 90]` and longitude within `[-180, 180]`.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Great circle distance to `other` in meters (haversine over the mean radius of `datum`).
    pub fn distance_to(&self, other: &Coordinate, datum: &Datum) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat_rad().cos() * other.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        datum.mean_radius() * c
    }
}

impl AbsDiffEq for Coordinate {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

/// Creates a new [`Coordinate`] from latitude and longitude values (in degrees).
///
/// ```
/// use gaia_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::Coordinate::latlon($lat, $lon)
    };
}
