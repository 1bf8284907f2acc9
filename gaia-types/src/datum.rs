use serde::{Deserialize, Serialize};

/// Reference ellipsoid used for distance calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// WGS84 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Creates a custom datum.
    pub const fn new(semimajor: f64, inv_flattening: f64) -> Self {
        Self {
            semimajor,
            inv_flattening,
        }
    }

    /// Semimajor axis in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening of the ellipsoid.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Mean radius `(2a + b) / 3` of the ellipsoid in meters.
    pub fn mean_radius(&self) -> f64 {
        self.semimajor * (1.0 - 1.0 / (3.0 * self.inv_flattening))
    }

    /// Length of one degree of latitude along the mean sphere, in meters.
    pub fn meters_per_degree(&self) -> f64 {
        self.mean_radius() * std::f64::consts::PI / 180.0
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
