use std::str::FromStr;

use gaia_types::polyline::{self, DEFAULT_PRECISION};
use gaia_types::{Coordinate, CoordinateBounds};

use crate::error::GaiaError;

/// An immutable sequence of waypoints, for example a route to draw on the map.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPath {
    coordinates: Vec<Coordinate>,
}

impl MapPath {
    /// Creates a path through the given points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self {
            coordinates: points,
        }
    }

    /// Decodes a path in Google's Encoded Polyline Algorithm Format with the default precision.
    ///
    /// Returns `None` for malformed input, never a partial path.
    pub fn from_encoded_path(encoded: &str) -> Option<Self> {
        match Self::try_from_encoded_path(encoded, DEFAULT_PRECISION) {
            Ok(path) => Some(path),
            Err(err) => {
                log::debug!("Failed to decode encoded path: {err}");
                None
            }
        }
    }

    /// Decodes an encoded path with the given precision.
    pub fn try_from_encoded_path(encoded: &str, precision: f64) -> Result<Self, GaiaError> {
        Ok(Self::new(polyline::decode(encoded, precision)?))
    }

    /// Encodes the path with the default precision.
    ///
    /// Fails if a waypoint is not finite or lies too far from the previous one.
    pub fn encoded_path(&self) -> Result<String, GaiaError> {
        Ok(polyline::encode(&self.coordinates, DEFAULT_PRECISION)?)
    }

    /// The waypoints of the path.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Consumes the path returning its waypoints.
    pub fn into_coordinates(self) -> Vec<Coordinate> {
        self.coordinates
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns true if the path has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Minimal bounds containing the path, `None` for an empty path.
    pub fn bounds(&self) -> Option<CoordinateBounds> {
        CoordinateBounds::from_coordinates(&self.coordinates)
    }
}

impl From<Vec<Coordinate>> for MapPath {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}

impl FromStr for MapPath {
    type Err = GaiaError;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        Self::try_from_encoded_path(encoded, DEFAULT_PRECISION)
    }
}
