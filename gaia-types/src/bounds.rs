use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::datum::Datum;

/// A latitude/longitude aligned region on the map.
///
/// Regions crossing the antimeridian are not supported: `west <= east` always holds.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateBounds {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl CoordinateBounds {
    /// Creates the bounds spanned by two corner coordinates, in any order.
    pub fn new(a: Coordinate, b: Coordinate) -> Self {
        Self {
            south: a.lat().min(b.lat()),
            west: a.lon().min(b.lon()),
            north: a.lat().max(b.lat()),
            east: a.lon().max(b.lon()),
        }
    }

    /// Returns the minimal bounds containing every coordinate, or `None` if there are none.
    pub fn from_coordinates<'a>(coordinates: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
        let mut coordinates = coordinates.into_iter();
        let first = coordinates.next()?;
        let mut bounds = Self::new(*first, *first);
        for c in coordinates {
            bounds = bounds.including(c);
        }

        Some(bounds)
    }

    /// South-west corner.
    pub fn south_west(&self) -> Coordinate {
        Coordinate::latlon(self.south, self.west)
    }

    /// North-east corner.
    pub fn north_east(&self) -> Coordinate {
        Coordinate::latlon(self.north, self.east)
    }

    /// Latitude extent in degrees.
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude extent in degrees.
    pub fn lon_span(&self) -> f64 {
        self.east - self.west
    }

    /// Geometric center of the region.
    pub fn center(&self) -> Coordinate {
        Coordinate::latlon(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Returns true if the coordinate lies inside the region or on its border.
    pub fn contains(&self, c: &Coordinate) -> bool {
        self.south <= c.lat() && self.north >= c.lat() && self.west <= c.lon() && self.east >= c.lon()
    }

    /// Returns the bounds grown to include `c`.
    pub fn including(&self, c: &Coordinate) -> Self {
        Self {
            south: self.south.min(c.lat()),
            west: self.west.min(c.lon()),
            north: self.north.max(c.lat()),
            east: self.east.max(c.lon()),
        }
    }

    /// Returns the smallest region centered at `center` that contains these bounds.
    ///
    /// Fitting the result keeps the camera at `center` instead of panning to the bounds center.
    pub fn derive(&self, center: Coordinate) -> Self {
        let half_lat = (self.north - center.lat()).max(center.lat() - self.south);
        let half_lon = (self.east - center.lon()).max(center.lon() - self.west);

        Self {
            south: center.lat() - half_lat,
            west: center.lon() - half_lon,
            north: center.lat() + half_lat,
            east: center.lon() + half_lon,
        }
    }

    /// Moves the south and east edges outwards by `offset_factor` times the span of the region.
    ///
    /// This leaves room for the visible center of the map to be offset towards the north-west.
    pub fn extend_south_east(&self, offset_factor: f64) -> Self {
        Self {
            south: self.south - self.lat_span() * offset_factor,
            east: self.east + self.lon_span() * offset_factor,
            ..*self
        }
    }

    /// Returns the same sized region moved so that its center is at `center`.
    pub fn translate_to(&self, center: Coordinate) -> Self {
        let current = self.center();
        let d_lat = center.lat() - current.lat();
        let d_lon = center.lon() - current.lon();

        Self {
            south: self.south + d_lat,
            west: self.west + d_lon,
            north: self.north + d_lat,
            east: self.east + d_lon,
        }
    }

    /// Scales the region around its center by `factor`. Latitudes are clipped to the poles.
    pub fn magnify(&self, factor: f64) -> Self {
        let center = self.center();
        let half_lat = self.lat_span() / 2.0 * factor;
        let half_lon = self.lon_span() / 2.0 * factor;

        Self {
            south: (center.lat() - half_lat).max(-90.0),
            west: center.lon() - half_lon,
            north: (center.lat() + half_lat).min(90.0),
            east: center.lon() + half_lon,
        }
    }

    /// Distance between the south-west and north-east corners in meters.
    pub fn diagonal_distance(&self, datum: &Datum) -> f64 {
        self.south_west().distance_to(&self.north_east(), datum)
    }

    /// Returns the region around the same center with its diagonal clamped to `[min, max]`
    /// meters.
    ///
    /// A degenerate region (a single point) is expanded into a square with the `min` diagonal.
    pub fn bound_to_distance(&self, min: f64, max: f64, datum: &Datum) -> Self {
        let distance = self.diagonal_distance(datum);

        if distance < min {
            if distance > 0.0 {
                return self.magnify(min / distance);
            }

            return Self::square_around(self.center(), min, datum);
        }

        if distance > max && distance > 0.0 {
            return self.magnify(max / distance);
        }

        *self
    }

    fn square_around(center: Coordinate, diagonal: f64, datum: &Datum) -> Self {
        let half_side = diagonal / std::f64::consts::SQRT_2 / 2.0;
        let half_lat = half_side / datum.meters_per_degree();
        let cos_lat = center.lat_rad().cos().max(f64::EPSILON);
        let half_lon = half_lat / cos_lat;

        Self {
            south: (center.lat() - half_lat).max(-90.0),
            west: center.lon() - half_lon,
            north: (center.lat() + half_lat).min(90.0),
            east: center.lon() + half_lon,
        }
    }
}
