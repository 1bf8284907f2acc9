//! Geographic building blocks of the Gaia map abstraction: [`Coordinate`], [`CoordinateBounds`] and the
//! [`polyline`] codec for Google's Encoded Polyline Algorithm Format.

mod bounds;
mod coordinate;
mod datum;
pub mod error;
pub mod polyline;

pub use bounds::CoordinateBounds;
pub use coordinate::Coordinate;
pub use datum::Datum;
