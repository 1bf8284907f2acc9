//! Error types used by the crate.

use thiserror::Error;

/// Reason a polyline could not be decoded or encoded.
///
/// Offsets are byte positions in the encoded input, indices are positions in the input coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// The input ended before a value was complete.
    #[error("encoded path ended unexpectedly at byte {offset}")]
    InvalidPosition {
        /// Position at which more input was expected.
        offset: usize,
    },
    /// A value used more components than any valid encoder produces.
    #[error("too many components for a single value at byte {offset}")]
    InvalidNumberOfComponents {
        /// Position of the last consumed component.
        offset: usize,
    },
    /// A byte outside of the `[63, 127]` range.
    #[error("invalid byte {byte:#04x} at {offset}")]
    InvalidCharacter {
        /// Position of the byte.
        offset: usize,
        /// The byte value.
        byte: u8,
    },
    /// A coordinate is not finite, or is too far from the previous one to be encoded.
    #[error("coordinate {index} cannot be encoded")]
    UnencodableCoordinate {
        /// Index of the coordinate in the input.
        index: usize,
    },
}
