//! Google's Encoded Polyline Algorithm Format.
//!
//! Every coordinate is stored as the difference to the previous one, scaled by a fixed precision, zig-zag encoded,
//! and split into 5 bit components. Each component is written as `component + 63`, with bit `0x20` marking that
//! another component of the same value follows. A coordinate is written as its latitude value followed by its
//! longitude value.
//!
//! Decoding is all or nothing: a malformed input never produces a partial path.

use crate::coordinate::Coordinate;
use crate::error::PolylineError;

/// Precision used by Google Maps and most encoders (five decimal digits).
pub const DEFAULT_PRECISION: f64 = 1e5;

const COMPONENT_OFFSET: u8 = 63;
const CONTINUATION_BIT: u8 = 0x20;
const COMPONENT_MASK: u8 = 0x1F;
const MAX_COMPONENTS: u32 = 6;
/// Largest zig-zag value that fits into [`MAX_COMPONENTS`] components.
const MAX_ENCODED_VALUE: u64 = (1 << (5 * MAX_COMPONENTS)) - 1;

/// Decodes an encoded path into coordinates.
///
/// `precision` must be the one used for encoding, usually [`DEFAULT_PRECISION`]. An empty input decodes into an
/// empty path.
pub fn decode(encoded: impl AsRef<[u8]>, precision: f64) -> Result<Vec<Coordinate>, PolylineError> {
    let bytes = encoded.as_ref();
    let mut position = 0;
    let mut lat = 0i64;
    let mut lon = 0i64;
    let mut coordinates = Vec::new();

    while position < bytes.len() {
        lat += decode_value(bytes, &mut position)?;
        lon += decode_value(bytes, &mut position)?;

        coordinates.push(Coordinate::latlon(
            lat as f64 / precision,
            lon as f64 / precision,
        ));
    }

    Ok(coordinates)
}

/// Encodes coordinates into a path string that [`decode`] reads back with the same `precision`.
///
/// Coordinates are rounded to the nearest multiple of `1 / precision`. Fails with
/// [`PolylineError::UnencodableCoordinate`] if a coordinate is not finite, or if its difference to the previous one
/// does not fit into the six components a value may have.
pub fn encode<'a>(
    coordinates: impl IntoIterator<Item = &'a Coordinate>,
    precision: f64,
) -> Result<String, PolylineError> {
    let mut encoded = String::new();
    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;

    for (index, c) in coordinates.into_iter().enumerate() {
        let (Some(lat), Some(lon)) = (scale(c.lat(), precision), scale(c.lon(), precision)) else {
            return Err(PolylineError::UnencodableCoordinate { index });
        };

        let (Some(lat_delta), Some(lon_delta)) = (zig_zag(lat - prev_lat), zig_zag(lon - prev_lon)) else {
            return Err(PolylineError::UnencodableCoordinate { index });
        };

        encode_value(lat_delta, &mut encoded);
        encode_value(lon_delta, &mut encoded);

        prev_lat = lat;
        prev_lon = lon;
    }

    Ok(encoded)
}

fn scale(value: f64, precision: f64) -> Option<i64> {
    let scaled = (value * precision).round();
    // Range is checked before the cast so it never saturates.
    (scaled.is_finite() && scaled.abs() <= MAX_ENCODED_VALUE as f64).then_some(scaled as i64)
}

fn zig_zag(value: i64) -> Option<u64> {
    let value = if value < 0 {
        !(value << 1)
    } else {
        value << 1
    };

    u64::try_from(value)
        .ok()
        .filter(|&value| value <= MAX_ENCODED_VALUE)
}

fn decode_value(bytes: &[u8], position: &mut usize) -> Result<i64, PolylineError> {
    let mut value = 0i64;
    let mut components = 0;

    loop {
        let Some(&byte) = bytes.get(*position) else {
            return Err(PolylineError::InvalidPosition { offset: *position });
        };

        if !(COMPONENT_OFFSET..=127).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                offset: *position,
                byte,
            });
        }

        let component = byte - COMPONENT_OFFSET;
        value |= i64::from(component & COMPONENT_MASK) << (5 * components);
        *position += 1;
        components += 1;

        if component & CONTINUATION_BIT == 0 {
            break;
        }

        if components == MAX_COMPONENTS {
            return Err(PolylineError::InvalidNumberOfComponents {
                offset: *position - 1,
            });
        }
    }

    Ok(if value & 1 == 1 {
        !(value >> 1)
    } else {
        value >> 1
    })
}

fn encode_value(mut value: u64, encoded: &mut String) {
    while value >= u64::from(CONTINUATION_BIT) {
        let component = (value as u8 & COMPONENT_MASK) | CONTINUATION_BIT;
        encoded.push(char::from(component + COMPONENT_OFFSET));
        value >>= 5;
    }

    encoded.push(char::from(value as u8 + COMPONENT_OFFSET));
}
