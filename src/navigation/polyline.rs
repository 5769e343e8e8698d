//! Decoder for the encoded polyline format used by the directions service.
//!
//! Each coordinate is stored as the difference from the previous one,
//! scaled by 1e5, zig-zag signed and written as little-endian 5-bit groups.
//! Every group is offset by 63 to land in printable ASCII; 0x20 marks that
//! another group follows.

use crate::entities::GeoPoint;
use crate::error::{malformed_polyline_error, Error};

const OFFSET: u8 = 63;
const CONTINUATION: u8 = 0x20;
const GROUP_MASK: u8 = 0x1f;
const SCALE: f64 = 1e5;

/// Decodes `encoded` into points, in encoded order.
///
/// Truncated input, bytes outside the `'?'..='~'` alphabet and points that
/// land outside valid coordinate ranges are rejected.
pub fn decode(encoded: &str) -> Result<Vec<GeoPoint>, Error> {
    let bytes = encoded.as_bytes();

    // every point consumes at least two bytes
    let mut points = Vec::with_capacity(bytes.len() / 2);
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        lat += i64::from(next_delta(bytes, &mut index)?);
        lng += i64::from(next_delta(bytes, &mut index)?);

        let point = GeoPoint::new(lat as f64 / SCALE, lng as f64 / SCALE)
            .map_err(|_| malformed_polyline_error())?;

        points.push(point);
    }

    Ok(points)
}

fn next_delta(bytes: &[u8], index: &mut usize) -> Result<i32, Error> {
    let mut result: u32 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = *bytes.get(*index).ok_or_else(malformed_polyline_error)?;
        *index += 1;

        if !(OFFSET..=b'~').contains(&byte) {
            return Err(malformed_polyline_error());
        }

        if shift >= u32::BITS {
            return Err(malformed_polyline_error());
        }

        let chunk = byte - OFFSET;
        result |= u32::from(chunk & GROUP_MASK) << shift;
        shift += 5;

        if chunk & CONTINUATION == 0 {
            break;
        }
    }

    Ok(zigzag(result))
}

/// Maps the unsigned group value back to a signed delta. Odd values are
/// negative: the delta is the one's complement of the value shifted right.
fn zigzag(value: u32) -> i32 {
    let shifted = (value >> 1) as i32;

    if value & 1 == 1 {
        !shifted
    } else {
        shifted
    }
}
