//! BER length field encoding
//!
//! Short form (0-127): a single byte holding the length.
//!
//! Long form: a lead byte `0x80 | n` followed by `n` bytes holding the
//! length big-endian.

use crate::cursor::ByteCursor;
use crate::error::{TlvError, TlvResult};

/// Largest length representable in the short form
pub const SHORT_FORM_MAX: usize = 0x7F;

/// Decode a length field at the cursor
///
/// # Returns
/// * `(length, bytes_consumed)`
///
/// A long-form lead byte of `0x80` (zero length bytes follow) decodes to 0.
pub fn decode_length(cursor: &mut ByteCursor<'_>) -> TlvResult<(usize, usize)> {
    let start = cursor.position();
    let lead = cursor
        .read_byte()
        .ok_or_else(|| TlvError::MalformedLength("missing length byte".to_string()))?;

    if lead & 0x80 == 0 {
        return Ok((lead as usize, 1));
    }

    let count = (lead & 0x7F) as usize;
    let length_bytes = cursor.read_bytes(count).ok_or_else(|| {
        TlvError::MalformedLength(format!(
            "need {} length bytes, have {}",
            count,
            cursor.remaining()
        ))
    })?;

    let mut length = 0usize;
    for &byte in length_bytes {
        length = length
            .checked_mul(256)
            .and_then(|l| l.checked_add(byte as usize))
            .ok_or_else(|| {
                TlvError::MalformedLength(format!("{} byte length overflows", count))
            })?;
    }

    Ok((length, cursor.position() - start))
}

/// Encode a value byte count as a BER length field
///
/// Fails with [`TlvError::LengthOverflow`] if the count cannot be represented.
pub fn encode_length(count: usize) -> TlvResult<Vec<u8>> {
    if count <= SHORT_FORM_MAX {
        return Ok(vec![count as u8]);
    }

    let needed = long_form_size(count)?;
    let mut encoded = vec![0u8; needed + 1];
    encoded[0] = 0x80 | needed as u8;
    for i in 1..=needed {
        encoded[needed + 1 - i] = ((count >> (8 * (i - 1))) & 0xFF) as u8;
    }
    Ok(encoded)
}

/// Number of bytes the encoded length field for `count` occupies
pub fn encoded_length_size(count: usize) -> TlvResult<usize> {
    if count <= SHORT_FORM_MAX {
        Ok(1)
    } else {
        Ok(long_form_size(count)? + 1)
    }
}

/// Minimum number of bytes needed to hold `count` big-endian
fn long_form_size(count: usize) -> TlvResult<usize> {
    let mut needed = 1usize;
    let mut limit = 0x100usize;
    while count >= limit {
        needed += 1;
        limit = limit
            .checked_mul(0x100)
            .ok_or(TlvError::LengthOverflow(count))?;
    }
    Ok(needed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(data: &[u8]) -> TlvResult<(usize, usize)> {
        decode_length(&mut ByteCursor::new(data))
    }

    #[test]
    fn test_short_form() {
        assert_eq!(encode_length(0).unwrap(), vec![0x00]);
        assert_eq!(encode_length(100).unwrap(), vec![100]);
        assert_eq!(encode_length(127).unwrap(), vec![0x7F]);
        assert_eq!(decode(&[0x7F]).unwrap(), (127, 1));
    }

    #[test]
    fn test_long_form_boundaries() {
        assert_eq!(encode_length(128).unwrap(), vec![0x81, 0x80]);
        assert_eq!(encode_length(255).unwrap(), vec![0x81, 0xFF]);
        assert_eq!(encode_length(256).unwrap(), vec![0x82, 0x01, 0x00]);
        assert_eq!(encode_length(0xFFFF).unwrap(), vec![0x82, 0xFF, 0xFF]);
        assert_eq!(encode_length(0x10000).unwrap(), vec![0x83, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn test_decode_three_and_four_byte_lengths() {
        // Multi-byte lengths are plain big-endian
        assert_eq!(decode(&[0x83, 0x01, 0x02, 0x03]).unwrap(), (0x010203, 4));
        assert_eq!(
            decode(&[0x84, 0x01, 0x02, 0x03, 0x04]).unwrap(),
            (0x01020304, 5)
        );
        assert_eq!(decode(&[0x83, 0x00, 0x00, 0xFF]).unwrap(), (0xFF, 4));
    }

    #[test]
    fn test_decode_indefinite_marker_is_zero() {
        assert_eq!(decode(&[0x80]).unwrap(), (0, 1));
    }

    #[test]
    fn test_decode_runs_past_buffer() {
        assert!(matches!(
            decode(&[0x82, 0x01]),
            Err(TlvError::MalformedLength(_))
        ));
        assert!(matches!(decode(&[]), Err(TlvError::MalformedLength(_))));
    }

    #[test]
    fn test_decode_overflow() {
        let mut data = vec![0x89];
        data.extend_from_slice(&[0xFF; 9]);
        assert!(matches!(decode(&data), Err(TlvError::MalformedLength(_))));
    }

    #[test]
    fn test_encode_overflow_is_reported() {
        assert_eq!(
            encode_length(usize::MAX),
            Err(TlvError::LengthOverflow(usize::MAX))
        );
    }

    #[test]
    fn test_round_trip_up_to_2_pow_24() {
        let mut n = 0usize;
        while n <= 1 << 24 {
            let encoded = encode_length(n).unwrap();
            assert_eq!(encoded.len() == 1, n <= 127, "short form iff n <= 127 ({})", n);
            assert_eq!(encoded_length_size(n).unwrap(), encoded.len());
            assert_eq!(decode(&encoded).unwrap(), (n, encoded.len()));
            n = if n < 1024 { n + 1 } else { n + 997 };
        }
        for n in [0xFF_FFFF, 0x100_0000, 0x7FFF_FFFF] {
            let encoded = encode_length(n).unwrap();
            assert_eq!(decode(&encoded).unwrap().0, n);
        }
    }
}
