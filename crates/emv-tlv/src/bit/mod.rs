//! EMV bit-field codec
//!
//! EMV numbers bytes left to right and bits right to left, both starting at
//! 1. Byte 1 Bit 8 is therefore the most significant bit of the first byte.

pub mod field;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{TlvError, TlvResult};
use crate::hex::{bytes_to_hex, hex_to_bytes};

pub use field::EnumeratedBitField;

/// One flag of a bit field
///
/// Sorted by byte number ascending, then bit number descending, then unset
/// before set. This is the order bits read in on paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmvBit {
    byte_number: usize,
    bit_number: u8,
    set: bool,
}

impl EmvBit {
    pub const fn new(byte_number: usize, bit_number: u8, set: bool) -> Self {
        Self {
            byte_number,
            bit_number,
            set,
        }
    }

    pub fn byte_number(&self) -> usize {
        self.byte_number
    }

    pub fn bit_number(&self) -> u8 {
        self.bit_number
    }

    pub fn is_set(&self) -> bool {
        self.set
    }

    /// `"1"` or `"0"`
    pub fn value(&self) -> &'static str {
        if self.set {
            "1"
        } else {
            "0"
        }
    }

    /// `"Byte 1, Bit 8 = 1"`, or `"Byte 1 Bit 8 = 1"` without the comma
    pub fn to_label(&self, include_comma: bool) -> String {
        let separator = if include_comma { "," } else { "" };
        format!(
            "Byte {}{} Bit {} = {}",
            self.byte_number,
            separator,
            self.bit_number,
            self.value()
        )
    }

    /// `"Byte 1 Bit 8"`, with no value
    pub fn position_label(&self) -> String {
        format!("Byte {} Bit {}", self.byte_number, self.bit_number)
    }
}

impl Ord for EmvBit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.byte_number
            .cmp(&other.byte_number)
            .then_with(|| other.bit_number.cmp(&self.bit_number))
            .then_with(|| self.set.cmp(&other.set))
    }
}

impl PartialOrd for EmvBit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EmvBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_label(true))
    }
}

/// Collect bits into their canonical order
pub fn set_of(bits: impl IntoIterator<Item = EmvBit>) -> BTreeSet<EmvBit> {
    bits.into_iter().collect()
}

/// Decode every bit of `hex`, numbering the first byte `first_byte_number`
///
/// An N-byte field always yields 8×N bits, set or not.
pub fn from_hex(hex: &str, first_byte_number: usize) -> TlvResult<BTreeSet<EmvBit>> {
    let bytes = hex_to_bytes(hex)?;
    let mut bits = BTreeSet::new();
    for (index, byte) in bytes.iter().enumerate() {
        let byte_number = index + first_byte_number;
        for position in (0..8u8).rev() {
            bits.insert(EmvBit::new(
                byte_number,
                position + 1,
                (byte >> position) & 1 == 1,
            ));
        }
    }
    Ok(bits)
}

/// [`from_hex`] with the first byte numbered 1
pub fn from_hex_default(hex: &str) -> TlvResult<BTreeSet<EmvBit>> {
    from_hex(hex, 1)
}

/// Assemble a `field_length` byte field from the set bits in `bits`
///
/// Every bit must address byte `1..=field_length` and bit `1..=8`.
pub fn to_hex<'a>(
    bits: impl IntoIterator<Item = &'a EmvBit>,
    field_length: usize,
) -> TlvResult<String> {
    let mut bytes = vec![0u8; field_length];
    for bit in bits {
        let in_range = (1..=field_length).contains(&bit.byte_number)
            && (1..=8).contains(&bit.bit_number);
        if !in_range {
            return Err(TlvError::IndexOutOfRange {
                byte_number: bit.byte_number,
                bit_number: bit.bit_number,
                field_length,
            });
        }
        if bit.set {
            bytes[bit.byte_number - 1] |= 1 << (bit.bit_number - 1);
        }
    }
    Ok(bytes_to_hex(&bytes))
}

/// Label the set bits of `hex`, e.g. `"Byte 1 Bit 8,Byte 2 Bit 1"`
///
/// Empty when no bit is set.
pub fn label_for(hex: &str) -> TlvResult<String> {
    let labels: Vec<String> = from_hex_default(hex)?
        .iter()
        .filter(|bit| bit.is_set())
        .map(EmvBit::position_label)
        .collect();
    Ok(labels.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_80() {
        let bits: Vec<EmvBit> = from_hex_default("80").unwrap().into_iter().collect();
        assert_eq!(bits.len(), 8);
        assert_eq!(bits[0], EmvBit::new(1, 8, true));
        for (i, bit) in bits[1..].iter().enumerate() {
            assert_eq!(*bit, EmvBit::new(1, 7 - i as u8, false));
        }
        assert_eq!(label_for("80").unwrap(), "Byte 1 Bit 8");
    }

    #[test]
    fn test_first_byte_number() {
        let bits = from_hex("01", 3).unwrap();
        assert!(bits.contains(&EmvBit::new(3, 1, true)));
        assert!(bits.iter().all(|bit| bit.byte_number() == 3));
    }

    #[test]
    fn test_ordering() {
        let mut bits = vec![
            EmvBit::new(2, 8, false),
            EmvBit::new(1, 1, true),
            EmvBit::new(1, 8, true),
            EmvBit::new(1, 8, false),
        ];
        bits.sort();
        assert_eq!(
            bits,
            vec![
                EmvBit::new(1, 8, false),
                EmvBit::new(1, 8, true),
                EmvBit::new(1, 1, true),
                EmvBit::new(2, 8, false),
            ]
        );
    }

    #[test]
    fn test_label_for_several_bytes() {
        assert_eq!(
            label_for("8001").unwrap(),
            "Byte 1 Bit 8,Byte 2 Bit 1"
        );
        assert_eq!(label_for("0000").unwrap(), "");
        assert_eq!(label_for("").unwrap(), "");
    }

    #[test]
    fn test_to_label() {
        let bit = EmvBit::new(3, 8, true);
        assert_eq!(bit.to_label(false), "Byte 3 Bit 8 = 1");
        assert_eq!(bit.to_label(true), "Byte 3, Bit 8 = 1");
        assert_eq!(EmvBit::new(1, 2, false).to_string(), "Byte 1, Bit 2 = 0");
    }

    #[test]
    fn test_to_hex_round_trip() {
        for hex in ["00", "80", "7F", "A5C3", "ffee01", "0102030405060708"] {
            let bits = from_hex_default(hex).unwrap();
            assert_eq!(bits.len(), hex.len() / 2 * 8);
            assert_eq!(to_hex(&bits, hex.len() / 2).unwrap(), hex.to_uppercase());
        }
    }

    #[test]
    fn test_to_hex_every_single_byte() {
        for value in 0..=255u8 {
            let hex = format!("{:02X}", value);
            let bits = from_hex_default(&hex).unwrap();
            assert_eq!(to_hex(&bits, 1).unwrap(), hex);
        }
    }

    #[test]
    fn test_to_hex_rejects_out_of_range() {
        let bits = set_of([EmvBit::new(3, 1, true)]);
        assert_eq!(
            to_hex(&bits, 2),
            Err(TlvError::IndexOutOfRange {
                byte_number: 3,
                bit_number: 1,
                field_length: 2,
            })
        );
        assert!(to_hex(&set_of([EmvBit::new(0, 1, false)]), 2).is_err());
        assert!(to_hex(&set_of([EmvBit::new(1, 9, true)]), 2).is_err());
    }

    #[test]
    fn test_from_hex_rejects_odd_length() {
        assert!(matches!(from_hex_default("8"), Err(TlvError::InvalidHex(_))));
    }
}
