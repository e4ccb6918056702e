//! Named bit patterns within a bit field

use std::collections::BTreeSet;

use super::{to_hex, EmvBit};
use crate::error::TlvResult;

/// A value label that applies when a decoded field matches a bit pattern
///
/// The pattern lists bits that must be set as well as bits that must be
/// clear, e.g. `Byte 3 Bit 8 = 1, Byte 3 Bit 7 = 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumeratedBitField {
    bits: BTreeSet<EmvBit>,
    value: String,
}

impl EnumeratedBitField {
    /// # Panics
    /// Panics if `bits` is empty.
    pub fn new(bits: BTreeSet<EmvBit>, value: impl Into<String>) -> Self {
        assert!(!bits.is_empty(), "a bit field pattern needs at least one bit");
        Self {
            bits,
            value: value.into(),
        }
    }

    pub fn bits(&self) -> &BTreeSet<EmvBit> {
        &self.bits
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The label if every bit of the pattern appears in `decoded`
    pub fn value_in(&self, decoded: &BTreeSet<EmvBit>) -> Option<&str> {
        self.bits
            .is_subset(decoded)
            .then_some(self.value.as_str())
    }

    /// Describe where the pattern sits
    ///
    /// Without a decoded field this lists the pattern, e.g.
    /// `"Byte 3 Bit 8 = 1"`. With one, the pattern is rendered as hex the
    /// size of that field, followed by the positions:
    /// `"000080 (Byte 3 Bit 8)"`.
    pub fn position_in(&self, decoded: Option<&BTreeSet<EmvBit>>) -> TlvResult<String> {
        let Some(decoded) = decoded else {
            return Ok(self.pattern_label());
        };

        let hex = to_hex(&self.bits, decoded.len() / 8)?;
        let positions = match self.single_bit() {
            Some(bit) => bit.position_label(),
            None => self.pattern_label(),
        };
        Ok(format!("{} ({})", hex, positions))
    }

    /// Zero-based offset of the first byte the pattern touches
    pub fn start_bytes_offset(&self) -> usize {
        self.first_byte_number() - 1
    }

    /// Number of bytes spanned by the pattern
    pub fn length_in_bytes(&self) -> usize {
        self.last_byte_number() - self.first_byte_number() + 1
    }

    fn first_byte_number(&self) -> usize {
        self.bits
            .iter()
            .map(EmvBit::byte_number)
            .min()
            .unwrap_or(1)
    }

    fn last_byte_number(&self) -> usize {
        self.bits
            .iter()
            .map(EmvBit::byte_number)
            .max()
            .unwrap_or(1)
    }

    fn single_bit(&self) -> Option<&EmvBit> {
        match self.bits.len() {
            1 => self.bits.iter().next(),
            _ => None,
        }
    }

    fn pattern_label(&self) -> String {
        self.bits
            .iter()
            .map(|bit| bit.to_label(false))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
