//! BER-TLV tag identifiers

use std::borrow::Cow;
use std::fmt;

use crate::cursor::ByteCursor;
use crate::error::{TlvError, TlvResult};
use crate::hex::{bytes_to_hex, hex_to_bytes};

/// Bit 6 of the first tag byte marks a constructed object
const CONSTRUCTED_BIT: u8 = 0x20;

/// Low five bits all set means the tag number continues in later bytes
const MULTI_BYTE_MARKER: u8 = 0x1F;

/// Bit 8 of a subsequent tag byte means another byte follows
const CONTINUATION_BIT: u8 = 0x80;

/// A BER-TLV tag, kept as its raw encoded bytes
///
/// The tag number is never decoded; equality and ordering are over the
/// encoded bytes, so tags work directly as lookup keys.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(Cow<'static, [u8]>);

impl Tag {
    /// Tag from a static byte slice, usable in `const` items
    ///
    /// # Panics
    /// Panics (at compile time in a `const`) if `bytes` is empty.
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        assert!(!bytes.is_empty(), "a tag has at least one byte");
        Tag(Cow::Borrowed(bytes))
    }

    /// Tag from owned encoded bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> TlvResult<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(TlvError::TagParse("a tag has at least one byte".to_string()));
        }
        Ok(Tag(Cow::Owned(bytes)))
    }

    /// Tag from its hex encoding, e.g. `"9F02"`
    pub fn from_hex(hex: &str) -> TlvResult<Self> {
        Self::from_bytes(hex_to_bytes(hex)?)
    }

    /// Parse one tag at the cursor
    ///
    /// When the low five bits of the first byte are all set, subsequent bytes
    /// belong to the tag for as long as their high bit is set.
    pub fn parse(cursor: &mut ByteCursor<'_>) -> TlvResult<Self> {
        let first = cursor
            .read_byte()
            .ok_or_else(|| TlvError::TagParse("no bytes left for tag".to_string()))?;

        let mut bytes = vec![first];
        if first & MULTI_BYTE_MARKER == MULTI_BYTE_MARKER {
            loop {
                let next = cursor.read_byte().ok_or_else(|| {
                    TlvError::TagParse(format!(
                        "tag {} ends before its last byte",
                        bytes_to_hex(&bytes)
                    ))
                })?;
                bytes.push(next);
                if next & CONTINUATION_BIT == 0 {
                    break;
                }
            }
        }

        Ok(Tag(Cow::Owned(bytes)))
    }

    /// Encoded bytes of the tag
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of encoded bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, a tag holds at least one byte
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_constructed(&self) -> bool {
        self.0[0] & CONSTRUCTED_BIT != 0
    }

    /// Single `0x00` byte used to pad constructed objects
    pub fn is_padding(&self) -> bool {
        self.bytes() == [0x00]
    }

    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self.to_hex())
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
