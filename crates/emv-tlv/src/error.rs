use thiserror::Error;

use crate::tag::Tag;

/// Errors raised by the TLV and bit-field codecs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TlvError {
    #[error("Malformed length: {0}")]
    MalformedLength(String),

    #[error("Length {0} is too large to encode")]
    LengthOverflow(usize),

    #[error("Malformed tag: {0}")]
    TagParse(String),

    /// A failure while reading the length or value that follows `tag`
    #[error("Failed parsing {tag},{source}")]
    StructuralParse {
        tag: Tag,
        #[source]
        source: Box<TlvError>,
    },

    #[error("Value greater than 255 must be encoded in a byte array: {0}")]
    ValueOutOfRange(u32),

    #[error("Byte {byte_number} Bit {bit_number} is outside a {field_length} byte field")]
    IndexOutOfRange {
        byte_number: usize,
        bit_number: u8,
        field_length: usize,
    },

    #[error("TLV nesting exceeds the maximum depth of {max_depth}")]
    TooDeeplyNested { max_depth: usize },

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] ::hex::FromHexError),

    #[error("No TLV objects found in input")]
    Empty,
}

impl TlvError {
    pub(crate) fn structural(tag: Tag, source: TlvError) -> Self {
        TlvError::StructuralParse {
            tag,
            source: Box::new(source),
        }
    }
}

/// Result type alias for codec operations
pub type TlvResult<T> = Result<T, TlvError>;
