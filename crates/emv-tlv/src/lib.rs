//! EMV TLV - BER-TLV and bit-field codecs for EMV card data
//!
//! Two independent codecs:
//!
//! - [`parser`] and [`tlv`] decode concatenated BER-TLV objects into a tree
//!   of [`BerTlv`] nodes and encode them back to bytes.
//! - [`bit`] converts fixed-width flag fields to and from [`EmvBit`] sets.
//!
//! ```
//! use emv_tlv::{hex_to_bytes, parse, Tag};
//!
//! let data = hex_to_bytes("70075A051234567890").unwrap();
//! let record = parse(&data).unwrap();
//! let pan = record.find_tlv(&Tag::from_static(&[0x5A])).unwrap();
//! assert_eq!(pan.value_as_hex_string().unwrap(), "1234567890");
//! ```

pub mod bit;
pub mod cursor;
pub mod error;
pub mod hex;
pub mod length;
pub mod parser;
pub mod tag;
pub mod tags;
pub mod tlv;

pub use bit::{label_for, EmvBit, EnumeratedBitField};
pub use error::{TlvError, TlvResult};
pub use self::hex::{bytes_to_hex, hex_to_bytes};
pub use length::{decode_length, encode_length};
pub use parser::{parse, parse_as_primitive_tag, parse_list, ParseOptions, TlvParser};
pub use tag::Tag;
pub use tlv::{find_tlv, BerTlv};
