//! BER-TLV data objects

use std::borrow::Cow;

use crate::error::{TlvError, TlvResult};
use crate::hex::{bytes_to_hex, hex_to_bytes};
use crate::length::{encode_length, encoded_length_size};
use crate::tag::Tag;

/// A BER-TLV data object
///
/// A node is either primitive (raw value bytes) or constructed (an ordered
/// list of child objects). A constructed tag may still appear as a
/// `Primitive` node when its value could not be decomposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BerTlv {
    Primitive { tag: Tag, value: Vec<u8> },
    Constructed { tag: Tag, children: Vec<BerTlv> },
}

impl BerTlv {
    /// Primitive object holding `value`
    pub fn from_bytes(tag: Tag, value: impl Into<Vec<u8>>) -> Self {
        BerTlv::Primitive {
            tag,
            value: value.into(),
        }
    }

    /// Primitive object whose value is given as hex
    pub fn from_hex_value(tag: Tag, hex: &str) -> TlvResult<Self> {
        Ok(Self::from_bytes(tag, hex_to_bytes(hex)?))
    }

    /// Primitive object holding a single byte
    ///
    /// Values above 255 must be supplied as a byte array instead.
    pub fn from_u8_value(tag: Tag, value: u32) -> TlvResult<Self> {
        let byte = u8::try_from(value).map_err(|_| TlvError::ValueOutOfRange(value))?;
        Ok(Self::from_bytes(tag, vec![byte]))
    }

    /// Constructed object owning `children`
    pub fn from_children(tag: Tag, children: Vec<BerTlv>) -> Self {
        BerTlv::Constructed { tag, children }
    }

    /// Constructed object with exactly two children
    pub fn from_pair(tag: Tag, first: BerTlv, second: BerTlv) -> Self {
        Self::from_children(tag, vec![first, second])
    }

    pub fn tag(&self) -> &Tag {
        match self {
            BerTlv::Primitive { tag, .. } | BerTlv::Constructed { tag, .. } => tag,
        }
    }

    /// True for nodes holding children, regardless of the tag's constructed bit
    pub fn is_constructed(&self) -> bool {
        matches!(self, BerTlv::Constructed { .. })
    }

    /// Value bytes
    ///
    /// For a constructed node this is every child's full encoding, in order.
    pub fn value(&self) -> TlvResult<Cow<'_, [u8]>> {
        match self {
            BerTlv::Primitive { value, .. } => Ok(Cow::Borrowed(value)),
            BerTlv::Constructed { children, .. } => {
                let mut value = Vec::new();
                for child in children {
                    child.write_to(&mut value)?;
                }
                Ok(Cow::Owned(value))
            }
        }
    }

    pub fn value_as_hex_string(&self) -> TlvResult<String> {
        Ok(bytes_to_hex(&self.value()?))
    }

    /// Immediate children; empty for a primitive node
    pub fn children(&self) -> &[BerTlv] {
        match self {
            BerTlv::Primitive { .. } => &[],
            BerTlv::Constructed { children, .. } => children,
        }
    }

    /// First immediate child with `tag`
    pub fn find_tlv(&self, tag: &Tag) -> Option<&BerTlv> {
        find_tlv(self.children(), tag)
    }

    /// All immediate children with `tag`, in stored order
    pub fn find_tlvs(&self, tag: &Tag) -> Vec<&BerTlv> {
        self.children()
            .iter()
            .filter(|child| child.tag() == tag)
            .collect()
    }

    /// Encode as tag ++ length ++ value
    pub fn to_binary(&self) -> TlvResult<Vec<u8>> {
        let mut out = Vec::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    pub fn to_hex_string(&self) -> TlvResult<String> {
        Ok(bytes_to_hex(&self.to_binary()?))
    }

    /// Size in bytes of this node's encoded length field
    pub fn encoded_length_size(&self) -> TlvResult<usize> {
        encoded_length_size(self.value()?.len())
    }

    fn write_to(&self, out: &mut Vec<u8>) -> TlvResult<()> {
        let value = self.value()?;
        out.extend_from_slice(self.tag().bytes());
        out.extend_from_slice(&encode_length(value.len())?);
        out.extend_from_slice(&value);
        Ok(())
    }
}

/// First object in `tlvs` with `tag`
pub fn find_tlv<'a>(tlvs: &'a [BerTlv], tag: &Tag) -> Option<&'a BerTlv> {
    tlvs.iter().find(|tlv| tlv.tag() == tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AMOUNT: Tag = Tag::from_static(&[0x9F, 0x02]);
    const PAN: Tag = Tag::from_static(&[0x5A]);
    const RECORD: Tag = Tag::from_static(&[0x70]);

    #[test]
    fn test_primitive_to_binary() {
        let tlv = BerTlv::from_hex_value(AMOUNT, "000000001000").unwrap();
        assert_eq!(tlv.to_hex_string().unwrap(), "9F0206000000001000");
        assert_eq!(tlv.value_as_hex_string().unwrap(), "000000001000");
        assert!(tlv.children().is_empty());
        assert!(tlv.find_tlv(&AMOUNT).is_none());
    }

    #[test]
    fn test_constructed_value_is_children_encoding() {
        let tlv = BerTlv::from_pair(
            RECORD,
            BerTlv::from_u8_value(PAN, 0x12).unwrap(),
            BerTlv::from_bytes(AMOUNT, vec![0x01, 0x02]),
        );
        assert_eq!(tlv.value_as_hex_string().unwrap(), "5A01129F02020102");
        assert_eq!(tlv.to_hex_string().unwrap(), "70085A01129F02020102");
        assert!(tlv.is_constructed());
    }

    #[test]
    fn test_long_value_uses_long_form_length() {
        let tlv = BerTlv::from_bytes(PAN, vec![0xAB; 200]);
        let encoded = tlv.to_binary().unwrap();
        assert_eq!(&encoded[..3], &[0x5A, 0x81, 0xC8]);
        assert_eq!(encoded.len(), 203);
        assert_eq!(tlv.encoded_length_size().unwrap(), 2);
    }

    #[test]
    fn test_from_u8_value_range() {
        assert_eq!(
            BerTlv::from_u8_value(PAN, 255).unwrap().value().unwrap().as_ref(),
            &[0xFF]
        );
        assert_eq!(
            BerTlv::from_u8_value(PAN, 256),
            Err(TlvError::ValueOutOfRange(256))
        );
    }

    #[test]
    fn test_find_tlvs_preserves_order() {
        let tlv = BerTlv::from_children(
            RECORD,
            vec![
                BerTlv::from_bytes(PAN, vec![0x01]),
                BerTlv::from_bytes(AMOUNT, vec![0x02]),
                BerTlv::from_bytes(PAN, vec![0x03]),
            ],
        );
        let found = tlv.find_tlvs(&PAN);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].value().unwrap().as_ref(), &[0x01]);
        assert_eq!(found[1].value().unwrap().as_ref(), &[0x03]);
        assert_eq!(
            tlv.find_tlv(&PAN).unwrap().value().unwrap().as_ref(),
            &[0x01]
        );
        assert!(find_tlv(tlv.children(), &RECORD).is_none());
    }

    #[test]
    fn test_empty_constructed() {
        let tlv = BerTlv::from_children(RECORD, Vec::new());
        assert_eq!(tlv.to_binary().unwrap(), vec![0x70, 0x00]);
    }
}
