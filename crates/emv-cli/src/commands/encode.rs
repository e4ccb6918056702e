use emv_tlv::{BerTlv, Tag, TlvResult};

use super::input_bytes;

/// Value of a primitive object given on the command line
pub enum EncodeValue<'a> {
    Hex(&'a str),
    Byte(u32),
}

/// Build a primitive object from a tag and value
pub fn build_tlv(tag: &str, value: EncodeValue<'_>) -> TlvResult<BerTlv> {
    let tag = Tag::from_bytes(input_bytes(tag)?)?;
    match value {
        EncodeValue::Hex(hex) => Ok(BerTlv::from_bytes(tag, input_bytes(hex)?)),
        EncodeValue::Byte(byte) => BerTlv::from_u8_value(tag, byte),
    }
}

/// Encode a primitive object and print it as hex
pub fn cmd_encode(tag: &str, value: EncodeValue<'_>) -> TlvResult<()> {
    let tlv = build_tlv(tag, value)?;
    println!("{}", tlv.to_hex_string()?);
    Ok(())
}
