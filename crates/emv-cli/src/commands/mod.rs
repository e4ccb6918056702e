pub mod bits;
pub mod dump_tree;
pub mod encode;
pub mod tlv;

use emv_tlv::{hex_to_bytes, TlvResult};

/// Decode hex typed on the command line, ignoring spaces and colons
pub(crate) fn input_bytes(hex: &str) -> TlvResult<Vec<u8>> {
    let cleaned: String = hex
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex_to_bytes(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_bytes_ignores_separators() {
        assert_eq!(input_bytes("9F 02:06").unwrap(), vec![0x9F, 0x02, 0x06]);
        assert!(input_bytes("9F0").is_err());
    }
}
