use emv_tlv::bit::{from_hex, label_for};
use emv_tlv::TlvResult;

use super::input_bytes;

/// Print every bit of a flag field, then the set-bit summary
pub fn cmd_bits(hex: &str, first_byte_number: usize) -> TlvResult<()> {
    let hex = hex::encode_upper(input_bytes(hex)?);
    let bits = from_hex(&hex, first_byte_number)?;

    println!("Bit field {} ({} bytes)\n", hex, hex.len() / 2);
    for bit in &bits {
        let marker = if bit.is_set() { "*" } else { " " };
        println!("  {} {}", marker, bit);
    }

    let set: Vec<String> = bits
        .iter()
        .filter(|bit| bit.is_set())
        .map(|bit| bit.to_label(false))
        .collect();
    println!("\nSet: {}", if set.is_empty() { "none".to_string() } else { set.join(", ") });

    Ok(())
}

/// Print only the labels of the set bits
pub fn cmd_label(hex: &str) -> TlvResult<()> {
    let hex = hex::encode_upper(input_bytes(hex)?);
    println!("{}", label_for(&hex)?);
    Ok(())
}
