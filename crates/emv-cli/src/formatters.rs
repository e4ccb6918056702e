//! Field formatters for human-readable output

use clap::ValueEnum;
use emv_tlv::{label_for, tags, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatMode {
    /// Raw hex output
    Raw,
    /// Human-readable formatted output
    Human,
}

impl FormatMode {
    pub fn description(&self) -> &'static str {
        match self {
            FormatMode::Raw => "Raw",
            FormatMode::Human => "Human-Readable",
        }
    }
}

/// Format a primitive value based on its tag
pub fn format_value(tag: &Tag, value: &[u8], mode: FormatMode) -> String {
    if mode == FormatMode::Raw {
        return hex::encode_upper(value);
    }

    if tags::is_bit_field(tag) {
        let hex = hex::encode_upper(value);
        return match label_for(&hex) {
            Ok(label) if label.is_empty() => format!("{} (no bits set)", hex),
            Ok(label) => format!("{} ({})", hex, label),
            Err(_) => hex,
        };
    }

    match tag.bytes() {
        // Text
        [0x50] | [0x9F, 0x12] | [0x5F, 0x20] => String::from_utf8(value.to_vec())
            .map(|text| text.trim().to_string())
            .unwrap_or_else(|_| hex::encode_upper(value)),

        // Dates (YYMMDD)
        [0x5F, 0x24] | [0x5F, 0x25] if value.len() == 3 => format!(
            "20{:02X}/{:02X}/{:02X} (YY/MM/DD)",
            value[0], value[1], value[2]
        ),

        // Numeric amounts (n12)
        [0x9F, 0x02] if value.len() == 6 => {
            let digits = hex::encode_upper(value);
            let (units, cents) = digits.split_at(digits.len() - 2);
            let units = units.trim_start_matches('0');
            format!("{}.{}", if units.is_empty() { "0" } else { units }, cents)
        }

        // Track 2 Data
        [0x57] => hex::encode_upper(value).replace('D', " | "),

        [0x9F, 0x36] | [0x5F, 0x34] | [0x8F] => {
            let mut number = 0u64;
            for &byte in value.iter().take(8) {
                number = (number << 8) | byte as u64;
            }
            format!("{} (0x{})", number, hex::encode_upper(value))
        }

        _ => truncate_hex(value),
    }
}

/// Hex, abbreviated after 32 bytes
pub fn truncate_hex(value: &[u8]) -> String {
    if value.len() > 32 {
        format!(
            "{}... ({} bytes)",
            hex::encode_upper(&value[..32]),
            value.len()
        )
    } else {
        hex::encode_upper(value)
    }
}
