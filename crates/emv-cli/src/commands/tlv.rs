use emv_tlv::{ParseOptions, TlvParser, TlvResult};
use tracing::{debug, info};

use crate::formatters::FormatMode;

use super::dump_tree::render_tree;
use super::input_bytes;

/// Parse concatenated TLV objects and print them as a tree
pub fn cmd_tlv(hex: &str, options: ParseOptions, format_mode: FormatMode) -> TlvResult<()> {
    let data = input_bytes(hex)?;
    debug!(bytes = data.len(), ?options, "Parsing TLV data");

    let tlvs = TlvParser::new(options).parse_list(&data)?;
    info!(objects = tlvs.len(), "Parsed TLV data");

    println!("TLV Dump - {} Mode\n", format_mode.description());
    print!("{}", render_tree(&tlvs, 0, format_mode)?);

    if format_mode == FormatMode::Raw {
        let mut reencoded = Vec::with_capacity(data.len());
        for tlv in &tlvs {
            reencoded.extend_from_slice(&tlv.to_binary()?);
        }
        if reencoded != data {
            println!("\nNote: re-encoding differs from input (padding or truncated values)");
        }
    }

    Ok(())
}
