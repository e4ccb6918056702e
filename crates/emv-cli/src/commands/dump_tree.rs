//! Render a parsed TLV tree, one object per line

use std::fmt::Write;

use emv_tlv::{tags, BerTlv, TlvResult};

use crate::formatters::{self, FormatMode};

/// Render `tlvs` and their descendants, indenting two spaces per level
pub fn render_tree(tlvs: &[BerTlv], indent: usize, mode: FormatMode) -> TlvResult<String> {
    let mut out = String::new();
    write_tree(&mut out, tlvs, indent, mode)?;
    Ok(out)
}

fn write_tree(out: &mut String, tlvs: &[BerTlv], indent: usize, mode: FormatMode) -> TlvResult<()> {
    let indent_str = " ".repeat(indent * 2);

    for tlv in tlvs {
        let tag = tlv.tag();
        let _ = write!(out, "{}[{}]", indent_str, tag);
        if mode == FormatMode::Human {
            let _ = write!(out, " {}", tags::tag_name(tag));
        }

        match tlv {
            BerTlv::Constructed { children, .. } => {
                let length = tlv.value()?.len();
                let _ = writeln!(out, " ({} bytes, {} children)", length, children.len());
                write_tree(out, children, indent + 1, mode)?;
            }
            BerTlv::Primitive { value, .. } => {
                let formatted = formatters::format_value(tag, value, mode);
                let _ = writeln!(out, ": {}", formatted);
            }
        }
    }

    Ok(())
}
