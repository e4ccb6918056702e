//! Recursive BER-TLV parser
//!
//! Card data captured in the field is often imperfect, so the parser is
//! lenient in two places:
//!
//! - A value shorter than its declared length is read as far as the buffer
//!   goes instead of failing.
//! - A constructed tag whose value does not decompose into TLV objects is
//!   kept as a leaf holding the raw bytes.
//!
//! Padding bytes (`0x00`) between objects are skipped.

use tracing::{debug, trace};

use crate::cursor::ByteCursor;
use crate::error::{TlvError, TlvResult};
use crate::length::decode_length;
use crate::tag::Tag;
use crate::tlv::BerTlv;

/// Default bound on constructed-tag nesting
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Decompose the values of constructed tags into children
    pub parse_constructed: bool,
    /// Deepest nesting level accepted before failing with `TooDeeplyNested`
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            parse_constructed: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Set whether constructed tags are decomposed
    pub fn parse_constructed(mut self, parse_constructed: bool) -> Self {
        self.parse_constructed = parse_constructed;
        self
    }

    /// Set the nesting bound
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// BER-TLV parser
#[derive(Debug, Clone, Copy, Default)]
pub struct TlvParser {
    options: ParseOptions,
}

impl TlvParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse every top-level object in `data`, in encounter order
    pub fn parse_list(&self, data: &[u8]) -> TlvResult<Vec<BerTlv>> {
        self.parse_level(data, 0)
    }

    /// Parse the first top-level object in `data`
    pub fn parse_first(&self, data: &[u8]) -> TlvResult<BerTlv> {
        self.parse_list(data)?
            .into_iter()
            .next()
            .ok_or(TlvError::Empty)
    }

    fn parse_level(&self, data: &[u8], depth: usize) -> TlvResult<Vec<BerTlv>> {
        if depth > self.options.max_depth {
            return Err(TlvError::TooDeeplyNested {
                max_depth: self.options.max_depth,
            });
        }

        let mut cursor = ByteCursor::new(data);
        let mut tlvs = Vec::new();

        while cursor.has_remaining() {
            let tag = Tag::parse(&mut cursor)?;
            if tag.is_padding() {
                trace!(offset = cursor.position() - 1, "Skipping padding byte");
                continue;
            }

            match self.parse_object(&mut cursor, &tag, depth) {
                Ok(tlv) => tlvs.push(tlv),
                Err(e @ TlvError::TooDeeplyNested { .. }) => return Err(e),
                Err(e) => return Err(TlvError::structural(tag, e)),
            }
        }

        Ok(tlvs)
    }

    /// Read the length and value following `tag`
    fn parse_object(
        &self,
        cursor: &mut ByteCursor<'_>,
        tag: &Tag,
        depth: usize,
    ) -> TlvResult<BerTlv> {
        let (length, _) = decode_length(cursor)?;
        let value = cursor.read_up_to(length);
        if value.len() < length {
            trace!(%tag, declared = length, available = value.len(), "Truncated value");
        }

        if !(tag.is_constructed() && self.options.parse_constructed) {
            return Ok(BerTlv::from_bytes(tag.clone(), value));
        }

        match self.parse_level(value, depth + 1) {
            Ok(children) => Ok(BerTlv::from_children(tag.clone(), children)),
            Err(e @ TlvError::TooDeeplyNested { .. }) => Err(e),
            Err(e) => {
                debug!(%tag, error = %e, "Constructed value does not decompose, keeping raw bytes");
                Ok(BerTlv::from_bytes(tag.clone(), value))
            }
        }
    }
}

/// Parse the first object in `data`, decomposing constructed tags
pub fn parse(data: &[u8]) -> TlvResult<BerTlv> {
    TlvParser::default().parse_first(data)
}

/// Parse the first object in `data`, keeping every value as raw bytes
pub fn parse_as_primitive_tag(data: &[u8]) -> TlvResult<BerTlv> {
    TlvParser::new(ParseOptions::default().parse_constructed(false)).parse_first(data)
}

/// Parse every top-level object in `data`
pub fn parse_list(data: &[u8], parse_constructed_tags: bool) -> TlvResult<Vec<BerTlv>> {
    TlvParser::new(ParseOptions::default().parse_constructed(parse_constructed_tags))
        .parse_list(data)
}
