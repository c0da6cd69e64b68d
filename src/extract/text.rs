//! Plain text extraction and byte-to-text decoding.

use super::PageExtractor;
use crate::detect::ResourceKind;
use crate::error::ExtractError;
use crate::model::Page;

/// Decode bytes to text.
///
/// UTF-16 with a byte order mark first, then UTF-8 (BOM stripped), falling
/// back to Latin-1 so decoding never fails.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        return decode_utf16(rest, u16::from_le_bytes);
    }

    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        // Fallback: Latin-1
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|c| to_unit([c[0], c[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Plain text extractor. The whole file is one page.
#[derive(Debug, Clone, Default)]
pub struct TxtExtractor {
    _private: (),
}

impl TxtExtractor {
    /// Create a new text extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PageExtractor for TxtExtractor {
    fn name(&self) -> &str {
        "txt"
    }

    fn kinds(&self) -> &[ResourceKind] {
        &[ResourceKind::Txt]
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<Vec<Page>, ExtractError> {
        Ok(vec![Page::single(decode_text(data))])
    }
}
