//! OpenDocument Text (ODT) extraction.
//!
//! ODT files are zip archives; the body text lives in `content.xml`.

use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use super::PageExtractor;
use crate::detect::{is_zip_bytes, ResourceKind};
use crate::error::ExtractError;
use crate::model::Page;

/// ODT extractor. The whole document is one page.
#[derive(Debug, Clone, Default)]
pub struct OdtExtractor {
    _private: (),
}

impl OdtExtractor {
    /// Create a new ODT extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PageExtractor for OdtExtractor {
    fn name(&self) -> &str {
        "odt"
    }

    fn kinds(&self) -> &[ResourceKind] {
        &[ResourceKind::Odt]
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<Vec<Page>, ExtractError> {
        if !is_zip_bytes(data) {
            return Err(ExtractError::UnknownFormat("ODT"));
        }

        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let mut content = String::new();
        archive
            .by_name("content.xml")?
            .read_to_string(&mut content)?;

        Ok(vec![Page::single(parse_content(&content)?)])
    }
}

/// Collect paragraph and heading text from `content.xml`, one line each.
fn parse_content(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if is_block(&e) => depth += 1,
            Event::End(e) if matches!(e.local_name().as_ref(), b"p" | b"h") => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    text.push('\n');
                }
            }
            Event::Empty(e) => match e.local_name().as_ref() {
                b"s" if depth > 0 => {
                    let count = e
                        .try_get_attribute("text:c")
                        .ok()
                        .flatten()
                        .and_then(|a| String::from_utf8_lossy(&a.value).parse::<usize>().ok())
                        .unwrap_or(1);
                    text.extend(std::iter::repeat(' ').take(count));
                }
                b"tab" if depth > 0 => text.push('\t'),
                b"line-break" if depth > 0 => text.push('\n'),
                b"p" | b"h" if depth == 0 => text.push('\n'),
                _ => {}
            },
            Event::Text(e) if depth > 0 => text.push_str(&e.unescape()?),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text.trim_end().to_string())
}

fn is_block(e: &BytesStart<'_>) -> bool {
    matches!(e.local_name().as_ref(), b"p" | b"h")
}
