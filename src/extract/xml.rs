//! Generic XML text extraction.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::PageExtractor;
use crate::detect::ResourceKind;
use crate::error::ExtractError;
use crate::model::Page;

/// XML extractor. Every non-blank text or CDATA node becomes one line.
#[derive(Debug, Clone, Default)]
pub struct XmlExtractor {
    _private: (),
}

impl XmlExtractor {
    /// Create a new XML extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PageExtractor for XmlExtractor {
    fn name(&self) -> &str {
        "xml"
    }

    fn kinds(&self) -> &[ResourceKind] {
        &[ResourceKind::Xml]
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<Vec<Page>, ExtractError> {
        let mut reader = Reader::from_reader(data);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut lines: Vec<String> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Text(e) => {
                    let text = e.unescape()?;
                    if !text.trim().is_empty() {
                        lines.push(text.into_owned());
                    }
                }
                Event::CData(e) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).trim().to_string();
                    if !text.is_empty() {
                        lines.push(text);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(vec![Page::single(lines.join("\n"))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_extractor() {
        let xml = r#"<?xml version="1.0"?>
<TEI>
  <teiHeader><title>Briefwechsel</title></teiHeader>
  <text><p>Lieber Freund, &amp; Kollege</p><note><![CDATA[<ungeprüft>]]></note></text>
</TEI>"#;
        let pages = XmlExtractor::new().extract_bytes(xml.as_bytes()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(
            pages[0].text,
            "Briefwechsel\nLieber Freund, & Kollege\n<ungeprüft>"
        );
    }

    #[test]
    fn test_xml_extractor_malformed() {
        let result = XmlExtractor::new().extract_bytes(b"<a><b></a>");
        assert!(matches!(result, Err(ExtractError::Xml(_))));
    }
}
