//! PDF text extraction using lopdf.

use lopdf::Document as LopdfDocument;

use super::PageExtractor;
use crate::detect::{pdf_version, ResourceKind};
use crate::error::ExtractError;
use crate::model::{number_pages, Page};

/// PDF extractor.
///
/// Text is extracted one page at a time, so page N carries only the text
/// drawn on page N.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    _private: (),
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PageExtractor for PdfExtractor {
    fn name(&self) -> &str {
        "pdf"
    }

    fn kinds(&self) -> &[ResourceKind] {
        &[ResourceKind::Pdf]
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<Vec<Page>, ExtractError> {
        let version = pdf_version(data).ok_or(ExtractError::UnknownFormat("PDF"))?;
        let doc = LopdfDocument::load_mem(data)?;

        let page_ids = doc.get_pages();
        log::debug!("PDF {}: {} pages", version, page_ids.len());

        let texts = page_ids.keys().map(|&page_num| {
            doc.extract_text(&[page_num]).unwrap_or_else(|e| {
                // Keep the slot so later pages keep their numbers
                log::debug!("No text on page {}: {}", page_num, e);
                String::new()
            })
        });

        Ok(number_pages(texts))
    }
}
