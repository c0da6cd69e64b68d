//! # edocparse
//!
//! Text and metadata extraction for harvested document resources.
//!
//! Given a URI (local path, `file://` URL or HTTP URL) this library decides
//! what kind of resource it is, extracts its text and returns a uniform
//! [`Document`]. PDFs that follow the eDoc repository layout, with the
//! payload under `pdf/` next to an `index.html` frontdoor page, come back
//! with the Dublin Core metadata scraped from that page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use edocparse::render::{to_json, JsonFormat};
//!
//! fn main() -> edocparse::Result<()> {
//!     let doc = edocparse::parse("volltexte/2009/1120/pdf/05.pdf")?;
//!
//!     if let Some(metadata) = doc.metadata() {
//!         println!("{:?} by {:?}", metadata.title, metadata.creators());
//!     }
//!     println!("{}", to_json(&doc, JsonFormat::Pretty)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Supported resources
//!
//! - **PDF**: paginated text, one `[page=N]` marker per page
//! - **eDoc**: a PDF plus the metadata of its frontdoor page
//! - **DOC, ODT, XML, HTML, TXT**: a single text blob
//!
//! Images are recognized but have no extractor.

pub mod detect;
pub mod edoc;
pub mod error;
pub mod extract;
pub mod metadata;
pub mod model;
pub mod options;
pub mod parser;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use detect::{classify, ResourceKind};
pub use edoc::{CompositeLink, EdocResolver, HttpProbe, RemoteProbe};
pub use error::{Error, ExtractError, Result};
pub use extract::{ExtractorRegistry, PageExtractor};
pub use metadata::{extract_metadata, fetch_metadata};
pub use model::{Document, MetadataRecord, Page, PaginatedDocument, PlainDocument};
pub use options::ParseOptions;
pub use parser::DocumentParser;
pub use render::JsonFormat;
pub use source::ResourceReader;

use once_cell::sync::OnceCell;

static DEFAULT_PARSER: OnceCell<DocumentParser> = OnceCell::new();

/// Get the process-wide parser built with default options.
///
/// The parser is constructed on first use and shared afterwards.
pub fn default_parser() -> Result<&'static DocumentParser> {
    DEFAULT_PARSER.get_or_try_init(DocumentParser::new)
}

/// Parse a resource with the default parser.
///
/// # Example
///
/// ```no_run
/// use edocparse::parse;
///
/// let doc = parse("https://edoc.example.org/volltexte/2010/1486/pdf/Heft_17.pdf").unwrap();
/// println!("{} pages", doc.page_count());
/// ```
pub fn parse(uri: &str) -> Result<Document> {
    default_parser()?.parse(uri)
}

/// Parse a resource with the default parser and serialize it to JSON.
pub fn to_json(uri: &str, format: JsonFormat) -> Result<String> {
    let doc = parse(uri)?;
    render::to_json(&doc, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_parser_is_shared() {
        let first = default_parser().unwrap();
        let second = default_parser().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_parse_unsupported() {
        let err = parse("/tmp/does-not-matter.zip").unwrap_err();
        assert!(matches!(
            err,
            Error::NoParserAvailable(ResourceKind::Unsupported)
        ));
    }

    #[test]
    fn test_to_json_plain() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"hello world").unwrap();

        let json = to_json(file.path().to_str().unwrap(), JsonFormat::Compact).unwrap();
        assert!(json.contains(r#""type":"plain""#));
        assert!(json.contains("hello world"));
    }
}
