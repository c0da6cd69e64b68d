//! Format extractors and the registry dispatching resource kinds to them.
//!
//! An extractor turns raw bytes into ordered pages of text. Extractors hold
//! no per-call state, so one instance per kind is built once and shared by
//! reference across concurrent parses.
//!
//! # Example
//!
//! ```no_run
//! use edocparse::extract::{ExtractorRegistry, PdfExtractor};
//! use edocparse::{ParseOptions, ResourceKind, ResourceReader};
//! use std::sync::Arc;
//!
//! fn main() -> edocparse::Result<()> {
//!     let mut registry = ExtractorRegistry::new();
//!     registry.register(Arc::new(PdfExtractor::new()));
//!
//!     let reader = ResourceReader::new(&ParseOptions::default())?;
//!     let extractor = registry.get(ResourceKind::Pdf).expect("registered above");
//!     let pages = extractor.extract_pages("report.pdf", &reader);
//!     println!("{:?}", pages.map(|p| p.len()));
//!     Ok(())
//! }
//! ```

mod doc;
mod html;
mod odt;
mod pdf;
mod text;
mod xml;

pub use doc::DocExtractor;
pub use html::HtmlExtractor;
pub use odt::OdtExtractor;
pub use pdf::PdfExtractor;
pub use text::{decode_text, TxtExtractor};
pub use xml::XmlExtractor;

use crate::detect::ResourceKind;
use crate::error::ExtractError;
use crate::model::Page;
use crate::source::ResourceReader;
use std::collections::HashMap;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

/// Trait for format extractors.
///
/// Implement this trait to add or replace the backend for a resource kind.
pub trait PageExtractor: Send + Sync {
    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Resource kinds this extractor handles.
    fn kinds(&self) -> &[ResourceKind];

    /// Extract ordered pages from a payload.
    ///
    /// Page N must hold only page N's text.
    fn extract_bytes(&self, data: &[u8]) -> Result<Vec<Page>, ExtractError>;

    /// Read the resource behind `uri` and extract its pages.
    fn extract_pages(
        &self,
        uri: &str,
        reader: &ResourceReader,
    ) -> Result<Vec<Page>, ExtractError> {
        let data = reader.read(uri)?;
        self.extract_bytes(&data)
    }

    /// Check if this extractor handles the given kind.
    fn supports(&self, kind: ResourceKind) -> bool {
        self.kinds().contains(&kind)
    }
}

/// Registry mapping resource kinds to extractors.
pub struct ExtractorRegistry {
    extractors: HashMap<ResourceKind, Arc<dyn PageExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Create a registry with the built-in extractors.
    ///
    /// Images have no extractor.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PdfExtractor::new()));
        registry.register(Arc::new(DocExtractor::new()));
        registry.register(Arc::new(OdtExtractor::new()));
        registry.register(Arc::new(XmlExtractor::new()));
        registry.register(Arc::new(HtmlExtractor::new()));
        registry.register(Arc::new(TxtExtractor::new()));
        registry
    }

    /// Register an extractor for all kinds it reports, replacing any
    /// previous extractor for those kinds.
    pub fn register(&mut self, extractor: Arc<dyn PageExtractor>) {
        for kind in extractor.kinds() {
            self.extractors.insert(*kind, extractor.clone());
        }
    }

    /// Get the extractor for a kind.
    pub fn get(&self, kind: ResourceKind) -> Option<Arc<dyn PageExtractor>> {
        self.extractors.get(&kind).cloned()
    }

    /// Check if a kind has an extractor.
    pub fn supports(&self, kind: ResourceKind) -> bool {
        self.extractors.contains_key(&kind)
    }

    /// Get all kinds with an extractor.
    pub fn kinds(&self) -> Vec<ResourceKind> {
        self.extractors.keys().copied().collect()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// NFC-normalize the text of every page.
pub(crate) fn normalize_pages(pages: Vec<Page>) -> Vec<Page> {
    pages
        .into_iter()
        .map(|page| Page {
            text: page.text.nfc().collect(),
            ..page
        })
        .collect()
}
