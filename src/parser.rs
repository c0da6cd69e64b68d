//! Parser dispatch: classify a URI, pick an extractor, build the document.

use std::sync::Arc;

use crate::detect::{self, ResourceKind};
use crate::edoc::{CompositeLink, EdocResolver, HttpProbe, RemoteProbe};
use crate::error::{Error, Result};
use crate::extract::{normalize_pages, ExtractorRegistry, PageExtractor};
use crate::metadata::fetch_metadata;
use crate::model::{self, Document, Page};
use crate::options::ParseOptions;
use crate::source::ResourceReader;

/// Turns resource URIs into [`Document`]s.
///
/// A parser is built once and holds no per-call state; share it by reference
/// (it is `Send + Sync`) and call [`parse`](Self::parse) from as many threads
/// as needed.
///
/// # Example
///
/// ```no_run
/// use edocparse::{DocumentParser, ParseOptions};
///
/// let parser = DocumentParser::with_options(ParseOptions::new().local_only())?;
/// let doc = parser.parse("/data/volltexte/2009/1120/pdf/05.pdf")?;
/// if let Some(title) = doc.metadata().and_then(|m| m.title.as_deref()) {
///     println!("{}: {} pages", title, doc.page_count());
/// }
/// # Ok::<(), edocparse::Error>(())
/// ```
pub struct DocumentParser {
    registry: ExtractorRegistry,
    reader: ResourceReader,
    resolver: EdocResolver,
    options: ParseOptions,
}

impl DocumentParser {
    /// Create a parser with default options and the built-in extractors.
    pub fn new() -> Result<Self> {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Result<Self> {
        let reader = ResourceReader::new(&options)?;
        let resolver = if options.remote_detection {
            EdocResolver::new(Arc::new(HttpProbe::new(&options)?))
        } else {
            EdocResolver::local_only()
        };

        Ok(Self {
            registry: ExtractorRegistry::with_defaults(),
            reader,
            resolver,
            options,
        })
    }

    /// Replace the extractor registry.
    pub fn with_registry(mut self, registry: ExtractorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the remote probe used for eDoc detection.
    pub fn with_probe(mut self, probe: Arc<dyn RemoteProbe>) -> Self {
        self.resolver = EdocResolver::new(probe);
        self
    }

    /// Get the extractor registry.
    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Find the composite eDoc link of a URI, if it has one.
    pub fn resolve(&self, uri: &str) -> Option<CompositeLink> {
        self.resolver.resolve(uri)
    }

    /// Classify a URI, including the eDoc check.
    ///
    /// Unlike [`detect::classify`] this may touch the filesystem or network
    /// when the URI is shaped like an eDoc payload.
    pub fn classify(&self, uri: &str) -> ResourceKind {
        if self.resolve(uri).is_some() {
            ResourceKind::EDoc
        } else {
            detect::classify(uri)
        }
    }

    /// Parse the resource behind `uri`.
    pub fn parse(&self, uri: &str) -> Result<Document> {
        if let Some(link) = self.resolve(uri) {
            log::debug!("{} is an eDoc, metadata at {}", uri, link.index_uri);
            return self.parse_edoc(&link);
        }

        let kind = detect::classify(uri);
        log::debug!("Classified {} as {}", uri, kind);

        let extractor = self
            .registry
            .get(kind)
            .ok_or(Error::NoParserAvailable(kind))?;
        let pages = self.extract(extractor.as_ref(), uri)?;

        Ok(model::build(kind, uri, pages))
    }

    fn parse_edoc(&self, link: &CompositeLink) -> Result<Document> {
        let extractor = self
            .registry
            .get(ResourceKind::Pdf)
            .ok_or(Error::NoParserAvailable(ResourceKind::EDoc))?;

        let pages = self.extract(extractor.as_ref(), &link.payload_uri)?;
        let metadata = fetch_metadata(&link.index_uri, &self.reader)?;

        let mut document = model::build(ResourceKind::EDoc, &link.payload_uri, pages);
        document.attach_metadata(metadata);
        Ok(document)
    }

    fn extract(&self, extractor: &dyn PageExtractor, uri: &str) -> Result<Vec<Page>> {
        log::debug!("Extracting {} with {}", uri, extractor.name());

        let pages = extractor
            .extract_pages(uri, &self.reader)
            .map_err(|source| Error::ExtractionFailed {
                uri: uri.to_string(),
                source,
            })?;

        Ok(if self.options.normalize_unicode {
            normalize_pages(pages)
        } else {
            pages
        })
    }
}

impl std::fmt::Debug for DocumentParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentParser")
            .field("kinds", &self.registry.kinds())
            .field("resolver", &self.resolver)
            .field("options", &self.options)
            .finish()
    }
}
