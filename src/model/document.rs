//! Document-level types.

use super::{MetadataRecord, Page};
use serde::{Deserialize, Serialize};

/// A parsed resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Document {
    /// Single text blob (DOC, ODT, XML, HTML, TXT)
    Plain(PlainDocument),

    /// Page-structured text (PDF, eDoc)
    Paginated(PaginatedDocument),
}

impl Document {
    /// URI the document was extracted from.
    pub fn uri(&self) -> &str {
        match self {
            Document::Plain(doc) => &doc.uri,
            Document::Paginated(doc) => &doc.uri,
        }
    }

    /// Full text. For paginated documents this includes the page markers.
    pub fn text(&self) -> &str {
        match self {
            Document::Plain(doc) => &doc.text,
            Document::Paginated(doc) => &doc.text,
        }
    }

    /// Attached metadata, if any.
    pub fn metadata(&self) -> Option<&MetadataRecord> {
        match self {
            Document::Plain(doc) => doc.metadata.as_ref(),
            Document::Paginated(doc) => Some(&doc.metadata),
        }
    }

    /// Pages of a paginated document; empty for plain documents.
    pub fn pages(&self) -> &[Page] {
        match self {
            Document::Plain(_) => &[],
            Document::Paginated(doc) => &doc.pages,
        }
    }

    /// Number of pages (1 for plain documents).
    pub fn page_count(&self) -> u32 {
        match self {
            Document::Plain(_) => 1,
            Document::Paginated(doc) => doc.pages.len() as u32,
        }
    }

    /// Check if this is a paginated document.
    pub fn is_paginated(&self) -> bool {
        matches!(self, Document::Paginated(_))
    }

    /// Attach a metadata record, replacing any previous one.
    pub fn attach_metadata(&mut self, metadata: MetadataRecord) {
        match self {
            Document::Plain(doc) => doc.metadata = Some(metadata),
            Document::Paginated(doc) => doc.set_metadata(metadata),
        }
    }
}

/// A document consisting of one text blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainDocument {
    /// Source URI
    pub uri: String,

    /// Extracted text
    pub text: String,

    /// Metadata, if the source provided any
    pub metadata: Option<MetadataRecord>,
}

impl PlainDocument {
    /// Create a plain document without metadata.
    pub fn new(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            text: text.into(),
            metadata: None,
        }
    }
}

/// A document with an ordered page sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedDocument {
    /// Source URI (the PDF payload for eDocs)
    pub uri: String,

    /// Concatenated text, each page preceded by its `[page=N]` marker
    pub text: String,

    /// Pages in order, 1-indexed
    pub pages: Vec<Page>,

    /// Metadata; present but empty until enriched
    pub metadata: MetadataRecord,
}

impl PaginatedDocument {
    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Replace the metadata record.
    pub fn set_metadata(&mut self, metadata: MetadataRecord) {
        self.metadata = metadata;
    }
}
