//! Assembling extracted pages into a [`Document`].

use super::{Document, MetadataRecord, Page, PaginatedDocument, PlainDocument};
use crate::detect::ResourceKind;

/// Prefix of the marker preceding each page in a paginated document's text.
pub const PAGE_MARKER_PREFIX: &str = "[page=";

/// Build the document variant matching `kind` from extracted pages.
///
/// PDF and eDoc kinds produce a [`PaginatedDocument`] whose text is every
/// page preceded by `[page=N]\n`, with an empty metadata record attached.
/// All other kinds produce a [`PlainDocument`]; several pages are joined by
/// newlines.
pub fn build(kind: ResourceKind, uri: &str, pages: Vec<Page>) -> Document {
    if kind.is_paginated() {
        let mut text = String::new();
        for page in &pages {
            text.push_str(PAGE_MARKER_PREFIX);
            text.push_str(&page.number.to_string());
            text.push_str("]\n");
            text.push_str(&page.text);
        }
        return Document::Paginated(PaginatedDocument {
            uri: uri.to_string(),
            text,
            pages,
            metadata: MetadataRecord::new(),
        });
    }

    let text = pages
        .into_iter()
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join("\n");
    Document::Plain(PlainDocument::new(uri, text))
}
