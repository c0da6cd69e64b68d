//! Document model types.
//!
//! A [`Document`] is the uniform representation handed to the storage layer:
//! extracted full text, optionally paginated, plus a [`MetadataRecord`].

mod builder;
mod document;
mod metadata;
mod page;

pub use builder::{build, PAGE_MARKER_PREFIX};
pub use document::{Document, PaginatedDocument, PlainDocument};
pub use metadata::{MetadataRecord, CREATOR_SEPARATOR};
pub use page::Page;
pub(crate) use page::number_pages;
