//! Bibliographic metadata.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Separator between accumulated creators.
pub const CREATOR_SEPARATOR: &str = " ; ";

/// Dublin-Core-style metadata of a document.
///
/// Every field is independently optional; `None` means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// DC.Title
    pub title: Option<String>,

    /// DC.Creator, multiple creators joined by [`CREATOR_SEPARATOR`]
    pub creator: Option<String>,

    /// DC.Subject: controlled-vocabulary (SWD) subject headings
    pub swd: Option<String>,

    /// Free keywords ("Freie Schlagwörter")
    pub subject: Option<String>,

    /// DC.Description
    pub description: Option<String>,

    /// DC.Identifier holding an http URI
    pub uri: Option<String>,

    /// DC.Identifier holding a URN
    pub urn: Option<String>,

    /// Dewey Decimal Classification group
    pub ddc: Option<String>,

    /// Language of the document
    pub language: Option<String>,

    /// Document type ("Dokumentart")
    pub document_type: Option<String>,

    /// ISBN
    pub isbn: Option<String>,

    /// Publishing institute
    pub publisher: Option<String>,

    /// Name of the collection the document belongs to
    pub collection_names: Option<String>,

    /// Creation of the intellectual content (January 1st of the given year)
    pub creation_date: Option<DateTime<Utc>>,

    /// Publication date
    pub publishing_date: Option<NaiveDate>,
}

impl MetadataRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a creator, keeping the order of appearance.
    pub fn add_creator(&mut self, creator: &str) {
        match self.creator {
            Some(ref mut existing) if !existing.is_empty() => {
                existing.push_str(CREATOR_SEPARATOR);
                existing.push_str(creator);
            }
            _ => self.creator = Some(creator.to_string()),
        }
    }

    /// Individual creators in order of appearance.
    pub fn creators(&self) -> Vec<&str> {
        self.creator
            .as_deref()
            .map(|c| c.split(CREATOR_SEPARATOR).collect())
            .unwrap_or_default()
    }

    /// Check if no field was found.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
