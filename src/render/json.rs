//! JSON rendering for documents handed to the storage layer.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
///
/// Documents are internally tagged: the variant is written to a leading
/// `"type"` field (`"plain"` or `"paginated"`) next to the variant's own
/// fields. A plain document without metadata carries `"metadata": null`; a
/// paginated one always carries a metadata object, empty fields as `null`.
///
/// ```
/// use edocparse::render::{to_json, JsonFormat};
/// use edocparse::{Document, PlainDocument};
///
/// let doc = Document::Plain(PlainDocument::new("/a.txt", "Hallo"));
/// let json = to_json(&doc, JsonFormat::Compact)?;
/// assert_eq!(
///     json,
///     r#"{"type":"plain","uri":"/a.txt","text":"Hallo","metadata":null}"#
/// );
/// # Ok::<(), edocparse::Error>(())
/// ```
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("cannot serialize {}: {}", doc.uri(), e)))
}
