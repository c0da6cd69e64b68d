//! Resource classification by URI suffix and payload signature sniffing.

use serde::{Deserialize, Serialize};

/// Nominal kind of a harvested resource.
///
/// Derived from the URI that produced it; the eDoc kind is only ever assigned
/// by the [`EdocResolver`](crate::edoc::EdocResolver), never by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Portable Document Format
    Pdf,
    /// Microsoft Word 97-2003
    Doc,
    /// OpenDocument Text
    Odt,
    /// Generic XML
    Xml,
    /// HTML / XHTML
    Html,
    /// Plain text
    Txt,
    /// Raster image (JPEG, TIFF, PNG)
    Image,
    /// Composite document: PDF payload plus companion metadata page
    EDoc,
    /// Nothing matched
    Unsupported,
}

impl ResourceKind {
    /// Whether documents of this kind are built as paginated documents.
    pub fn is_paginated(self) -> bool {
        matches!(self, ResourceKind::Pdf | ResourceKind::EDoc)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Pdf => "pdf",
            ResourceKind::Doc => "doc",
            ResourceKind::Odt => "odt",
            ResourceKind::Xml => "xml",
            ResourceKind::Html => "html",
            ResourceKind::Txt => "txt",
            ResourceKind::Image => "image",
            ResourceKind::EDoc => "edoc",
            ResourceKind::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Suffix table. Matching is case-sensitive.
const SUFFIXES: &[(&str, ResourceKind)] = &[
    (".pdf", ResourceKind::Pdf),
    (".doc", ResourceKind::Doc),
    (".odt", ResourceKind::Odt),
    (".xml", ResourceKind::Xml),
    (".htm", ResourceKind::Html),
    (".html", ResourceKind::Html),
    (".xhtml", ResourceKind::Html),
    (".txt", ResourceKind::Txt),
    (".jpg", ResourceKind::Image),
    (".tiff", ResourceKind::Image),
    (".png", ResourceKind::Image),
];

/// Return the URI's final suffix including the leading dot (e.g. `".pdf"`).
///
/// The suffix starts at the last `.` of the URI. A "suffix" that spans a
/// path separator (`http://host.de/dir/file`) is not a suffix.
pub fn extension(uri: &str) -> Option<&str> {
    let pos = uri.rfind('.')?;
    let ext = &uri[pos..];
    if ext.len() < 2 || ext.contains('/') || ext.contains('\\') {
        return None;
    }
    Some(ext)
}

/// Map a URI to its nominal resource kind from its suffix.
///
/// Pure function: no I/O, no eDoc checks.
///
/// # Example
/// ```
/// use edocparse::detect::{classify, ResourceKind};
///
/// assert_eq!(classify("http://example.org/a/report.pdf"), ResourceKind::Pdf);
/// assert_eq!(classify("/data/notes.PDF"), ResourceKind::Unsupported);
/// ```
pub fn classify(uri: &str) -> ResourceKind {
    extension(uri)
        .and_then(|ext| {
            SUFFIXES
                .iter()
                .find(|(suffix, _)| *suffix == ext)
                .map(|(_, kind)| *kind)
        })
        .unwrap_or(ResourceKind::Unsupported)
}

/// Check if the resource is an image.
pub fn is_image(uri: &str) -> bool {
    classify(uri) == ResourceKind::Image
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// OLE2 / Compound File Binary signature used by Word 97-2003 documents.
const CFB_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Local file header signature of zip containers (ODT).
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Extract the PDF version from a payload header, if it is a PDF.
pub fn pdf_version(data: &[u8]) -> Option<String> {
    let version_bytes = data
        .strip_prefix(PDF_MAGIC)?
        .get(..VERSION_LEN)?;
    let version = String::from_utf8_lossy(version_bytes).to_string();
    is_valid_version(&version).then_some(version)
}

/// Check if a version string is valid.
fn is_valid_version(version: &str) -> bool {
    let chars: Vec<char> = version.chars().collect();
    chars.len() == 3 && chars[0].is_ascii_digit() && chars[1] == '.' && chars[2].is_ascii_digit()
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    pdf_version(data).is_some()
}

/// Check if bytes start with the OLE2 compound file signature.
pub fn is_cfb_bytes(data: &[u8]) -> bool {
    data.starts_with(&CFB_MAGIC)
}

/// Check if bytes start with a zip local file header.
pub fn is_zip_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}
