//! Error types for edocparse.

use std::io;
use thiserror::Error;

use crate::detect::ResourceKind;

/// Result type alias for edocparse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`DocumentParser::parse`](crate::DocumentParser::parse).
///
/// Every variant that concerns a concrete resource carries the offending URI
/// and the underlying cause.
#[derive(Error, Debug)]
pub enum Error {
    /// The resource kind has no registered extractor.
    #[error("There's no parser available for this type of resource: {0}")]
    NoParserAvailable(ResourceKind),

    /// The extractor failed to read or decode the resource.
    #[error("Problem while parsing {uri}: {source}")]
    ExtractionFailed {
        /// The URI handed to the extractor.
        uri: String,
        /// The extractor's error.
        #[source]
        source: ExtractError,
    },

    /// The companion metadata page of an eDoc could not be read.
    #[error("Problem while fetching metadata from {uri}: {source}")]
    MetadataFetchFailed {
        /// The companion (index.html) URI.
        uri: String,
        /// The fetch error.
        #[source]
        source: ExtractError,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// The URI the error refers to, if any.
    pub fn uri(&self) -> Option<&str> {
        match self {
            Error::ExtractionFailed { uri, .. } | Error::MetadataFetchFailed { uri, .. } => {
                Some(uri)
            }
            _ => None,
        }
    }
}

/// Errors raised by a single extractor or by the resource reader.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// I/O error when reading a local resource.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// HTTP transfer failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The URI could not be turned into a readable location.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// The payload does not carry the signature of the expected format.
    #[error("Unknown file format: not a valid {0} payload")]
    UnknownFormat(&'static str),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    Pdf(String),

    /// Error reading a zip container (ODT).
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Malformed XML.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl From<lopdf::Error> for ExtractError {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => ExtractError::Io(e),
            _ => ExtractError::Pdf(err.to_string()),
        }
    }
}
