//! Reading raw resource bytes from local paths, `file://` URLs and HTTP.

use std::fs;
use std::io;
use std::path::PathBuf;

use reqwest::blocking::Client;
use reqwest::Url;

use crate::error::{ExtractError, Result};
use crate::extract::decode_text;
use crate::options::ParseOptions;

/// Where a URI's bytes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A path on the local filesystem.
    Local(PathBuf),
    /// An HTTP(S) URL.
    Remote(Url),
}

/// Resolve a URI string to a readable location.
///
/// `http://` and `https://` URIs are remote, `file://` URLs are converted to
/// local paths, and everything else is taken as a local path verbatim.
pub fn locate(uri: &str) -> std::result::Result<Location, ExtractError> {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        let url = Url::parse(uri).map_err(|e| ExtractError::InvalidUri(format!("{uri}: {e}")))?;
        return Ok(Location::Remote(url));
    }
    if uri.starts_with("file:") {
        let url = Url::parse(uri).map_err(|e| ExtractError::InvalidUri(format!("{uri}: {e}")))?;
        let path = url
            .to_file_path()
            .map_err(|_| ExtractError::InvalidUri(format!("{uri}: not a local file URL")))?;
        return Ok(Location::Local(path));
    }
    if uri.is_empty() {
        return Err(ExtractError::InvalidUri("empty URI".to_string()));
    }
    Ok(Location::Local(PathBuf::from(uri)))
}

/// Fetches the bytes behind a URI.
///
/// Holds one blocking HTTP client for the lifetime of the parser; no state is
/// written after construction, so a reader can be shared across threads.
#[derive(Debug, Clone)]
pub struct ResourceReader {
    client: Client,
    max_bytes: Option<u64>,
}

impl ResourceReader {
    /// Create a reader honoring the fetch timeout, user agent and size limit.
    pub fn new(options: &ParseOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.fetch_timeout)
            .user_agent(options.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            max_bytes: options.max_resource_bytes,
        })
    }

    /// Read the whole resource.
    pub fn read(&self, uri: &str) -> std::result::Result<Vec<u8>, ExtractError> {
        match locate(uri)? {
            Location::Local(path) => {
                let len = fs::metadata(&path)?.len();
                self.check_size(uri, len)?;
                Ok(fs::read(&path)?)
            }
            Location::Remote(url) => {
                log::debug!("GET {}", url);
                let response = self.client.get(url).send()?.error_for_status()?;
                if let Some(len) = response.content_length() {
                    self.check_size(uri, len)?;
                }
                let bytes = response.bytes()?;
                self.check_size(uri, bytes.len() as u64)?;
                Ok(bytes.to_vec())
            }
        }
    }

    /// Read the resource and decode it as text.
    pub fn read_to_string(&self, uri: &str) -> std::result::Result<String, ExtractError> {
        let data = self.read(uri)?;
        Ok(decode_text(&data))
    }

    fn check_size(&self, uri: &str, len: u64) -> std::result::Result<(), ExtractError> {
        match self.max_bytes {
            Some(limit) if len > limit => Err(ExtractError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{uri} is {len} bytes, limit is {limit}"),
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_locate() {
        assert!(matches!(
            locate("http://edoc.example.org/volltexte/2010/1486/pdf/Heft_17.pdf"),
            Ok(Location::Remote(_))
        ));
        assert_eq!(
            locate("/data/file.txt").unwrap(),
            Location::Local(PathBuf::from("/data/file.txt"))
        );
        assert_eq!(
            locate("file:///data/file.txt").unwrap(),
            Location::Local(PathBuf::from("/data/file.txt"))
        );
        assert!(matches!(locate(""), Err(ExtractError::InvalidUri(_))));
    }

    #[test]
    fn test_read_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello").unwrap();

        let reader = ResourceReader::new(&ParseOptions::default()).unwrap();
        let data = reader.read(file.path().to_str().unwrap()).unwrap();
        assert_eq!(data, b"hello");
    }

    #[test]
    fn test_read_missing_file() {
        let reader = ResourceReader::new(&ParseOptions::default()).unwrap();
        let result = reader.read("/definitely/not/here.txt");
        assert!(matches!(result, Err(ExtractError::Io(_))));
    }

    #[test]
    fn test_size_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0123456789").unwrap();

        let options = ParseOptions::default().with_max_resource_bytes(4);
        let reader = ResourceReader::new(&options).unwrap();
        let result = reader.read(file.path().to_str().unwrap());
        assert!(matches!(result, Err(ExtractError::Io(_))));
    }
}
