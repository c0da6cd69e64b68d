//! Detection of composite eDocs.
//!
//! An eDoc is a PDF payload stored under a `pdf/` directory whose parent
//! directory holds an `index.html` frontdoor page with the document's
//! metadata:
//!
//! ```text
//! volltexte/2009/1120/index.html
//! volltexte/2009/1120/pdf/05.pdf
//! ```
//!
//! The layout is recognized on the local filesystem and over HTTP. String
//! checks always come first, so URIs not shaped like an eDoc cause no I/O.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::options::ParseOptions;
use crate::source::{locate, Location};

/// Name of the directory holding the PDF payload.
pub const PDF_DIR: &str = "pdf";

/// Name of the companion metadata page.
pub const INDEX_FILE: &str = "index.html";

const PDF_SEGMENT: &str = "/pdf/";

/// Relation between an eDoc's PDF payload and its metadata page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeLink {
    /// URI of the PDF payload
    pub payload_uri: String,

    /// URI of the companion index.html
    pub index_uri: String,
}

/// Capability to check whether a remote companion page can be reached.
pub trait RemoteProbe: Send + Sync {
    /// Return `true` if `uri` is connectable. Must not fail.
    fn is_reachable(&self, uri: &str) -> bool;
}

/// Default probe: an HTTP `HEAD` request for web URIs, a regular-file check
/// for `file://` URIs.
///
/// Any HTTP response counts as reachable, whatever its status.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Create a probe honoring the probe timeout and user agent.
    pub fn new(options: &ParseOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.probe_timeout)
            .user_agent(options.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

impl RemoteProbe for HttpProbe {
    fn is_reachable(&self, uri: &str) -> bool {
        match locate(uri) {
            Ok(Location::Local(path)) => path.is_file(),
            Ok(Location::Remote(url)) => match self.client.head(url).send() {
                Ok(response) => {
                    log::debug!("Probe {} answered {}", uri, response.status());
                    true
                }
                Err(e) => {
                    log::debug!("Probe {} failed: {}", uri, e);
                    false
                }
            },
            Err(_) => false,
        }
    }
}

/// Decides whether a URI belongs to an eDoc.
#[derive(Clone)]
pub struct EdocResolver {
    probe: Option<Arc<dyn RemoteProbe>>,
}

impl EdocResolver {
    /// Resolver checking the local layout first, then probing remotely.
    pub fn new(probe: Arc<dyn RemoteProbe>) -> Self {
        Self { probe: Some(probe) }
    }

    /// Resolver that only checks the local filesystem layout.
    pub fn local_only() -> Self {
        Self { probe: None }
    }

    /// Check if remote probing is enabled.
    pub fn probes_remote(&self) -> bool {
        self.probe.is_some()
    }

    /// Find the companion metadata page of an eDoc payload.
    ///
    /// The local layout wins over the remote one, so a string that is both a
    /// path and a URL never causes a network probe when the local layout
    /// matches.
    pub fn resolve(&self, uri: &str) -> Option<CompositeLink> {
        if let Some(index) = local_companion(uri) {
            return Some(CompositeLink {
                payload_uri: uri.to_string(),
                index_uri: index.to_string_lossy().into_owned(),
            });
        }

        let probe = self.probe.as_ref()?;
        let candidate = remote_companion(uri)?;
        if probe.is_reachable(&candidate) {
            Some(CompositeLink {
                payload_uri: uri.to_string(),
                index_uri: candidate,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Debug for EdocResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdocResolver")
            .field("probes_remote", &self.probes_remote())
            .finish()
    }
}

/// Local layout: the file's directory is named exactly `pdf` and its parent
/// contains a regular file `index.html`. Returns the index path.
pub fn local_companion(uri: &str) -> Option<PathBuf> {
    let pdf_dir = Path::new(uri).parent()?;
    if pdf_dir.file_name() != Some(OsStr::new(PDF_DIR)) {
        return None;
    }
    let index = pdf_dir.parent()?.join(INDEX_FILE);
    index.is_file().then_some(index)
}

/// Remote layout candidate: the URL cut at its last `/pdf/` segment with
/// `/index.html` appended. `None` if the URI is not a URL or has no such
/// segment. Performs no I/O.
pub fn remote_companion(uri: &str) -> Option<String> {
    let url = Url::parse(uri).ok()?;
    let external = url.as_str();
    let pos = external.rfind(PDF_SEGMENT)?;
    Some(format!("{}/{}", &external[..pos], INDEX_FILE))
}
