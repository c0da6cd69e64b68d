//! Parsing options and configuration.

use std::time::Duration;

/// Default user agent sent with HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("edocparse/", env!("CARGO_PKG_VERSION"));

/// Options for a [`DocumentParser`](crate::DocumentParser).
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Whether to probe remote URIs for the eDoc layout
    pub remote_detection: bool,

    /// Timeout of the connectivity probe against a companion index page
    pub probe_timeout: Duration,

    /// Timeout of HTTP GETs for payloads and metadata pages
    pub fetch_timeout: Duration,

    /// User agent for HTTP requests
    pub user_agent: String,

    /// NFC-normalize extracted page text
    pub normalize_unicode: bool,

    /// Reject resources larger than this many bytes (None = unlimited)
    pub max_resource_bytes: Option<u64>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the remote eDoc probe.
    pub fn with_remote_detection(mut self, enabled: bool) -> Self {
        self.remote_detection = enabled;
        self
    }

    /// Only check the local filesystem layout for eDocs.
    pub fn local_only(mut self) -> Self {
        self.remote_detection = false;
        self
    }

    /// Set the probe timeout.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Set the fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Set the HTTP user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enable or disable Unicode normalization of page text.
    pub fn with_normalize_unicode(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Set the maximum resource size in bytes.
    pub fn with_max_resource_bytes(mut self, limit: u64) -> Self {
        self.max_resource_bytes = Some(limit);
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            remote_detection: true,
            probe_timeout: Duration::from_secs(5),
            fetch_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            normalize_unicode: true,
            max_resource_bytes: None,
        }
    }
}
