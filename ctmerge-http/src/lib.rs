//! HTTP(S) retrieval of CT log-list documents.
#![warn(missing_docs)]

use async_trait::async_trait;
use ctmerge_core::{CtMergeError, LogListDocument, LogListSource, SourceKey};

/// Apple's current log list.
pub const APPLE_LOG_LIST_URL: &str = "https://valid.apple.com/ct/log_list/current_log_list.json";
/// Google's list of all logs, including retired and rejected ones.
pub const GOOGLE_LOG_LIST_URL: &str = "https://www.gstatic.com/ct/log_list/v3/all_logs_list.json";

/// Top-level fields that change on every publication and never affect a merge.
const VOLATILE_FIELDS: &[&str] = &["version", "log_list_timestamp"];

/// A log list fetched with a GET request.
#[derive(Debug, Clone)]
pub struct HttpLogListSource {
    key: SourceKey,
    url: String,
    client: reqwest::Client,
}

impl HttpLogListSource {
    /// Fetch `url` and expose it under `key`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `url` is not an absolute `http` or `https` URL,
    /// or `Other` if the HTTP client cannot be initialized.
    pub fn new(key: SourceKey, url: &str) -> Result<Self, CtMergeError> {
        let parsed = url::Url::parse(url)
            .map_err(|e| CtMergeError::InvalidArg(format!("invalid log list url {url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CtMergeError::InvalidArg(format!(
                "log list url {url:?} must use http or https"
            )));
        }
        Self::from_parts(key, parsed.into())
    }

    /// Apple's feed under [`SourceKey::APPLE`].
    ///
    /// # Errors
    /// Returns `Other` if the HTTP client cannot be initialized (for example,
    /// no TLS backend is available).
    pub fn apple() -> Result<Self, CtMergeError> {
        Self::from_parts(SourceKey::APPLE, APPLE_LOG_LIST_URL.to_string())
    }

    /// Google's feed under [`SourceKey::GOOGLE`].
    ///
    /// # Errors
    /// Returns `Other` if the HTTP client cannot be initialized.
    pub fn google() -> Result<Self, CtMergeError> {
        Self::from_parts(SourceKey::GOOGLE, GOOGLE_LOG_LIST_URL.to_string())
    }

    fn from_parts(key: SourceKey, url: String) -> Result<Self, CtMergeError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ctmerge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CtMergeError::Other(format!("building HTTP client failed: {e}")))?;
        Ok(Self { key, url, client })
    }

    /// Use a preconfigured client (proxies, TLS roots, timeouts).
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The URL this source fetches.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Parse a log-list body and drop its per-publication metadata.
///
/// # Errors
/// Returns `SourceParse` attributed to `feed` when `body` is not a log list.
pub fn parse_document(feed: SourceKey, body: &[u8]) -> Result<LogListDocument, CtMergeError> {
    let mut document: LogListDocument = serde_json::from_slice(body)
        .map_err(|e| CtMergeError::parse(feed.as_str(), e.to_string()))?;
    for name in VOLATILE_FIELDS {
        document.extra.remove(*name);
    }
    Ok(document)
}

#[async_trait]
impl LogListSource for HttpLogListSource {
    fn key(&self) -> SourceKey {
        self.key
    }

    fn name(&self) -> &'static str {
        "ctmerge-http"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ctmerge_http::fetch",
            skip(self),
            fields(feed = self.key.as_str(), url = %self.url),
        )
    )]
    async fn fetch(&self) -> Result<LogListDocument, CtMergeError> {
        let feed = self.key.as_str();
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CtMergeError::fetch(feed, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CtMergeError::fetch_status(
                feed,
                status.as_u16(),
                status.canonical_reason().unwrap_or("request failed"),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CtMergeError::fetch(feed, e.to_string()))?;
        let document = parse_document(self.key, &body)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            operators = document.operators.len(),
            logs = document.log_count(),
            "fetched log list"
        );
        Ok(document)
    }
}
