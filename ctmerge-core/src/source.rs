use async_trait::async_trait;

use ctmerge_types::{CtMergeError, LogListDocument, SourceKey};

/// A feed that can produce one parsed log-list document.
///
/// Implementations own retrieval and parsing. A non-success retrieval must be
/// returned as [`CtMergeError::SourceFetch`] naming this source's key, so the
/// orchestrator can abort before the reconciliation core runs.
#[async_trait]
pub trait LogListSource: Send + Sync {
    /// Key identifying the feed; also the suffix of its source-tagged fields.
    fn key(&self) -> SourceKey;

    /// Implementation name, used in logs (e.g. "ctmerge-http").
    fn name(&self) -> &'static str;

    /// Retrieve and parse the current document.
    async fn fetch(&self) -> Result<LogListDocument, CtMergeError>;
}
