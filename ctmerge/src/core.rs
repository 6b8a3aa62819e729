use std::sync::Arc;
use std::time::Duration;

use ctmerge_core::{
    CollectingDiagnostics, CtMergeError, Diagnostics, LogListDocument, LogListSource, MergeConfig,
    MergeOptions, MergeReport, SourceKey, SourceTags, TracingDiagnostics, merge,
};

/// Orchestrator that fetches two log lists and reconciles them.
pub struct CtMerge {
    pub(crate) source_a: Arc<dyn LogListSource>,
    pub(crate) source_b: Arc<dyn LogListSource>,
    pub(crate) cfg: MergeConfig,
    pub(crate) diagnostics: Arc<dyn Diagnostics>,
}

/// Builder for constructing a `CtMerge` orchestrator with custom configuration.
pub struct CtMergeBuilder {
    source_a: Option<Arc<dyn LogListSource>>,
    source_b: Option<Arc<dyn LogListSource>>,
    cfg: MergeConfig,
    diagnostics: Option<Arc<dyn Diagnostics>>,
}

impl Default for CtMergeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CtMergeBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no sources; both [`source_a`](Self::source_a) and
    /// [`source_b`](Self::source_b) must be set before [`build`](Self::build).
    /// Defaults: `logs` only (no tiled logs), 30s per-source timeout, no
    /// overall deadline, issues reported through [`TracingDiagnostics`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            source_a: None,
            source_b: None,
            cfg: MergeConfig::default(),
            diagnostics: None,
        }
    }

    /// Register Source A.
    ///
    /// Its key suffixes A's side of every disagreement, and its value is the
    /// sort key when the sources disagree on `operator` or `description`.
    #[must_use]
    pub fn source_a(mut self, source: Arc<dyn LogListSource>) -> Self {
        self.source_a = Some(source);
        self
    }

    /// Register Source B.
    #[must_use]
    pub fn source_b(mut self, source: Arc<dyn LogListSource>) -> Self {
        self.source_b = Some(source);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: MergeConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Also index each operator's `tiled_logs`.
    #[must_use]
    pub const fn include_tiled_logs(mut self, yes: bool) -> Self {
        self.cfg.include_tiled_logs = yes;
        self
    }

    /// Set the per-source fetch timeout.
    #[must_use]
    pub const fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.fetch_timeout = timeout;
        self
    }

    /// Set an overall deadline for fetching both documents.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Sink that receives every data issue as it is found.
    ///
    /// Issues are also returned in [`MergeReport::issues`] regardless of the sink.
    #[must_use]
    pub fn diagnostics(mut self, sink: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Build the `CtMerge` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if either source is missing or both sources share
    /// the same key.
    pub fn build(self) -> Result<CtMerge, CtMergeError> {
        let Some(source_a) = self.source_a else {
            return Err(CtMergeError::InvalidArg(
                "source A not registered; set it via source_a(...)".to_string(),
            ));
        };
        let Some(source_b) = self.source_b else {
            return Err(CtMergeError::InvalidArg(
                "source B not registered; set it via source_b(...)".to_string(),
            ));
        };
        if source_a.key() == source_b.key() {
            return Err(CtMergeError::InvalidArg(format!(
                "both sources use the key {:?}; source-tagged fields would collide",
                source_a.key().as_str()
            )));
        }

        Ok(CtMerge {
            source_a,
            source_b,
            cfg: self.cfg,
            diagnostics: self
                .diagnostics
                .unwrap_or_else(|| Arc::new(TracingDiagnostics)),
        })
    }
}

/// Run `fut` under an optional overall deadline.
///
/// # Errors
/// Returns `RequestTimeout` when the deadline elapses first.
pub async fn with_request_deadline<F, T>(
    deadline: Option<Duration>,
    fut: F,
) -> Result<T, CtMergeError>
where
    F: std::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| CtMergeError::RequestTimeout),
        None => Ok(fut.await),
    }
}

impl CtMerge {
    /// Start building a new `CtMerge` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use ctmerge_mock::MockSource;
    ///
    /// let merger = ctmerge::CtMerge::builder()
    ///     .source_a(Arc::new(MockSource::apple()))
    ///     .source_b(Arc::new(MockSource::google()))
    ///     .fetch_timeout(std::time::Duration::from_secs(10))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> CtMergeBuilder {
        CtMergeBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &MergeConfig {
        &self.cfg
    }

    /// Keys of Source A and Source B.
    #[must_use]
    pub fn tags(&self) -> SourceTags {
        SourceTags::new(self.source_a.key(), self.source_b.key())
    }

    fn options(&self) -> MergeOptions {
        MergeOptions {
            tags: self.tags(),
            include_tiled_logs: self.cfg.include_tiled_logs,
        }
    }

    /// Wrap a source future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ctmerge::core::source_call_with_timeout",
            skip_all,
            fields(
                feed = feed.as_str(),
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<Fut>(
        feed: SourceKey,
        timeout: Duration,
        fut: Fut,
    ) -> Result<LogListDocument, CtMergeError>
    where
        Fut: std::future::Future<Output = Result<LogListDocument, CtMergeError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(CtMergeError::source_timeout(feed.as_str())))
    }

    /// Fetch both documents concurrently.
    ///
    /// Each fetch is bounded by the per-source timeout and the pair by the
    /// optional overall deadline.
    ///
    /// # Errors
    /// Returns the first failure, Source A checked before Source B, so callers
    /// never reach the merge with a missing document.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ctmerge::core::fetch_documents",
            skip(self),
            fields(source_a = self.source_a.name(), source_b = self.source_b.name()),
        )
    )]
    pub async fn fetch_documents(
        &self,
    ) -> Result<(LogListDocument, LogListDocument), CtMergeError> {
        let timeout = self.cfg.fetch_timeout;
        let both = async {
            tokio::join!(
                Self::source_call_with_timeout(self.source_a.key(), timeout, self.source_a.fetch()),
                Self::source_call_with_timeout(self.source_b.key(), timeout, self.source_b.fetch()),
            )
        };
        let (a, b) = with_request_deadline(self.cfg.request_timeout, both).await?;
        Ok((a?, b?))
    }

    /// Reconcile two already-fetched documents.
    ///
    /// Synchronous and infallible: malformed data is reported as issues, never
    /// as an error.
    #[must_use]
    pub fn merge_documents(
        &self,
        document_a: &LogListDocument,
        document_b: &LogListDocument,
    ) -> MergeReport {
        let collector = CollectingDiagnostics::forwarding_to(Arc::clone(&self.diagnostics));
        let collection = merge(document_a, document_b, &self.options(), &collector);
        MergeReport {
            collection,
            issues: collector.take(),
        }
    }

    /// Fetch both sources and reconcile them.
    ///
    /// # Errors
    /// Returns a fetch-phase error (`SourceFetch`, `SourceParse`,
    /// `SourceTimeout` or `RequestTimeout`) if either document is unavailable.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ctmerge::core::merge", skip(self))
    )]
    pub async fn merge(&self) -> Result<MergeReport, CtMergeError> {
        let (a, b) = self.fetch_documents().await?;
        let report = self.merge_documents(&a, &b);
        #[cfg(feature = "tracing")]
        tracing::info!(
            logs = report.collection.len(),
            issues = report.issues.len(),
            "merged log lists"
        );
        Ok(report)
    }
}
