use std::sync::{Arc, Mutex, PoisonError};

use ctmerge_types::DataIssue;

/// Sink for non-fatal data-quality issues found while merging.
///
/// Injected into the indexer and reconciler so that malformed upstream data
/// is surfaced without aborting the merge and without global output.
pub trait Diagnostics: Send + Sync {
    /// Record one issue.
    fn report(&self, issue: DataIssue);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn report(&self, issue: DataIssue) {
        (**self).report(issue);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Arc<D> {
    fn report(&self, issue: DataIssue) {
        (**self).report(issue);
    }
}

/// Emits every issue as a `tracing` warning.
///
/// Silent unless the `tracing` feature is enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, issue: DataIssue) {
        #[cfg(feature = "tracing")]
        tracing::warn!(feed = issue.feed(), issue = %issue, "log list data issue");
        #[cfg(not(feature = "tracing"))]
        let _ = issue;
    }
}

/// Keeps issues in memory, optionally forwarding each one to another sink.
#[derive(Default)]
pub struct CollectingDiagnostics {
    issues: Mutex<Vec<DataIssue>>,
    forward: Option<Arc<dyn Diagnostics>>,
}

impl CollectingDiagnostics {
    /// A collector that only records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A collector that records and then passes each issue to `inner`.
    #[must_use]
    pub fn forwarding_to(inner: Arc<dyn Diagnostics>) -> Self {
        Self {
            issues: Mutex::new(vec![]),
            forward: Some(inner),
        }
    }

    /// Snapshot of the issues recorded so far, in report order.
    #[must_use]
    pub fn issues(&self) -> Vec<DataIssue> {
        self.issues
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the recorded issues.
    #[must_use]
    pub fn take(&self) -> Vec<DataIssue> {
        std::mem::take(&mut *self.issues.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&self, issue: DataIssue) {
        if let Some(inner) = &self.forward {
            inner.report(issue.clone());
        }
        self.issues
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(issue);
    }
}

impl std::fmt::Debug for CollectingDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectingDiagnostics")
            .field("issues", &self.issues())
            .field("forwarding", &self.forward.is_some())
            .finish()
    }
}
