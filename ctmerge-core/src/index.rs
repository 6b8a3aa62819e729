use std::collections::BTreeMap;

use ctmerge_types::{DataIssue, LogListDocument, RawLogEntry, SourceKey, field};

use crate::diagnostics::Diagnostics;

/// One source document flattened to `url -> log`, with each log carrying its
/// owning operator under `operator`.
///
/// Built once per document and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedSource {
    feed: SourceKey,
    entries: BTreeMap<String, RawLogEntry>,
}

impl IndexedSource {
    /// Source the index was built from.
    #[must_use]
    pub const fn feed(&self) -> SourceKey {
        self.feed
    }

    /// Look up a log by url.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&RawLogEntry> {
        self.entries.get(url)
    }

    /// Whether a log with this url is indexed.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Indexed urls in sorted order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Indexed `(url, log)` pairs in url order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawLogEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of indexed logs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flatten `operators -> logs` into an [`IndexedSource`] keyed by `url`.
///
/// - Every log gets an `operator` field set to the enclosing operator's name.
/// - A later log with the same url replaces an earlier one.
/// - With `include_tiled_logs`, each operator's `tiled_logs` are indexed too,
///   keyed by `url` or else `submission_url`.
/// - Logs without a usable key are skipped and reported as
///   [`DataIssue::MissingUrl`].
#[must_use]
pub fn index_source(
    document: &LogListDocument,
    feed: SourceKey,
    include_tiled_logs: bool,
    diagnostics: &dyn Diagnostics,
) -> IndexedSource {
    let mut entries: BTreeMap<String, RawLogEntry> = BTreeMap::new();

    for op in &document.operators {
        let tiled: &[RawLogEntry] = if include_tiled_logs { &op.tiled_logs } else { &[] };
        for log in op.logs.iter().chain(tiled) {
            let key = if include_tiled_logs { log.index_key() } else { log.url() };
            let Some(key) = key else {
                diagnostics.report(DataIssue::MissingUrl {
                    feed: feed.to_string(),
                    operator: op.name.clone(),
                });
                continue;
            };
            entries.insert(
                key.to_string(),
                log.clone().with(field::OPERATOR, op.name.clone()),
            );
        }
    }

    IndexedSource { feed, entries }
}
