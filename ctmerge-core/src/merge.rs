use std::collections::BTreeSet;

use ctmerge_types::{FieldView, LogListDocument, LogRecord, MergedCollection, SourceTags, field};
use serde_json::Value;

use crate::diagnostics::Diagnostics;
use crate::index::index_source;
use crate::reconcile::{reconcile_single_source, reconcile_two_sources};

/// Statuses of logs that are currently accepted for new certificates.
pub const CURRENT_STATUSES: &[&str] = &["usable", "qualified"];

const REJECTED: &str = "rejected";
const PENDING: &str = "pending";
const USABLE: &str = "usable";

/// Options for a merge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOptions {
    /// Keys of Source A and Source B, used to tag disagreeing fields.
    pub tags: SourceTags,
    /// Also index each operator's `tiled_logs`.
    pub include_tiled_logs: bool,
}

/// Merge two log-list documents into one ordered collection.
///
/// Both documents are indexed by url; every url found in either index yields
/// exactly one record, reconciled from both sources when both publish the log
/// and normalized from the single source otherwise. Records are ordered by
/// operator, then description, then url (ordinal string comparison); for a
/// field the sources disagree on, Source A's value is the sort key.
#[must_use]
pub fn merge(
    document_a: &LogListDocument,
    document_b: &LogListDocument,
    options: &MergeOptions,
    diagnostics: &dyn Diagnostics,
) -> MergedCollection {
    let tags = options.tags;
    let a = index_source(document_a, tags.a, options.include_tiled_logs, diagnostics);
    let b = index_source(document_b, tags.b, options.include_tiled_logs, diagnostics);

    let urls: BTreeSet<&str> = a.urls().chain(b.urls()).collect();
    let mut entries: Vec<(String, LogRecord)> = urls
        .into_iter()
        .filter_map(|url| {
            let record = match (a.get(url), b.get(url)) {
                (Some(ra), Some(rb)) => reconcile_two_sources(ra, rb, tags, diagnostics),
                (Some(ra), None) => reconcile_single_source(ra, tags.a, diagnostics),
                (None, Some(rb)) => reconcile_single_source(rb, tags.b, diagnostics),
                (None, None) => return None,
            };
            Some((url.to_string(), record))
        })
        .collect();

    entries.sort_by_cached_key(|(url, record)| {
        (
            sort_text(record, field::OPERATOR, tags),
            sort_text(record, field::DESCRIPTION, tags),
            url.clone(),
        )
    });

    MergedCollection::from_ordered(entries)
}

fn sort_text(record: &LogRecord, name: &str, tags: SourceTags) -> String {
    match record.view(name, tags).primary() {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Whether a merged log is current: any of `status`, A's tagged status or
/// B's tagged status is one of [`CURRENT_STATUSES`].
#[must_use]
pub fn is_current_log(record: &LogRecord, tags: SourceTags) -> bool {
    record
        .view(field::STATUS, tags)
        .values()
        .into_iter()
        .filter_map(Value::as_str)
        .any(|status| CURRENT_STATUSES.contains(&status))
}

/// A single effective status for a merged log.
///
/// Agreed statuses are returned as-is. When the sources disagree: `rejected`
/// on either side wins, then `pending`; when exactly one side is `usable`
/// the other side's status is taken; otherwise Source A's status is returned.
#[must_use]
pub fn resolved_status(record: &LogRecord, tags: SourceTags) -> Option<&str> {
    let (a, b) = match record.view(field::STATUS, tags) {
        FieldView::Absent => return None,
        FieldView::Agreed(v) | FieldView::OnlyA(v) | FieldView::OnlyB(v) => return v.as_str(),
        FieldView::Split { a, b } => (a.as_str(), b.as_str()),
    };
    let (Some(a), Some(b)) = (a, b) else {
        return a.or(b);
    };
    if a == REJECTED || b == REJECTED {
        return Some(REJECTED);
    }
    if a == PENDING || b == PENDING {
        return Some(PENDING);
    }
    if a == USABLE && b != USABLE {
        return Some(b);
    }
    Some(a)
}

/// The current logs of a collection, in collection order.
pub fn current_logs(
    collection: &MergedCollection,
    tags: SourceTags,
) -> impl Iterator<Item = (&str, &LogRecord)> {
    collection
        .iter()
        .filter(move |(_, record)| is_current_log(record, tags))
}
