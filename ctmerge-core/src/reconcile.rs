use std::collections::BTreeSet;

use ctmerge_types::{DataIssue, LogRecord, RawLogEntry, SourceKey, SourceTags, field};
use serde_json::Value;

use crate::diagnostics::Diagnostics;
use crate::normalize::{
    StateShape, normalize_description, normalize_operator_name, normalize_state,
    normalize_temporal_interval,
};

/// Same/differ merge policy for one field.
///
/// - neither side has it: nothing is stored
/// - one side has it: stored under `key`
/// - both sides have equal values: stored once under `key`
/// - both sides differ: stored under `key_<a>` and `key_<b>`, never under `key`
#[must_use]
pub fn merge_field(
    key: &str,
    a: Option<Value>,
    b: Option<Value>,
    tags: SourceTags,
) -> Vec<(String, Value)> {
    match (a, b) {
        (None, None) => vec![],
        (Some(v), None) | (None, Some(v)) => vec![(key.to_string(), v)],
        (Some(a), Some(b)) if a == b => vec![(key.to_string(), a)],
        (Some(a), Some(b)) => vec![(tags.a.tagged(key), a), (tags.b.tagged(key), b)],
    }
}

/// Normalize a log that only one source publishes.
///
/// `description` and `operator` are canonicalized, `state` becomes
/// `status` + `timestamp`, `temporal_interval` becomes `start` + `end`; every
/// other field passes through unchanged.
#[must_use]
pub fn reconcile_single_source(
    record: &RawLogEntry,
    feed: SourceKey,
    diagnostics: &dyn Diagnostics,
) -> LogRecord {
    let operator = record.operator();
    record
        .iter()
        .flat_map(|(key, value)| match key {
            field::DESCRIPTION => vec![(
                key.to_string(),
                normalized_description(operator, value.clone()),
            )],
            field::OPERATOR => vec![(key.to_string(), normalized_operator(value.clone()))],
            field::TEMPORAL_INTERVAL => {
                let (start, end) = normalize_temporal_interval(Some(value));
                present([(field::START, start.cloned()), (field::END, end.cloned())])
            }
            field::STATE => {
                let (status, timestamp) = expand_state(value, record, feed, diagnostics);
                present([(field::STATUS, status), (field::TIMESTAMP, timestamp)])
            }
            _ => vec![(key.to_string(), value.clone())],
        })
        .collect()
}

/// Merge the two sources' versions of one log.
///
/// Every key present in either record is merged with [`merge_field`] after
/// field-specific normalization:
/// - `description`: the raw text is merged under `full_description`, then
///   both sides are normalized and merged under `description`
/// - `operator`: both sides are normalized first
/// - `temporal_interval`: expanded and merged as `start` and `end`
/// - `state`: expanded and merged as `status` and `timestamp`
///
/// Descriptions are normalized against A's operator name, falling back to B's.
#[must_use]
pub fn reconcile_two_sources(
    a: &RawLogEntry,
    b: &RawLogEntry,
    tags: SourceTags,
    diagnostics: &dyn Diagnostics,
) -> LogRecord {
    let operator = a.operator().or_else(|| b.operator());
    let keys: BTreeSet<&str> = a.keys().chain(b.keys()).collect();

    keys.into_iter()
        .flat_map(|key| match key {
            field::DESCRIPTION => {
                let (av, bv) = (a.get(key).cloned(), b.get(key).cloned());
                let mut out = merge_field(field::FULL_DESCRIPTION, av.clone(), bv.clone(), tags);
                out.extend(merge_field(
                    key,
                    av.map(|v| normalized_description(operator, v)),
                    bv.map(|v| normalized_description(operator, v)),
                    tags,
                ));
                out
            }
            field::OPERATOR => merge_field(
                key,
                a.get(key).cloned().map(normalized_operator),
                b.get(key).cloned().map(normalized_operator),
                tags,
            ),
            field::TEMPORAL_INTERVAL => {
                let (a_start, a_end) = normalize_temporal_interval(a.get(key));
                let (b_start, b_end) = normalize_temporal_interval(b.get(key));
                let mut out = merge_field(field::START, a_start.cloned(), b_start.cloned(), tags);
                out.extend(merge_field(field::END, a_end.cloned(), b_end.cloned(), tags));
                out
            }
            field::STATE => {
                let (a_status, a_ts) = a
                    .get(key)
                    .map_or((None, None), |v| expand_state(v, a, tags.a, diagnostics));
                let (b_status, b_ts) = b
                    .get(key)
                    .map_or((None, None), |v| expand_state(v, b, tags.b, diagnostics));
                let mut out = merge_field(field::STATUS, a_status, b_status, tags);
                out.extend(merge_field(field::TIMESTAMP, a_ts, b_ts, tags));
                out
            }
            _ => merge_field(key, a.get(key).cloned(), b.get(key).cloned(), tags),
        })
        .collect()
}

fn normalized_description(operator: Option<&str>, value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(normalize_description(operator, &text)),
        other => other,
    }
}

fn normalized_operator(value: Value) -> Value {
    match value {
        Value::String(name) => Value::String(normalize_operator_name(&name).to_string()),
        other => other,
    }
}

/// Expand a `state` value, reporting shape violations against the owning log.
fn expand_state(
    state: &Value,
    record: &RawLogEntry,
    feed: SourceKey,
    diagnostics: &dyn Diagnostics,
) -> (Option<Value>, Option<Value>) {
    let expanded = normalize_state(state);
    let url = || record.index_key().map(str::to_string);
    match expanded.shape {
        StateShape::Single => {}
        StateShape::NotObject => diagnostics.report(DataIssue::StateNotObject {
            feed: feed.to_string(),
            url: url(),
        }),
        StateShape::Entries(entries) => diagnostics.report(DataIssue::StateShape {
            feed: feed.to_string(),
            url: url(),
            entries,
        }),
    }
    (
        expanded.status.map(|s| Value::String(s.to_string())),
        expanded.timestamp.cloned(),
    )
}

fn present<const N: usize>(fields: [(&str, Option<Value>); N]) -> Vec<(String, Value)> {
    fields
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
        .collect()
}
