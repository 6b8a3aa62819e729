//! As-fetched shape of a CT log-list document.
//!
//! Both feeds follow the same `{ "operators": [ { "name", "logs": [...] } ] }`
//! layout. Only the fields the merge needs are typed; everything else is kept
//! verbatim so it can pass through to the merged records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::field;

/// A parsed log-list document from one source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogListDocument {
    /// Operators in document order.
    #[serde(default)]
    pub operators: Vec<Operator>,
    /// Top-level fields other than `operators` (e.g. `version`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogListDocument {
    /// Build a document from its operators.
    #[must_use]
    pub fn new(operators: Vec<Operator>) -> Self {
        Self {
            operators,
            extra: Map::new(),
        }
    }

    /// Total number of entries under `logs` across all operators.
    #[must_use]
    pub fn log_count(&self) -> usize {
        self.operators.iter().map(|op| op.logs.len()).sum()
    }
}

/// One operator and the logs it runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operator {
    /// Operator display name as published by the source.
    pub name: String,
    /// RFC 6962 logs.
    #[serde(default)]
    pub logs: Vec<RawLogEntry>,
    /// Static CT API logs; only indexed when explicitly enabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiled_logs: Vec<RawLogEntry>,
    /// Other operator fields (e.g. `email`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Operator {
    /// Build an operator with the given logs.
    pub fn new(name: impl Into<String>, logs: Vec<RawLogEntry>) -> Self {
        Self {
            name: name.into(),
            logs,
            tiled_logs: vec![],
            extra: Map::new(),
        }
    }
}

/// One log as published by one source: an open mapping of field name to value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawLogEntry(Map<String, Value>);

impl RawLogEntry {
    /// An entry with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Return a copy of this entry with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a field holding a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Whether the field is present (even if `null`).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the entry has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The log's `url`, its key within a source document.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.get_str(field::URL)
    }

    /// Key used for indexing: `url`, falling back to `submission_url`.
    #[must_use]
    pub fn index_key(&self) -> Option<&str> {
        self.url().or_else(|| self.get_str(field::SUBMISSION_URL))
    }

    /// The free-text description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get_str(field::DESCRIPTION)
    }

    /// The injected (or published) operator name.
    #[must_use]
    pub fn operator(&self) -> Option<&str> {
        self.get_str(field::OPERATOR)
    }

    /// The raw `state` object.
    #[must_use]
    pub fn state(&self) -> Option<&Value> {
        self.get(field::STATE)
    }

    /// The raw `temporal_interval` object.
    #[must_use]
    pub fn temporal_interval(&self) -> Option<&Value> {
        self.get(field::TEMPORAL_INTERVAL)
    }

    /// Borrow the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RawLogEntry {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for RawLogEntry {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<Value> for RawLogEntry {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}
