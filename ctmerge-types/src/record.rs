//! Merged per-log records and the view helpers renderers read them through.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field;
use crate::source::SourceTags;

/// One reconciled log: field name to value.
///
/// Fields both sources agree on are stored under their plain name. Fields the
/// sources disagree on are stored twice under source-tagged names
/// (`<field>_<source>`) and never under the plain name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogRecord(BTreeMap<String, Value>);

impl LogRecord {
    /// A record with no fields.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Return a copy of this record with `key` set to `value`.
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

    /// Whether the field is present.
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

    /// Number of stored fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no fields are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The record's `url`, if the sources agree on one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.get_str(field::URL)
    }

    /// How `field` was resolved across the two sources.
    #[must_use]
    pub fn view(&self, field: &str, tags: SourceTags) -> FieldView<'_> {
        if let Some(v) = self.get(field) {
            return FieldView::Agreed(v);
        }
        match (self.get(&tags.a.tagged(field)), self.get(&tags.b.tagged(field))) {
            (Some(a), Some(b)) => FieldView::Split { a, b },
            (Some(a), None) => FieldView::OnlyA(a),
            (None, Some(b)) => FieldView::OnlyB(b),
            (None, None) => FieldView::Absent,
        }
    }

    /// Borrow the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.0
    }
}

impl FromIterator<(String, Value)> for LogRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LogRecord {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Resolution of one logical field in a [`LogRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldView<'a> {
    /// Stored once under the plain name.
    Agreed(&'a Value),
    /// The sources disagree; both sides are kept.
    Split {
        /// Source A's value.
        a: &'a Value,
        /// Source B's value.
        b: &'a Value,
    },
    /// Only Source A's tagged value is present.
    OnlyA(&'a Value),
    /// Only Source B's tagged value is present.
    OnlyB(&'a Value),
    /// Neither form is present.
    Absent,
}

impl<'a> FieldView<'a> {
    /// The representative value: the agreed one, else Source A's, else Source B's.
    #[must_use]
    pub const fn primary(&self) -> Option<&'a Value> {
        match *self {
            Self::Agreed(v) | Self::OnlyA(v) | Self::OnlyB(v) => Some(v),
            Self::Split { a, .. } => Some(a),
            Self::Absent => None,
        }
    }

    /// Every value present, Source A first.
    #[must_use]
    pub fn values(&self) -> Vec<&'a Value> {
        match *self {
            Self::Agreed(v) | Self::OnlyA(v) | Self::OnlyB(v) => vec![v],
            Self::Split { a, b } => vec![a, b],
            Self::Absent => vec![],
        }
    }

    /// Whether the sources disagree on this field.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        matches!(self, Self::Split { .. })
    }
}
