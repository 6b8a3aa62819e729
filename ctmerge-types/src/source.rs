//! Source metadata types usable across crates.

use std::fmt;

/// Typed key identifying one of the two reconciled log-list feeds.
///
/// The key doubles as the suffix of source-tagged fields in a merged record:
/// when the feeds disagree on `status`, the record carries `status_apple` and
/// `status_google` instead of `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceKey(pub &'static str);

impl SourceKey {
    /// Apple's log list, conventionally Source A.
    pub const APPLE: Self = Self("apple");
    /// Google's log list, conventionally Source B.
    pub const GOOGLE: Self = Self("google");

    /// Construct a new typed source key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Field name under which this source's side of a disagreement is stored.
    #[must_use]
    pub fn tagged(self, field: &str) -> String {
        format!("{field}_{}", self.0)
    }
}

impl From<SourceKey> for &'static str {
    fn from(k: SourceKey) -> Self {
        k.0
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The ordered pair of sources taking part in a merge.
///
/// `a` is the primary source: its operator name wins when both feeds carry
/// one, and its tagged value is consulted first when ordering records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceTags {
    /// Source A.
    pub a: SourceKey,
    /// Source B.
    pub b: SourceKey,
}

impl SourceTags {
    /// Build a pair from two keys.
    #[must_use]
    pub const fn new(a: SourceKey, b: SourceKey) -> Self {
        Self { a, b }
    }
}

impl Default for SourceTags {
    fn default() -> Self {
        Self::new(SourceKey::APPLE, SourceKey::GOOGLE)
    }
}
