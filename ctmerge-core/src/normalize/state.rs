use ctmerge_types::field;
use serde_json::Value;

/// How a `state` object matched the expected single-entry shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateShape {
    /// Exactly one entry, as the feeds promise.
    Single,
    /// Zero or several entries; the first one (in key order) was used.
    Entries(usize),
    /// Not an object at all; nothing was extracted.
    NotObject,
}

/// Result of expanding a `state` object into its status and timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandedState<'a> {
    /// Status name, e.g. `usable`, `qualified`, `retired`.
    pub status: Option<&'a str>,
    /// Opaque timestamp carried by the status object.
    pub timestamp: Option<&'a Value>,
    /// Whether the input had the expected shape.
    pub shape: StateShape,
}

impl ExpandedState<'_> {
    /// Whether the input violated the single-entry contract.
    #[must_use]
    pub const fn is_violation(&self) -> bool {
        !matches!(self.shape, StateShape::Single)
    }
}

/// Expand `{"<status>": {"timestamp": ...}}` into `(status, timestamp)`.
///
/// Extra fields inside the status object (Apple adds a `version`) are ignored.
/// Inputs with several entries yield the entry with the lexicographically
/// lowest status name, not the first one in document order. Callers are
/// expected to report [`StateShape`] violations.
#[must_use]
pub fn normalize_state(state: &Value) -> ExpandedState<'_> {
    let Some(entries) = state.as_object() else {
        return ExpandedState {
            status: None,
            timestamp: None,
            shape: StateShape::NotObject,
        };
    };

    let shape = match entries.len() {
        1 => StateShape::Single,
        n => StateShape::Entries(n),
    };

    match entries.iter().min_by(|(x, _), (y, _)| x.cmp(y)) {
        Some((status, body)) => ExpandedState {
            status: Some(status.as_str()),
            timestamp: body.get(field::TIMESTAMP),
            shape,
        },
        None => ExpandedState {
            status: None,
            timestamp: None,
            shape,
        },
    }
}
