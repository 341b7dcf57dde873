use serde::{Deserialize, Serialize};

/// One filterable item (a branch, a sub-category, ...)
///
/// `path` holds the item's value at every level, coarsest first; the last entry
/// is the item's own identity. Missing values are allowed at any level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafRecord {
    pub path: Vec<Option<String>>,
    /// Display label of the leaf value (defaults to the value itself)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl LeafRecord {
    pub fn new<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(|v| v.map(Into::into)).collect(),
            label: None,
        }
    }

    /// Record whose values are all present
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(values.into_iter().map(Some))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Value at `level`; empty and whitespace-only strings count as absent
    pub fn value_at(&self, level: usize) -> Option<&str> {
        self.path
            .get(level)
            .and_then(|v| v.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
