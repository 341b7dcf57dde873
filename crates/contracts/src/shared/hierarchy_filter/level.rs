use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::FilterError;

/// One rank of a hierarchy (e.g. "division" or "branch")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyLevel {
    /// Stable identifier used in configs and DTOs
    pub id: String,
    /// Column caption shown above the level's options
    pub title: String,
}

impl HierarchyLevel {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// How ancestor selections are recomputed after an edit below them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AncestorRule {
    /// An ancestor is selected only while all of its children are selected.
    /// Partially covered ancestors are reported as indeterminate.
    FullOnly,
    /// Like `FullOnly`, but an ancestor that is already selected stays selected
    /// while at least one child remains selected.
    #[default]
    KeepPartial,
}

/// Complete description of a hierarchy: ordered levels plus the ancestor rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyDef {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub ancestor_rule: AncestorRule,
    /// Levels ordered from coarsest to finest; the last one is the leaf level
    pub levels: Vec<HierarchyLevel>,
}

impl HierarchyDef {
    /// Check that the hierarchy has levels and that level ids are unique
    pub fn validate(&self) -> Result<(), FilterError> {
        validate_levels(&self.levels)
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

pub(crate) fn validate_levels(levels: &[HierarchyLevel]) -> Result<(), FilterError> {
    if levels.is_empty() {
        return Err(FilterError::EmptyHierarchy);
    }

    let mut seen = HashSet::new();
    for level in levels {
        if !seen.insert(level.id.as_str()) {
            return Err(FilterError::DuplicateLevel(level.id.clone()));
        }
    }

    Ok(())
}
