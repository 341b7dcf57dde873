use serde::{Deserialize, Serialize};

use crate::shared::hierarchy_filter::LeafRecord;

/// Row of the `branches` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRow {
    pub division: Option<String>,
    pub region: Option<String>,
    pub zone: Option<String>,
    pub branch_code: String,
    /// Human-readable branch name, shown instead of the code when present
    #[serde(default)]
    pub branch_name: Option<String>,
}

impl BranchRow {
    /// Leaf of the area hierarchy: division → region → zone → branch
    pub fn to_leaf_record(&self) -> LeafRecord {
        let record = LeafRecord::new([
            self.division.clone(),
            self.region.clone(),
            self.zone.clone(),
            Some(self.branch_code.clone()),
        ]);
        match self.branch_name.as_deref().filter(|n| !n.trim().is_empty()) {
            Some(name) => record.with_label(name),
            None => record,
        }
    }
}

/// Row of the `categories` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub main_category: Option<String>,
    pub sub_category: String,
}

impl CategoryRow {
    /// Leaf of the category hierarchy: main category → sub-category
    pub fn to_leaf_record(&self) -> LeafRecord {
        LeafRecord::new([self.main_category.clone(), Some(self.sub_category.clone())])
    }
}

pub fn branch_records(rows: &[BranchRow]) -> Vec<LeafRecord> {
    rows.iter().map(BranchRow::to_leaf_record).collect()
}

pub fn category_records(rows: &[CategoryRow]) -> Vec<LeafRecord> {
    rows.iter().map(CategoryRow::to_leaf_record).collect()
}

/// Leaf selections handed from the filter bar to the comment browser
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackFilterSelection {
    /// Selected branch codes
    pub branches: Vec<String>,
    /// Selected sub-categories
    pub sub_categories: Vec<String>,
}

impl FeedbackFilterSelection {
    /// Number of filters that narrow the result (a dimension with nothing
    /// deselected does not count)
    pub fn active_count(&self, total_branches: usize, total_sub_categories: usize) -> usize {
        [
            self.branches.len() < total_branches,
            self.sub_categories.len() < total_sub_categories,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}
