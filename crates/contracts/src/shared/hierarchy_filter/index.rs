use std::collections::{BTreeSet, HashMap};

use super::record::LeafRecord;

static EMPTY: BTreeSet<String> = BTreeSet::new();

/// Lookup tables derived from a record collection.
///
/// Built once per record set; every relation is keyed by level so the same
/// string may appear at different levels without clashing.
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    levels: Vec<LevelIndex>,
}

#[derive(Debug, Clone, Default)]
struct LevelIndex {
    /// Distinct values in first-seen order
    options: Vec<String>,
    positions: HashMap<String, usize>,
    labels: HashMap<String, String>,
    /// value -> descendants at level `i + 1 + k` in slot `k`
    descendants: HashMap<String, Vec<BTreeSet<String>>>,
    /// value -> ancestors at level `k` in slot `k`
    ancestors: HashMap<String, Vec<BTreeSet<String>>>,
}

impl HierarchyIndex {
    pub fn build(depth: usize, records: &[LeafRecord]) -> Self {
        let mut levels: Vec<LevelIndex> = (0..depth).map(|_| LevelIndex::default()).collect();
        let mut truncated = 0usize;

        for record in records {
            if record.path.len() > depth {
                truncated += 1;
            }

            for i in 0..depth {
                let Some(value) = record.value_at(i) else {
                    continue;
                };

                let level = &mut levels[i];
                if !level.positions.contains_key(value) {
                    level.positions.insert(value.to_string(), level.options.len());
                    level.options.push(value.to_string());
                    level
                        .descendants
                        .insert(value.to_string(), vec![BTreeSet::new(); depth - i - 1]);
                    level
                        .ancestors
                        .insert(value.to_string(), vec![BTreeSet::new(); i]);
                }

                if i + 1 == depth {
                    if let Some(label) = record.label.as_deref().filter(|l| !l.trim().is_empty()) {
                        level
                            .labels
                            .entry(value.to_string())
                            .or_insert_with(|| label.to_string());
                    }
                }
            }

            for i in 0..depth {
                let Some(value) = record.value_at(i) else {
                    continue;
                };
                for j in i + 1..depth {
                    let Some(descendant) = record.value_at(j) else {
                        continue;
                    };
                    if let Some(slots) = levels[i].descendants.get_mut(value) {
                        slots[j - i - 1].insert(descendant.to_string());
                    }
                    if let Some(slots) = levels[j].ancestors.get_mut(descendant) {
                        slots[i].insert(value.to_string());
                    }
                }
            }
        }

        if truncated > 0 {
            log::warn!(
                "hierarchy index: {} records have more than {} levels, extra values ignored",
                truncated,
                depth
            );
        }

        log::debug!(
            "hierarchy index built: {} records, options per level {:?}",
            records.len(),
            levels.iter().map(|l| l.options.len()).collect::<Vec<_>>()
        );

        Self { levels }
    }

    /// OptionSet of `level` in first-seen order
    pub fn options(&self, level: usize) -> &[String] {
        self.levels
            .get(level)
            .map(|l| l.options.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, level: usize, value: &str) -> bool {
        self.levels
            .get(level)
            .is_some_and(|l| l.positions.contains_key(value))
    }

    /// Position of `value` within its level's options (used for stable ordering)
    pub fn position(&self, level: usize, value: &str) -> Option<usize> {
        self.levels.get(level)?.positions.get(value).copied()
    }

    /// Display label; the value itself unless the records supplied one
    pub fn label<'a>(&'a self, level: usize, value: &'a str) -> &'a str {
        self.levels
            .get(level)
            .and_then(|l| l.labels.get(value))
            .map(String::as_str)
            .unwrap_or(value)
    }

    /// Values at `level + 1` directly under `value`
    pub fn children(&self, level: usize, value: &str) -> &BTreeSet<String> {
        self.descendants(level, value, level + 1)
    }

    /// Values at `target` (finer than `level`) that share a record with `value`
    pub fn descendants(&self, level: usize, value: &str, target: usize) -> &BTreeSet<String> {
        if target <= level {
            return &EMPTY;
        }
        self.levels
            .get(level)
            .and_then(|l| l.descendants.get(value))
            .and_then(|slots| slots.get(target - level - 1))
            .unwrap_or(&EMPTY)
    }

    /// Values at `target` (coarser than `level`) that share a record with `value`
    pub fn ancestors(&self, level: usize, value: &str, target: usize) -> &BTreeSet<String> {
        if target >= level {
            return &EMPTY;
        }
        self.levels
            .get(level)
            .and_then(|l| l.ancestors.get(value))
            .and_then(|slots| slots.get(target))
            .unwrap_or(&EMPTY)
    }
}
