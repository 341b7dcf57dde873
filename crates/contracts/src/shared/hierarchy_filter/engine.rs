use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::error::FilterError;
use super::index::HierarchyIndex;
use super::level::{validate_levels, AncestorRule, HierarchyDef, HierarchyLevel};
use super::record::LeafRecord;

static EMPTY: BTreeSet<String> = BTreeSet::new();

/// Receives the leaf-level selection after every change
pub type SelectionListener = Box<dyn FnMut(&[String]) + Send + Sync>;

/// One option row for rendering a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
    /// Some, but not all, children are selected
    pub indeterminate: bool,
}

/// Selection state for one hierarchy filter widget.
///
/// Selecting a value selects its whole subtree; every edit then recomputes the
/// coarser levels from the finer ones according to the [`AncestorRule`].
/// Only the leaf-level selection leaves the widget, through the listener.
pub struct HierarchyFilterEngine {
    levels: Vec<HierarchyLevel>,
    ancestor_rule: AncestorRule,
    records: Vec<LeafRecord>,
    index: HierarchyIndex,
    selection: Vec<BTreeSet<String>>,
    initialized: bool,
    listener: Option<SelectionListener>,
}

impl fmt::Debug for HierarchyFilterEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HierarchyFilterEngine")
            .field("levels", &self.levels)
            .field("ancestor_rule", &self.ancestor_rule)
            .field("records", &self.records.len())
            .field("selection", &self.selection)
            .field("initialized", &self.initialized)
            .finish()
    }
}

impl HierarchyFilterEngine {
    pub fn new(levels: Vec<HierarchyLevel>) -> Result<Self, FilterError> {
        validate_levels(&levels)?;
        let depth = levels.len();
        Ok(Self {
            levels,
            ancestor_rule: AncestorRule::default(),
            records: Vec::new(),
            index: HierarchyIndex::build(depth, &[]),
            selection: vec![BTreeSet::new(); depth],
            initialized: false,
            listener: None,
        })
    }

    pub fn from_def(def: &HierarchyDef) -> Result<Self, FilterError> {
        Ok(Self::new(def.levels.clone())?.with_ancestor_rule(def.ancestor_rule))
    }

    pub fn with_ancestor_rule(mut self, rule: AncestorRule) -> Self {
        self.ancestor_rule = rule;
        self
    }

    /// Register the single change listener, replacing any previous one
    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&[String]) + Send + Sync + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn levels(&self) -> &[HierarchyLevel] {
        &self.levels
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn leaf_level(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn level_index(&self, id: &str) -> Option<usize> {
        self.levels.iter().position(|l| l.id == id)
    }

    pub fn ancestor_rule(&self) -> AncestorRule {
        self.ancestor_rule
    }

    pub fn records(&self) -> &[LeafRecord] {
        &self.records
    }

    pub fn index(&self) -> &HierarchyIndex {
        &self.index
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Selected values of `level` (empty for an unknown level)
    pub fn selection(&self, level: usize) -> &BTreeSet<String> {
        self.selection.get(level).unwrap_or(&EMPTY)
    }

    /// Selected leaves in option order: the filter's result
    pub fn leaf_selection(&self) -> Vec<String> {
        let leaf = self.leaf_level();
        let mut values: Vec<String> = self.selection[leaf].iter().cloned().collect();
        values.sort_by_key(|v| self.index.position(leaf, v).unwrap_or(usize::MAX));
        values
    }

    pub fn is_selected(&self, level: usize, value: &str) -> bool {
        self.selection(level).contains(value)
    }

    /// Every level has all of its options selected
    pub fn is_all_selected(&self) -> bool {
        (0..self.depth()).all(|i| self.selection[i].len() == self.index.options(i).len())
    }

    /// Partially selected: `0 < selected children < children`
    pub fn is_indeterminate(&self, level: usize, value: &str) -> bool {
        let children = self.index.children(level, value);
        if children.is_empty() {
            return false;
        }
        let below = self.selection(level + 1);
        let selected = children.iter().filter(|c| below.contains(*c)).count();
        selected > 0 && selected < children.len()
    }

    /// Load the first record set and select everything.
    ///
    /// Returns `false` without resetting the selection when the engine is
    /// already initialized; the records are then merged via
    /// [`replace_records`](Self::replace_records) so a refetch does not wipe
    /// the user's filter.
    pub fn initialize(&mut self, records: Vec<LeafRecord>) -> bool {
        if self.initialized {
            log::debug!(
                "hierarchy filter {:?}: already initialized, refreshing records",
                self.level_ids()
            );
            self.replace_records(records);
            return false;
        }

        self.load_records(records);
        self.selection = (0..self.depth())
            .map(|i| self.index.options(i).iter().cloned().collect())
            .collect();
        self.initialized = true;

        log::debug!(
            "hierarchy filter {:?}: initialized with {} records",
            self.level_ids(),
            self.records.len()
        );
        self.emit();
        true
    }

    /// Swap the record set while keeping selections of values that still exist.
    ///
    /// The listener fires only when the leaf selection actually changed.
    pub fn replace_records(&mut self, records: Vec<LeafRecord>) {
        let before = self.leaf_selection();
        self.load_records(records);

        for (i, selected) in self.selection.iter_mut().enumerate() {
            selected.retain(|v| self.index.contains(i, v));
        }
        let leaf = self.leaf_level();
        self.recompute_upward(leaf);

        if self.leaf_selection() != before {
            self.emit();
        }
    }

    /// Forget the selection and go back to the uninitialized state
    pub fn reset(&mut self) {
        self.initialized = false;
        for selected in &mut self.selection {
            selected.clear();
        }
    }

    /// Replace the whole selection of `level` and cascade the change.
    ///
    /// Values that are not options of `level` are ignored.
    pub fn set_selection<I, S>(&mut self, level: usize, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if level >= self.depth() {
            log::warn!("set_selection: level {} out of range", level);
            return;
        }

        let mut next = BTreeSet::new();
        for value in values {
            let value = value.as_ref();
            if self.index.contains(level, value) {
                next.insert(value.to_string());
            } else {
                log::warn!(
                    "set_selection: '{}' is not an option of level '{}'",
                    value,
                    self.levels[level].id
                );
            }
        }

        self.apply(level, next);
    }

    /// Checkbox click on one option.
    ///
    /// A fully selected value is deselected together with its subtree; an
    /// unselected or indeterminate value gets its complete subtree selected.
    pub fn toggle(&mut self, level: usize, value: &str) {
        if !self.index.contains(level, value) {
            log::warn!("toggle: '{}' is not an option of level {}", value, level);
            return;
        }

        let mut next = self.selection[level].clone();
        if next.contains(value) && !self.is_indeterminate(level, value) {
            next.remove(value);
        } else {
            next.insert(value.to_string());
        }
        self.apply(level, next);
    }

    pub fn select_all(&mut self) {
        for (i, selected) in self.selection.iter_mut().enumerate() {
            *selected = self.index.options(i).iter().cloned().collect();
        }
        log::debug!("hierarchy filter {:?}: select all", self.level_ids());
        self.emit();
    }

    pub fn clear(&mut self) {
        for selected in &mut self.selection {
            selected.clear();
        }
        log::debug!("hierarchy filter {:?}: cleared", self.level_ids());
        self.emit();
    }

    /// Options of `level` with their current check state, in option order
    pub fn compute_options(&self, level: usize) -> Vec<FilterOption> {
        self.index
            .options(level)
            .iter()
            .map(|value| FilterOption {
                value: value.clone(),
                label: self.index.label(level, value).to_string(),
                selected: self.is_selected(level, value),
                indeterminate: self.is_indeterminate(level, value),
            })
            .collect()
    }

    fn load_records(&mut self, records: Vec<LeafRecord>) {
        self.index = HierarchyIndex::build(self.depth(), &records);
        self.records = records;
    }

    fn apply(&mut self, level: usize, next: BTreeSet<String>) {
        let added = next.difference(&self.selection[level]).count();
        let removed = self.selection[level].difference(&next).count();
        self.selection[level] = next;

        // Finer levels hold the complete subtrees of what is selected at
        // `level`. Values with no ancestor at `level` are left alone.
        for j in level + 1..self.depth() {
            let current = &self.selection[level];
            let mut cascaded: BTreeSet<String> = self.selection[j]
                .iter()
                .filter(|w| {
                    let ancestors = self.index.ancestors(j, w, level);
                    ancestors.is_empty() || ancestors.iter().any(|a| current.contains(a))
                })
                .cloned()
                .collect();

            for value in current {
                cascaded.extend(self.index.descendants(level, value, j).iter().cloned());
            }

            self.selection[j] = cascaded;
        }

        self.recompute_upward(level);

        log::debug!(
            "hierarchy filter {:?}: level {} edited (+{} -{}), selected per level {:?}",
            self.level_ids(),
            level,
            added,
            removed,
            self.selection.iter().map(BTreeSet::len).collect::<Vec<_>>()
        );
        self.emit();
    }

    /// Rebuild levels `from - 1` down to `0`, each from the level below it
    fn recompute_upward(&mut self, from: usize) {
        for k in (0..from).rev() {
            let below = &self.selection[k + 1];
            let current = &self.selection[k];

            let recomputed: BTreeSet<String> = self
                .index
                .options(k)
                .iter()
                .filter(|v| {
                    let children = self.index.children(k, v);
                    if children.is_empty() {
                        // Nothing below to derive from: leave the value as it was
                        return current.contains(*v);
                    }
                    let selected = children.iter().filter(|c| below.contains(*c)).count();
                    match self.ancestor_rule {
                        AncestorRule::FullOnly => selected == children.len(),
                        AncestorRule::KeepPartial => {
                            selected == children.len() || (selected > 0 && current.contains(*v))
                        }
                    }
                })
                .cloned()
                .collect();

            self.selection[k] = recomputed;
        }
    }

    fn emit(&mut self) {
        let leaves = self.leaf_selection();
        if let Some(listener) = self.listener.as_mut() {
            listener(&leaves);
        }
    }

    fn level_ids(&self) -> Vec<&str> {
        self.levels.iter().map(|l| l.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn area_levels() -> Vec<HierarchyLevel> {
        vec![
            HierarchyLevel::new("division", "Division"),
            HierarchyLevel::new("region", "Region"),
            HierarchyLevel::new("zone", "Zone"),
            HierarchyLevel::new("branch", "Branch"),
        ]
    }

    fn category_levels() -> Vec<HierarchyLevel> {
        vec![
            HierarchyLevel::new("main_category", "Category"),
            HierarchyLevel::new("sub_category", "Sub-category"),
        ]
    }

    /// D1 -> {R1 -> Z1 -> {Br1, Br2}, R2 (no zones)}; D2 -> R3 -> {Z2 -> Br3, Z3 -> Br4}
    fn area_records() -> Vec<LeafRecord> {
        vec![
            LeafRecord::from_values(["D1", "R1", "Z1", "Br1"]),
            LeafRecord::from_values(["D1", "R1", "Z1", "Br2"]),
            LeafRecord::new([Some("D1"), Some("R2"), None, None]),
            LeafRecord::from_values(["D2", "R3", "Z2", "Br3"]),
            LeafRecord::from_values(["D2", "R3", "Z3", "Br4"]),
        ]
    }

    fn category_records() -> Vec<LeafRecord> {
        vec![
            LeafRecord::from_values(["Main1", "Sub1"]),
            LeafRecord::from_values(["Main1", "Sub2"]),
            LeafRecord::from_values(["Main2", "Sub3"]),
        ]
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn area_engine() -> HierarchyFilterEngine {
        let mut engine = HierarchyFilterEngine::new(area_levels()).unwrap();
        engine.initialize(area_records());
        engine
    }

    fn recording(engine: &mut HierarchyFilterEngine) -> Arc<Mutex<Vec<Vec<String>>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        engine.set_listener(move |leaves| sink.lock().unwrap().push(leaves.to_vec()));
        events
    }

    #[test]
    fn test_new_rejects_empty_hierarchy() {
        assert!(matches!(
            HierarchyFilterEngine::new(vec![]),
            Err(FilterError::EmptyHierarchy)
        ));
    }

    #[test]
    fn test_initialize_selects_everything_and_emits_once() {
        let mut engine = HierarchyFilterEngine::new(area_levels()).unwrap();
        let events = recording(&mut engine);

        assert!(!engine.is_initialized());
        assert!(engine.initialize(area_records()));

        assert!(engine.is_initialized());
        assert!(engine.is_all_selected());
        assert_eq!(engine.leaf_selection(), ["Br1", "Br2", "Br3", "Br4"]);
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_second_initialize_keeps_user_selection() {
        let mut engine = area_engine();
        engine.set_selection(0, ["D2"]);
        let events = recording(&mut engine);

        assert!(!engine.initialize(area_records()));

        assert_eq!(engine.leaf_selection(), ["Br3", "Br4"]);
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_reset_allows_initialize_again() {
        let mut engine = area_engine();
        engine.clear();
        engine.reset();

        assert!(!engine.is_initialized());
        assert!(engine.initialize(area_records()));
        assert!(engine.is_all_selected());
    }

    #[test]
    fn test_downward_completeness() {
        let mut engine = area_engine();
        engine.clear();

        for level in 0..3 {
            for value in engine.index().options(level).to_vec() {
                engine.clear();
                engine.set_selection(level, [value.as_str()]);
                let leaves = engine.selection(3);
                for leaf in engine.index().descendants(level, &value, 3) {
                    assert!(leaves.contains(leaf), "{} missing under {}", leaf, value);
                }
            }
        }
    }

    #[test]
    fn test_upward_full_selection() {
        let mut engine = area_engine();
        engine.clear();

        engine.set_selection(3, ["Br1", "Br2"]);

        assert_eq!(*engine.selection(2), set(&["Z1"]));
        assert_eq!(*engine.selection(1), set(&["R1"]));
        // R2 has no zones, so D1 is only partially covered
        assert!(engine.selection(0).is_empty());
        assert!(engine.is_indeterminate(0, "D1"));
    }

    #[test]
    fn test_indeterminate_flags() {
        let mut engine = area_engine();
        engine.set_selection(3, ["Br1", "Br2", "Br3"]);

        let zones = engine.compute_options(2);
        let z1 = zones.iter().find(|o| o.value == "Z1").unwrap();
        assert!(z1.selected && !z1.indeterminate);

        let regions = engine.compute_options(1);
        let r3 = regions.iter().find(|o| o.value == "R3").unwrap();
        assert!(r3.indeterminate);

        let branches = engine.compute_options(3);
        assert!(branches.iter().all(|o| !o.indeterminate));

        engine.clear();
        assert!(engine
            .compute_options(0)
            .iter()
            .all(|o| !o.selected && !o.indeterminate));
    }

    #[test]
    fn test_select_all_and_clear_are_idempotent() {
        let mut engine = area_engine();
        engine.set_selection(1, ["R3"]);

        engine.select_all();
        let once: Vec<_> = (0..4).map(|i| engine.selection(i).clone()).collect();
        engine.select_all();
        let twice: Vec<_> = (0..4).map(|i| engine.selection(i).clone()).collect();
        assert_eq!(once, twice);

        engine.clear();
        engine.clear();
        assert!((0..4).all(|i| engine.selection(i).is_empty()));
        assert!(engine.leaf_selection().is_empty());
    }

    #[test]
    fn test_leaf_round_trip() {
        let mut engine = area_engine();

        engine.set_selection(3, ["Br4", "Br1"]);

        assert_eq!(*engine.selection(3), set(&["Br1", "Br4"]));
        assert_eq!(engine.leaf_selection(), ["Br1", "Br4"]);
    }

    #[test]
    fn test_partial_reselection_drops_removed_parent_only() {
        let mut engine = HierarchyFilterEngine::new(category_levels()).unwrap();
        engine.initialize(vec![
            LeafRecord::from_values(["P1", "A1"]),
            LeafRecord::from_values(["P1", "A2"]),
            LeafRecord::from_values(["P2", "B1"]),
        ]);

        engine.set_selection(0, ["P1"]);

        assert_eq!(engine.leaf_selection(), ["A1", "A2"]);
        assert_eq!(*engine.selection(0), set(&["P1"]));
    }

    #[test]
    fn test_category_scenario_full_only() {
        let mut engine = HierarchyFilterEngine::new(category_levels())
            .unwrap()
            .with_ancestor_rule(AncestorRule::FullOnly);
        let events = recording(&mut engine);

        engine.initialize(category_records());
        assert_eq!(engine.leaf_selection(), ["Sub1", "Sub2", "Sub3"]);

        engine.set_selection(1, ["Sub1"]);

        assert_eq!(engine.leaf_selection(), ["Sub1"]);
        assert!(engine.selection(0).is_empty());
        assert!(engine.is_indeterminate(0, "Main1"));
        assert!(!engine.is_indeterminate(0, "Main2"));

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], ["Sub1"]);
    }

    #[test]
    fn test_keep_partial_retains_selected_ancestor() {
        let mut engine = HierarchyFilterEngine::new(category_levels()).unwrap();
        engine.initialize(category_records());

        engine.set_selection(1, ["Sub1"]);

        // Main1 keeps its mark while Sub1 is still selected, Main2 loses it
        assert_eq!(*engine.selection(0), set(&["Main1"]));
        assert!(engine.is_indeterminate(0, "Main1"));

        engine.set_selection(1, Vec::<String>::new());
        assert!(engine.selection(0).is_empty());
    }

    #[test]
    fn test_area_scenario_select_division() {
        let mut engine = area_engine();
        engine.clear();

        engine.set_selection(0, ["D1"]);

        assert_eq!(*engine.selection(0), set(&["D1"]));
        assert_eq!(*engine.selection(1), set(&["R1", "R2"]));
        assert_eq!(*engine.selection(2), set(&["Z1"]));
        assert_eq!(engine.leaf_selection(), ["Br1", "Br2"]);
    }

    #[test]
    fn test_selecting_division_drops_choices_outside_it() {
        let mut engine = area_engine();
        engine.clear();
        engine.set_selection(3, ["Br1"]);

        engine.set_selection(0, ["D2"]);

        assert_eq!(engine.leaf_selection(), ["Br3", "Br4"]);
        assert_eq!(*engine.selection(2), set(&["Z2", "Z3"]));
        assert!(!engine.is_indeterminate(2, "Z1"));
        assert!(!engine.is_indeterminate(0, "D1"));
    }

    #[test]
    fn test_reselecting_retained_division_refills_subtree() {
        let mut engine = area_engine();
        engine.set_selection(1, ["R1"]);
        // D1 stays selected while R1 is, D2 loses its only region
        assert_eq!(*engine.selection(0), set(&["D1"]));
        assert_eq!(engine.leaf_selection(), ["Br1", "Br2"]);

        engine.set_selection(0, ["D1", "D2"]);

        assert_eq!(*engine.selection(1), set(&["R1", "R2", "R3"]));
        assert_eq!(engine.leaf_selection(), ["Br1", "Br2", "Br3", "Br4"]);
    }

    #[test]
    fn test_leaf_without_ancestors_ignores_coarse_edits() {
        let mut records = area_records();
        records.push(LeafRecord::new([None, None, None, Some("Br9")]));
        let mut engine = HierarchyFilterEngine::new(area_levels()).unwrap();
        engine.initialize(records);

        engine.set_selection(0, ["D2"]);
        assert_eq!(engine.leaf_selection(), ["Br3", "Br4", "Br9"]);

        engine.set_selection(0, Vec::<&str>::new());
        assert_eq!(engine.leaf_selection(), ["Br9"]);
    }

    #[test]
    fn test_empty_selection_clears_branch() {
        let mut engine = area_engine();

        engine.set_selection(0, Vec::<&str>::new());

        assert!((0..4).all(|i| engine.selection(i).is_empty()));
        assert!(engine.leaf_selection().is_empty());
    }

    #[test]
    fn test_empty_selection_clears_leaves_under_partial_division() {
        let mut engine = area_engine();
        engine.clear();
        engine.set_selection(3, ["Br1"]);
        assert!(engine.selection(0).is_empty());
        assert!(engine.is_indeterminate(2, "Z1"));

        engine.set_selection(0, Vec::<&str>::new());

        assert!((0..4).all(|i| engine.selection(i).is_empty()));
        assert!(engine.leaf_selection().is_empty());
    }

    #[test]
    fn test_removing_region_clears_its_subtree_and_updates_division() {
        let mut engine = area_engine();

        engine.set_selection(1, ["R1", "R2"]);

        assert_eq!(engine.leaf_selection(), ["Br1", "Br2"]);
        assert_eq!(*engine.selection(0), set(&["D1"]));
    }

    #[test]
    fn test_toggle_cycles_between_states() {
        let mut engine = HierarchyFilterEngine::new(category_levels())
            .unwrap()
            .with_ancestor_rule(AncestorRule::FullOnly);
        engine.initialize(category_records());

        engine.toggle(0, "Main1");
        assert_eq!(engine.leaf_selection(), ["Sub3"]);

        engine.toggle(1, "Sub2");
        assert!(engine.is_indeterminate(0, "Main1"));

        // Clicking an indeterminate parent completes it
        engine.toggle(0, "Main1");
        assert_eq!(engine.leaf_selection(), ["Sub1", "Sub2", "Sub3"]);
        assert_eq!(*engine.selection(0), set(&["Main1", "Main2"]));
    }

    #[test]
    fn test_toggle_completes_retained_partial_parent() {
        let mut engine = HierarchyFilterEngine::new(category_levels()).unwrap();
        engine.initialize(category_records());
        engine.toggle(1, "Sub2");
        assert!(engine.is_selected(0, "Main1"));

        engine.toggle(0, "Main1");

        assert_eq!(engine.leaf_selection(), ["Sub1", "Sub2", "Sub3"]);
    }

    #[test]
    fn test_unknown_values_are_ignored() {
        let mut engine = area_engine();
        let events = recording(&mut engine);

        engine.set_selection(3, ["Br2", "nope"]);
        engine.set_selection(9, ["Br1"]);
        engine.toggle(0, "nope");

        assert_eq!(engine.leaf_selection(), ["Br2"]);
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_value_without_children_is_clearable_not_expandable() {
        let mut engine = area_engine();

        engine.set_selection(1, ["R2"]);
        assert_eq!(*engine.selection(1), set(&["R2"]));
        assert!(engine.leaf_selection().is_empty());
        assert!(!engine.is_indeterminate(1, "R2"));

        engine.set_selection(1, Vec::<&str>::new());
        assert!(engine.selection(1).is_empty());
    }

    #[test]
    fn test_replace_records_prunes_missing_values() {
        let mut engine = area_engine();
        engine.set_selection(3, ["Br1", "Br3"]);
        let events = recording(&mut engine);

        let mut refreshed = area_records();
        refreshed.retain(|r| r.value_at(3) != Some("Br3"));
        engine.replace_records(refreshed);

        assert_eq!(engine.leaf_selection(), ["Br1"]);
        assert!(!engine.is_selected(2, "Z2"));
        assert_eq!(events.lock().unwrap().len(), 1);

        engine.replace_records(engine.records().to_vec());
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_records_give_empty_options() {
        let mut engine = HierarchyFilterEngine::new(category_levels()).unwrap();
        let events = recording(&mut engine);

        engine.initialize(Vec::new());

        assert!(engine.compute_options(0).is_empty());
        assert!(engine.leaf_selection().is_empty());
        assert!(engine.is_all_selected());
        assert_eq!(events.lock().unwrap().as_slice(), [Vec::<String>::new()]);
    }

    #[test]
    fn test_single_level_hierarchy() {
        let mut engine =
            HierarchyFilterEngine::new(vec![HierarchyLevel::new("branch", "Branch")]).unwrap();
        engine.initialize(vec![
            LeafRecord::from_values(["B1"]).with_label("Main office"),
            LeafRecord::from_values(["B2"]),
        ]);

        engine.toggle(0, "B1");

        assert_eq!(engine.leaf_selection(), ["B2"]);
        assert_eq!(engine.compute_options(0)[0].label, "Main office");
        assert_eq!(engine.level_index("branch"), Some(0));
    }
}
