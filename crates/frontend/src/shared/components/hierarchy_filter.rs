use super::tri_state_checkbox::TriStateCheckbox;
use contracts::shared::hierarchy_filter::{
    FilterConfig, FilterError, FilterOption, HierarchyFilterEngine, HierarchyLevel, LeafRecord,
};
use leptos::prelude::*;

/// Handle to one hierarchy filter engine
///
/// Owned by the page; the widget renders from it and the page calls
/// [`select_all`](Self::select_all) directly for "reset all filters".
/// `revision` is bumped after every mutation so option lists re-render.
#[derive(Clone, Copy)]
pub struct FilterHandle {
    engine: StoredValue<HierarchyFilterEngine>,
    revision: RwSignal<u64>,
}

impl FilterHandle {
    /// Wrap an engine; `on_change` receives the selected leaves after every change
    pub fn new(mut engine: HierarchyFilterEngine, on_change: Callback<Vec<String>>) -> Self {
        engine.set_listener(move |leaves| on_change.run(leaves.to_vec()));
        Self {
            engine: StoredValue::new(engine),
            revision: RwSignal::new(0),
        }
    }

    /// Handle for a hierarchy from the embedded dashboard configuration
    pub fn from_config(id: &str, on_change: Callback<Vec<String>>) -> Result<Self, FilterError> {
        let engine = FilterConfig::default_config().engine(id)?;
        Ok(Self::new(engine, on_change))
    }

    pub fn levels(&self) -> Vec<HierarchyLevel> {
        self.engine.with_value(|e| e.levels().to_vec())
    }

    /// Hand a freshly fetched record set to the engine.
    ///
    /// The first load selects everything; later loads keep the user's choices.
    pub fn load(&self, records: Vec<LeafRecord>) -> bool {
        let first = self
            .engine
            .try_update_value(|e| e.initialize(records))
            .unwrap_or(false);
        self.bump();
        first
    }

    pub fn toggle(&self, level: usize, value: &str) {
        self.engine.update_value(|e| e.toggle(level, value));
        self.bump();
    }

    pub fn select_all(&self) {
        self.engine.update_value(|e| e.select_all());
        self.bump();
    }

    pub fn clear(&self) {
        self.engine.update_value(|e| e.clear());
        self.bump();
    }

    /// Options of `level` with check state (reactive)
    pub fn options(&self, level: usize) -> Vec<FilterOption> {
        self.revision.track();
        self.engine.with_value(|e| e.compute_options(level))
    }

    /// (selected, total) leaves (reactive)
    pub fn leaf_counts(&self) -> (usize, usize) {
        self.revision.track();
        self.engine.with_value(|e| {
            let leaf = e.leaf_level();
            (e.selection(leaf).len(), e.index().options(leaf).len())
        })
    }

    /// Some leaves are deselected (reactive)
    pub fn is_narrowing(&self) -> bool {
        let (selected, total) = self.leaf_counts();
        selected < total
    }

    fn bump(&self) {
        self.revision.update(|r| *r += 1);
    }
}

/// Текст сводки под заголовком фильтра
pub fn summary_label(selected: usize, total: usize) -> String {
    if total == 0 {
        "Нет данных".to_string()
    } else if selected == 0 {
        "Ничего не выбрано".to_string()
    } else if selected == total {
        format!("Все ({})", total)
    } else {
        format!("{} из {}", selected, total)
    }
}

/// Многоуровневый фильтр: по колонке на каждый уровень иерархии
#[component]
pub fn HierarchyFilter(
    /// Движок фильтра, которым владеет страница
    handle: FilterHandle,

    /// Заголовок блока
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let levels = handle.levels();

    view! {
        <div class="hierarchy-filter">
            <div class="hierarchy-filter__header">
                <span class="hierarchy-filter__title">{title}</span>
                <span class="hierarchy-filter__summary">
                    {move || {
                        let (selected, total) = handle.leaf_counts();
                        summary_label(selected, total)
                    }}
                </span>
                <button class="hierarchy-filter__action" on:click=move |_| handle.select_all()>
                    "Выбрать все"
                </button>
                <button class="hierarchy-filter__action" on:click=move |_| handle.clear()>
                    "Снять все"
                </button>
            </div>
            <div class="hierarchy-filter__levels">
                {levels
                    .into_iter()
                    .enumerate()
                    .map(|(level, info)| {
                        view! {
                            <div class="hierarchy-filter__level">
                                <div class="hierarchy-filter__level-title">{info.title}</div>
                                <div class="hierarchy-filter__options">
                                    {move || {
                                        handle
                                            .options(level)
                                            .into_iter()
                                            .map(|option| {
                                                let value = option.value.clone();
                                                view! {
                                                    <TriStateCheckbox
                                                        label=option.label
                                                        checked=option.selected
                                                        indeterminate=option.indeterminate
                                                        on_toggle=Callback::new(move |_| {
                                                            handle.toggle(level, &value)
                                                        })
                                                    />
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
