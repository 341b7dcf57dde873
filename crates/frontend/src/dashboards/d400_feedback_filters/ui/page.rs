use crate::dashboards::d400_feedback_filters::api;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::hierarchy_filter::{summary_label, FilterHandle, HierarchyFilter};
use contracts::dashboards::d400_feedback_filters::{
    branch_records, category_records, FeedbackFilterSelection,
};
use contracts::shared::hierarchy_filter::{AREA_HIERARCHY, CATEGORY_HIERARCHY};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Feedback filters page: area and category filters feeding the comment browser
#[component]
pub fn FeedbackFiltersPage() -> impl IntoView {
    let selection = RwSignal::new(FeedbackFilterSelection::default());
    let is_expanded = RwSignal::new(true);
    let (loading, set_loading) = signal(true);

    let on_branches = Callback::new(move |branches: Vec<String>| {
        selection.update(|s| s.branches = branches);
    });
    let on_sub_categories = Callback::new(move |sub_categories: Vec<String>| {
        selection.update(|s| s.sub_categories = sub_categories);
    });

    let handles = FilterHandle::from_config(AREA_HIERARCHY, on_branches).and_then(|area| {
        FilterHandle::from_config(CATEGORY_HIERARCHY, on_sub_categories)
            .map(|category| (area, category))
    });
    let (area, category) = match handles {
        Ok(handles) => handles,
        Err(e) => {
            log::error!("D400: filter configuration error: {}", e);
            return view! {
                <div class="error-message">{format!("Ошибка конфигурации фильтров: {}", e)}</div>
            }
            .into_any();
        }
    };

    // Fetch failures degrade to "no options", the filters stay usable
    spawn_local(async move {
        let branches = api::get_branches().await.unwrap_or_else(|e| {
            log::error!("D400: failed to load branches: {}", e);
            Vec::new()
        });
        area.load(branch_records(&branches));

        let categories = api::get_categories().await.unwrap_or_else(|e| {
            log::error!("D400: failed to load categories: {}", e);
            Vec::new()
        });
        category.load(category_records(&categories));

        set_loading.set(false);
    });

    let active_filters_count = Signal::derive(move || {
        let (_, total_branches) = area.leaf_counts();
        let (_, total_sub_categories) = category.leaf_counts();
        selection
            .get()
            .active_count(total_branches, total_sub_categories)
    });

    let reset_all = Callback::new(move |_: ()| {
        area.select_all();
        category.select_all();
    });

    view! {
        <div class="page feedback-filters">
            <div class="page__header">
                <h2 class="page__title">"Отзывы клиентов"</h2>
            </div>

            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=active_filters_count
                on_reset=reset_all
            >
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="filter-panel__loading">"Загрузка справочников..."</div> }
                >
                    <div class="feedback-filters__grid">
                        <HierarchyFilter handle=area title="Территория" />
                        <HierarchyFilter handle=category title="Категории" />
                    </div>
                </Show>
                <div class="filter-panel__tags">
                    <Show when=move || area.is_narrowing()>
                        <FilterTag
                            label=Signal::derive(move || {
                                let (selected, total) = area.leaf_counts();
                                format!("Отделения: {}", summary_label(selected, total))
                            })
                            on_remove=Callback::new(move |_| area.select_all())
                        />
                    </Show>
                    <Show when=move || category.is_narrowing()>
                        <FilterTag
                            label=Signal::derive(move || {
                                let (selected, total) = category.leaf_counts();
                                format!("Подкатегории: {}", summary_label(selected, total))
                            })
                            on_remove=Callback::new(move |_| category.select_all())
                        />
                    </Show>
                </div>
            </FilterPanel>

            <div class="feedback-filters__result">
                {move || {
                    let current = selection.get();
                    format!(
                        "Отделений выбрано: {}, подкатегорий выбрано: {}",
                        current.branches.len(),
                        current.sub_categories.len()
                    )
                }}
            </div>
        </div>
    }
    .into_any()
}
