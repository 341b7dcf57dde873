use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible panel that hosts the dashboard filters
///
/// Header shows the number of narrowing filters and an optional
/// "reset all" action; the body is the component's children.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Reset all filters; the button is hidden when not provided
    #[prop(optional)]
    on_reset: Option<Callback<()>>,

    /// Filter content
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Фильтры"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                {on_reset.map(|reset| view! {
                    <div class="filter-panel-header__right">
                        <button
                            class="filter-panel__reset"
                            prop:disabled=move || active_filters_count.get() == 0
                            on:click=move |_| reset.run(())
                        >
                            {icon("reset")}
                            <span>"Сбросить все фильтры"</span>
                        </button>
                    </div>
                })}
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// FilterTag component - chip for one narrowing filter
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: Signal<String>,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("close")}
            </span>
        </div>
    }
}
