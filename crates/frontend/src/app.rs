use crate::dashboards::FeedbackFiltersPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <FeedbackFiltersPage />
        </ConfigProvider>
    }
}
