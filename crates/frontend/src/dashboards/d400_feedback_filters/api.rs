use crate::shared::api_utils::paged_api_url;
use contracts::dashboards::d400_feedback_filters::{BranchRow, CategoryRow};
use contracts::shared::paging::{Page, PageCollector, DEFAULT_PAGE_SIZE};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

const API_BASE: &str = "/api/d400";

/// Прочитать таблицу целиком, страница за страницей
async fn fetch_all_pages<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    let mut collector = PageCollector::new(DEFAULT_PAGE_SIZE);

    while let Some(page_request) = collector.next_request() {
        let response = Request::get(&paged_api_url(path, page_request))
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let page: Page<T> = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        collector.push(page).map_err(|e| e.to_string())?;
    }

    log::debug!("{}: {} rows loaded", path, collector.received());
    collector
        .finish()
        .ok_or_else(|| format!("{}: incomplete result set", path))
}

/// Получить справочник отделений
pub async fn get_branches() -> Result<Vec<BranchRow>, String> {
    fetch_all_pages(&format!("{}/branches", API_BASE)).await
}

/// Получить справочник категорий
pub async fn get_categories() -> Result<Vec<CategoryRow>, String> {
    fetch_all_pages(&format!("{}/categories", API_BASE)).await
}
