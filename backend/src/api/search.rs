use crate::models::{CategoryFilter, QueryState, SearchResponse, SortKey, VideoCard};
use crate::services::search_service::query;
use crate::AppState;
use log::{debug, info};
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/?<q>&<category>&<sort>&<page>")]
pub fn search_videos(
    q: Option<String>,
    category: Option<String>,
    sort: Option<String>,
    page: Option<usize>,
    state: &State<AppState>,
) -> Json<SearchResponse> {
    // Page 0 or missing means the first page; pages past the end stay empty.
    let page = page.filter(|p| *p > 0).unwrap_or(1);

    let sort_key = match sort.as_deref() {
        Some(key) => SortKey::from_key(key).unwrap_or_else(|| {
            debug!("Unknown sort key '{key}', falling back to recency");
            SortKey::Recency
        }),
        None => SortKey::Recency,
    };

    let query_state = QueryState {
        search_text: q.as_deref().map(str::trim).unwrap_or_default().to_string(),
        category: category
            .as_deref()
            .map(CategoryFilter::from_param)
            .unwrap_or_default(),
        sort_key,
        page,
        page_size: state.page_size,
    };

    let result = query(state.catalog.videos(), &query_state);
    info!(
        "Search '{}' returned {} of {} matches (page {page})",
        query_state.search_text,
        result.results.len(),
        result.total_matched
    );

    Json(SearchResponse {
        total_pages: result.total_pages(),
        total_matched: result.total_matched,
        page,
        page_size: state.page_size,
        results: result.results.into_iter().map(VideoCard::from).collect(),
    })
}

#[get("/")]
pub fn list_categories(state: &State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.categories().to_vec())
}
