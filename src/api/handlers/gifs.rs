//! Handler for the GIF search endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::{GifSearchParams, GifSearchResponse};
use crate::infrastructure::gif::GifPage;
use crate::state::AppState;

/// Proxies a GIF search to the configured provider.
///
/// # Endpoint
///
/// `GET /api/gifs/search?q={query}&page={page}`
///
/// Always answers 200: a missing query yields an empty page, and a provider
/// failure is reported as `result: false` with an empty page so the search
/// UI degrades to "no results" instead of surfacing a server error.
pub async fn gif_search_handler(
    State(state): State<AppState>,
    Query(params): Query<GifSearchParams>,
) -> Json<GifSearchResponse> {
    let page = params.page();

    let Some(query) = params.query() else {
        return Json(GifSearchResponse {
            result: true,
            data: GifPage::empty(page),
        });
    };

    match state.gif_provider.search(query, page).await {
        Ok(data) => Json(GifSearchResponse { result: true, data }),
        Err(err) => {
            tracing::warn!(query, page, "gif search failed: {err}");
            Json(GifSearchResponse {
                result: false,
                data: GifPage::empty(page),
            })
        }
    }
}
