//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    check_slug_handler, create_page_handler, get_page_handler, gif_search_handler,
};
use crate::state::AppState;

/// Read-only API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /pages/{slug}`       - Fetch a flashpage (counts the view)
/// - `GET /pages/check/{slug}` - Check subdomain availability
/// - `GET /gifs/search`        - Search GIFs via the configured provider
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/pages/check/{slug}", get(check_slug_handler))
        .route("/pages/{slug}", get(get_page_handler))
        .route("/gifs/search", get(gif_search_handler))
}

/// Mutating API routes, rate limited per client IP.
///
/// # Endpoints
///
/// - `POST /pages` - Create a flashpage
pub fn mutating_routes() -> Router<AppState> {
    Router::new().route("/pages", post(create_page_handler))
}
