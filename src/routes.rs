//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Home page (root hosts only)
//! - `GET  /subdomain`   - Tenant flashpage (tenant hosts only)
//! - `GET  /health`      - Health check: DB, GIF provider (public)
//! - `/api/*`            - REST API
//!
//! # Middleware
//!
//! - **Tenant resolution** - Host-based routing for the web pages
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on page creation
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
///   address; enable only when the service runs behind a trusted reverse
///   proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let mutating = if behind_proxy {
        api::routes::mutating_routes().layer(rate_limit::proxied_layer())
    } else {
        api::routes::mutating_routes().layer(rate_limit::layer())
    };

    NormalizePathLayer::trim_trailing_slash().layer(compose(state, mutating))
}

/// Assembles the full route tree around an already-layered mutating router.
fn compose(state: AppState, mutating: Router<AppState>) -> Router {
    let api_router = api::routes::public_routes().merge(mutating);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web::routes::web_routes())
        .with_state(state)
        .layer(tracing::layer())
}
