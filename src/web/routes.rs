//! Web route configuration.

use axum::{Router, middleware, routing::get};

use crate::api::middleware::resolve_tenant;
use crate::state::AppState;
use crate::web::handlers::{home_handler, tenant_handler};

/// Server-rendered routes, guarded by the tenant resolution middleware.
///
/// # Endpoints
///
/// - `GET /`          - Home page with the creation wizard outline
/// - `GET /subdomain` - The flashpage for the request's tenant host
pub fn web_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/subdomain", get(tenant_handler))
        .layer(middleware::from_fn(resolve_tenant))
}
