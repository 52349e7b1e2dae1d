//! Tenant flashpage handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::api::middleware::ResolvedSubdomain;
use crate::domain::entities::Page;
use crate::error::AppError;
use crate::state::AppState;

/// Template for a tenant's flashpage.
///
/// Renders `templates/page.html` with the page content and the CSS custom
/// properties of its theme.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub page: Page,
    pub css_vars: String,
}

/// Template for a tenant host with no flashpage behind it.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub slug: String,
}

/// Renders the flashpage for the resolved tenant.
///
/// # Endpoint
///
/// `GET /subdomain`
///
/// Reaching this path without a tenant host means the resolution
/// middleware was bypassed (or the extension is missing); the request is
/// sent back to the main site rather than failing.
pub async fn tenant_handler(
    State(state): State<AppState>,
    subdomain: Option<Extension<ResolvedSubdomain>>,
) -> Result<Response, AppError> {
    let Some(slug) = subdomain.and_then(|Extension(resolved)| resolved.0) else {
        return Ok(Redirect::temporary("/").into_response());
    };

    match state.page_service.view_page(&slug).await {
        Ok(page) => {
            let css_vars = page.theme.css_vars(page.is_dark_mode);
            Ok(PageTemplate { page, css_vars }.into_response())
        }
        Err(AppError::NotFound { .. }) => {
            Ok((StatusCode::NOT_FOUND, NotFoundTemplate { slug }).into_response())
        }
        Err(err) => Err(err),
    }
}
