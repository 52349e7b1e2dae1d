//! Tenant resolution middleware for the web routes.
//!
//! Tags each request with the subdomain extracted from its `Host` header
//! and enforces the host/path pairing: tenant hosts are steered to the
//! tenant page, root hosts away from it.

use axum::{
    extract::Request,
    http::header::HOST,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::subdomain::{RouteAction, extract_subdomain, resolve_route};

/// Subdomain resolved from the request host, inserted as a request
/// extension for downstream handlers.
#[derive(Debug, Clone)]
pub struct ResolvedSubdomain(pub Option<String>);

/// Resolves the tenant for a request and redirects mismatched paths.
///
/// Requests that pass through carry a [`ResolvedSubdomain`] extension.
/// Redirects are `307 Temporary Redirect`, so the same host resolves
/// freshly on every request as DNS or page ownership changes.
pub async fn resolve_tenant(mut request: Request, next: Next) -> Response {
    let host = request
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .or_else(|| request.uri().authority().map(|a| a.to_string()));

    let subdomain = host.as_deref().and_then(extract_subdomain);

    match resolve_route(subdomain.as_deref(), request.uri().path()) {
        RouteAction::Allow => {
            request.extensions_mut().insert(ResolvedSubdomain(subdomain));
            next.run(request).await
        }
        action => match action.target() {
            Some(target) => Redirect::temporary(target).into_response(),
            // target() is Some for every non-Allow action.
            None => next.run(request).await,
        },
    }
}
