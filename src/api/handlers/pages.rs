//! Handlers for the page endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::{AvailabilityResponse, CreatePageRequest, CreatePageResponse, PageResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a flashpage.
///
/// # Endpoint
///
/// `POST /api/pages`
///
/// # Response Codes
///
/// - **201 Created**: Page created, summary returned
/// - **400 Bad Request**: Validation failed
/// - **409 Conflict**: Subdomain already taken
pub async fn create_page_handler(
    State(state): State<AppState>,
    Json(request): Json<CreatePageRequest>,
) -> Result<(StatusCode, Json<CreatePageResponse>), AppError> {
    request.validate()?;

    let page = state.page_service.create_page(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePageResponse {
            success: true,
            record: page.summary(),
        }),
    ))
}

/// Checks whether a subdomain is still available.
///
/// # Endpoint
///
/// `GET /api/pages/check/{slug}`
pub async fn check_slug_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let slug = slug.to_lowercase();
    let available = state.page_service.check_availability(&slug).await?;

    Ok(Json(AvailabilityResponse { available, slug }))
}

/// Fetches a flashpage by slug, counting the view.
///
/// # Endpoint
///
/// `GET /api/pages/{slug}`
///
/// # Response Codes
///
/// - **200 OK**: Page found
/// - **404 Not Found**: No page under that subdomain
pub async fn get_page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageResponse>, AppError> {
    let page = state.page_service.view_page(&slug.to_lowercase()).await?;

    Ok(Json(page.into()))
}
