//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Counts stored pages
/// 2. **GIF provider**: Reports whether an API key is configured (demo
///    results are served without one, so this never degrades overall health)
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let gif_check = if state.gif_provider.is_configured() {
        CheckStatus::ok("Provider configured")
    } else {
        CheckStatus::ok("No API key, serving demo results")
    };

    let all_healthy = db_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            gif_provider: gif_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity by counting pages.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.page_service.count_pages().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {count} pages")),
        Err(e) => CheckStatus::error(format!("Database error: {e}")),
    }
}
