//! Main-site home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::Theme;
use crate::domain::wizard::steps::{STEPS, WizardStep};
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/home.html` with the creation wizard's step outline,
/// the available themes, and how many flashpages exist.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub steps: &'static [WizardStep],
    pub themes: &'static [Theme],
    pub page_count: i64,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// The page count is decorative; a database hiccup renders as zero rather
/// than failing the whole page.
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    let page_count = state.page_service.count_pages().await.unwrap_or(0);

    HomeTemplate {
        steps: &STEPS,
        themes: &Theme::ALL,
        page_count,
    }
}
