//! Page creation and retrieval service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::page::{
    CONTENT_MAX_LEN, SLUG_MAX_LEN, SLUG_MIN_LEN, TITLE_MAX_LEN, is_valid_slug,
};
use crate::domain::entities::{NewPage, Page};
use crate::domain::repositories::PageRepository;
use crate::error::AppError;

/// Service for creating and retrieving flashpages.
///
/// Slugs are lowercased on every path so the stored key always matches the
/// subdomain label the resolver produces.
pub struct PageService {
    repository: Arc<dyn PageRepository>,
}

impl PageService {
    /// Creates a new page service.
    pub fn new(repository: Arc<dyn PageRepository>) -> Self {
        Self { repository }
    }

    /// Creates a flashpage after validating the payload.
    ///
    /// The slug is checked for availability first for a friendly error, but
    /// the database constraint remains the authority under races.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed fields and
    /// [`AppError::Conflict`] when the slug is already taken.
    pub async fn create_page(&self, mut new_page: NewPage) -> Result<Page, AppError> {
        new_page.slug = new_page.slug.to_lowercase();
        validate_new_page(&new_page)?;

        if self.repository.slug_taken(&new_page.slug).await? {
            return Err(AppError::conflict(
                "Flashpage with this subdomain already exists",
                json!({ "slug": new_page.slug }),
            ));
        }

        match self.repository.create(new_page).await {
            Err(AppError::Conflict { details, .. }) => Err(AppError::conflict(
                "Flashpage with this subdomain already exists",
                details,
            )),
            other => other,
        }
    }

    /// Returns whether a slug is still free, keyed by lowercase slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn check_availability(&self, slug: &str) -> Result<bool, AppError> {
        let slug = slug.to_lowercase();
        Ok(!self.repository.slug_taken(&slug).await?)
    }

    /// Fetches a page for rendering, counting the view.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no page matches the slug.
    pub async fn view_page(&self, slug: &str) -> Result<Page, AppError> {
        let slug = slug.to_lowercase();
        self.repository
            .record_view(&slug)
            .await?
            .ok_or_else(|| AppError::not_found("Flashpage not found", json!({ "slug": slug })))
    }

    /// Total number of published pages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_pages(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

/// Validates field lengths and the slug charset of a creation payload.
fn validate_new_page(new_page: &NewPage) -> Result<(), AppError> {
    if !is_valid_slug(&new_page.slug) {
        return Err(AppError::bad_request(
            format!(
                "Invalid subdomain format. Use only lowercase letters, numbers, and hyphens \
                 ({SLUG_MIN_LEN}-{SLUG_MAX_LEN} characters)"
            ),
            json!({ "slug": new_page.slug }),
        ));
    }

    if new_page.title.is_empty() || new_page.title.chars().count() > TITLE_MAX_LEN {
        return Err(AppError::bad_request(
            format!("Title must be 1-{TITLE_MAX_LEN} characters"),
            json!({}),
        ));
    }

    if new_page.content.is_empty() || new_page.content.chars().count() > CONTENT_MAX_LEN {
        return Err(AppError::bad_request(
            format!("Content must be 1-{CONTENT_MAX_LEN} characters"),
            json!({}),
        ));
    }

    if new_page.gif_url.is_empty() {
        return Err(AppError::bad_request("Missing required fields", json!({})));
    }

    Ok(())
}
