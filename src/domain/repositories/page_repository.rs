//! Repository trait for flashpage data access.

use crate::domain::entities::{NewPage, Page};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing flashpages.
///
/// Slug uniqueness is enforced here (by the backing store), not by the
/// creation wizard.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPageRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Creates a new page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a page with the same slug already
    /// exists. Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_page: NewPage) -> Result<Page, AppError>;

    /// Returns true if a page with the given slug exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn slug_taken(&self, slug: &str) -> Result<bool, AppError>;

    /// Finds a page by slug and increments its view counter atomically.
    ///
    /// Returns the page with the updated counter, or `None` if no page
    /// matches the slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_view(&self, slug: &str) -> Result<Option<Page>, AppError>;

    /// Counts all published pages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
