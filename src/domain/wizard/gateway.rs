//! Gateway trait for the wizard's persistence collaborator.

use crate::domain::entities::PageSummary;
use crate::domain::wizard::session::WizardFormData;
use crate::error::AppError;
use async_trait::async_trait;

/// The wizard's view of the persistence layer.
///
/// The wizard never talks to storage directly; it issues availability
/// checks and a single create call through this seam.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpCreationGateway`] - HTTP client
///   against the service's own API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreationGateway: Send + Sync {
    /// Returns whether the slug is still available, keyed by lowercase slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failures. Callers that
    /// need a conservative answer (the wizard) collapse errors to `false`.
    async fn check_slug(&self, slug: &str) -> Result<bool, AppError>;

    /// Creates a page from the full form data.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken,
    /// [`AppError::Validation`] if the collaborator rejects the payload,
    /// [`AppError::Upstream`] on transport failures.
    async fn create(&self, form: &WizardFormData) -> Result<PageSummary, AppError>;
}
