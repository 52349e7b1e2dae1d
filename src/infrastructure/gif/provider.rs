//! GIF provider trait and search result types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Results per search page, matching the upstream provider's default.
pub const PER_PAGE: u32 = 12;

/// One animated image offered by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gif {
    pub slug: String,
    pub title: String,
    /// Direct URL of the animated GIF rendition.
    pub gif_url: String,
    /// URL of the WebP rendition, when the provider offers one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webp_url: Option<String>,
    /// URL of the MP4 rendition, when the provider offers one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp4_url: Option<String>,
    pub width: u32,
    pub height: u32,
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GifPage {
    pub items: Vec<Gif>,
    pub current_page: u32,
    pub per_page: u32,
    pub has_next: bool,
}

impl GifPage {
    /// An empty result page, used for blank queries and error envelopes.
    pub fn empty(page: u32) -> Self {
        Self {
            items: Vec::new(),
            current_page: page,
            per_page: PER_PAGE,
            has_next: false,
        }
    }
}

/// Trait for GIF search providers.
///
/// Implementations must be thread-safe. Search failures are reported as
/// [`AppError::Upstream`]; callers decide whether to surface them or degrade
/// to an empty result page.
///
/// # Implementations
///
/// - [`crate::infrastructure::gif::KlipyClient`] - Klipy-backed search with
///   a demo fallback when no API key is configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GifProvider: Send + Sync {
    /// Searches for GIFs matching `query`, returning the requested page
    /// (1-indexed).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failures or malformed
    /// upstream responses.
    async fn search(&self, query: &str, page: u32) -> Result<GifPage, AppError>;

    /// Returns whether real upstream credentials are configured.
    ///
    /// Unconfigured providers still answer searches (with demo content) so
    /// the wizard stays usable in development.
    fn is_configured(&self) -> bool;
}
