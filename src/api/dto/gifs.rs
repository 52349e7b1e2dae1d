//! DTOs for the GIF search endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::infrastructure::gif::GifPage;

/// Query parameters for `GET /api/gifs/search`.
///
/// Uses `serde_with` to parse the page number from the query string as an
/// integer.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct GifSearchParams {
    #[serde(default)]
    pub q: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,
}

impl GifSearchParams {
    /// The trimmed query, or `None` when absent or blank.
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    /// The requested page, clamped to a minimum of 1.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }
}

/// Response envelope for GIF searches.
///
/// `result` is `false` when the upstream provider failed; the search UI
/// treats that as "no results" rather than an error page.
#[derive(Debug, Serialize)]
pub struct GifSearchResponse {
    pub result: bool,
    pub data: GifPage,
}
