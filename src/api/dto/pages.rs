//! DTOs for the page endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::page::SLUG_REGEX;
use crate::domain::entities::{NewPage, Page, PageSummary, Theme};

/// Request body for creating a flashpage.
///
/// `theme` and `isDarkMode` fall back to their documented defaults when
/// omitted, matching the wizard's initial form state.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    /// The subdomain label the page will live under.
    #[validate(length(min = 3, max = 50))]
    #[validate(regex(
        path = "*SLUG_REGEX",
        message = "Use only lowercase letters, numbers, and hyphens"
    ))]
    pub slug: String,

    #[validate(length(min = 1, max = 100))]
    pub title: String,

    #[validate(length(min = 1, max = 1000))]
    pub content: String,

    #[validate(url(message = "Invalid GIF URL"))]
    pub gif_url: String,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub is_dark_mode: bool,
}

impl From<CreatePageRequest> for NewPage {
    fn from(req: CreatePageRequest) -> Self {
        NewPage {
            slug: req.slug,
            title: req.title,
            content: req.content,
            gif_url: req.gif_url,
            theme: req.theme,
            is_dark_mode: req.is_dark_mode,
        }
    }
}

/// Response after a successful creation.
#[derive(Debug, Serialize)]
pub struct CreatePageResponse {
    pub success: bool,
    pub record: PageSummary,
}

/// Response for the slug availability check.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub slug: String,
}

/// Full page record as served to renderers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub gif_url: String,
    pub theme: Theme,
    pub is_dark_mode: bool,
    pub created_at: DateTime<Utc>,
    pub views: i64,
}

impl From<Page> for PageResponse {
    fn from(page: Page) -> Self {
        Self {
            slug: page.slug,
            title: page.title,
            content: page.content,
            gif_url: page.gif_url,
            theme: page.theme,
            is_dark_mode: page.is_dark_mode,
            created_at: page.created_at,
            views: page.views,
        }
    }
}
