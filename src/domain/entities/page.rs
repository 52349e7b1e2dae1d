//! Page entity representing one published flashpage.

use crate::domain::entities::theme::Theme;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Minimum slug length in characters.
pub const SLUG_MIN_LEN: usize = 3;
/// Maximum slug length in characters.
pub const SLUG_MAX_LEN: usize = 50;
/// Maximum title length in characters.
pub const TITLE_MAX_LEN: usize = 100;
/// Maximum content length in characters.
pub const CONTENT_MAX_LEN: usize = 1000;

/// Compiled regex for slug validation. Slugs double as subdomain labels,
/// so only lowercase alphanumerics and hyphens are allowed.
pub static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Returns true if `slug` satisfies the length and character-set rules.
pub fn is_valid_slug(slug: &str) -> bool {
    (SLUG_MIN_LEN..=SLUG_MAX_LEN).contains(&slug.chars().count()) && SLUG_REGEX.is_match(slug)
}

/// A published flashpage addressed by its slug (also its subdomain label).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Page {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub gif_url: String,
    pub theme: Theme,
    pub is_dark_mode: bool,
    pub created_at: DateTime<Utc>,
    pub views: i64,
}

impl Page {
    /// Public summary returned after creation.
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            created_at: self.created_at,
        }
    }
}

/// Input data for creating a new page.
#[derive(Debug, Clone)]
pub struct NewPage {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub gif_url: String,
    pub theme: Theme,
    pub is_dark_mode: bool,
}

/// The public summary of a created page.
///
/// Serialized in camelCase because it crosses the wire as-is in the
/// creation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub slug: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}
