//! Klipy-backed GIF search client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::infrastructure::gif::provider::{Gif, GifPage, GifProvider, PER_PAGE};

/// HTTP client for the Klipy GIF search API.
///
/// When constructed without an API key the client never contacts the
/// upstream and serves a fixed demo page instead, so local development
/// works without credentials.
pub struct KlipyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl KlipyClient {
    /// Creates a client for the given base URL and optional API key.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    fn search_url(&self, key: &str) -> String {
        format!(
            "{}/api/v1/{}/gifs/search",
            self.base_url.trim_end_matches('/'),
            key
        )
    }
}

#[async_trait]
impl GifProvider for KlipyClient {
    async fn search(&self, query: &str, page: u32) -> Result<GifPage, AppError> {
        if query.trim().is_empty() {
            return Ok(GifPage::empty(1));
        }

        let Some(key) = &self.api_key else {
            tracing::debug!("KLIPY_API_KEY not configured, serving demo GIFs");
            return Ok(demo_page());
        };

        let page_param = page.to_string();
        let per_page_param = PER_PAGE.to_string();
        let response = self
            .http
            .get(self.search_url(key))
            .query(&[
                ("q", query),
                ("page", page_param.as_str()),
                ("per_page", per_page_param.as_str()),
                ("content_filter", "safe"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: KlipyResponse = response.json().await?;

        if !body.result {
            return Err(AppError::upstream(
                "GIF provider rejected the search",
                json!({ "query": query, "page": page }),
            ));
        }

        let items = body
            .data
            .data
            .into_iter()
            .map(|gif| Gif {
                slug: gif.slug,
                title: gif.title,
                gif_url: gif.file.hd.gif.url,
                webp_url: Some(gif.file.hd.webp.url),
                mp4_url: Some(gif.file.hd.mp4.url),
                width: gif.file.hd.gif.width,
                height: gif.file.hd.gif.height,
            })
            .collect();

        Ok(GifPage {
            items,
            current_page: body.data.current_page,
            per_page: body.data.per_page,
            has_next: body.data.has_next,
        })
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// The demo page served when no API key is configured.
fn demo_page() -> GifPage {
    let demo = |slug: &str, title: &str, url: &str| Gif {
        slug: slug.to_string(),
        title: title.to_string(),
        gif_url: url.to_string(),
        webp_url: None,
        mp4_url: None,
        width: 480,
        height: 270,
    };

    GifPage {
        items: vec![
            demo(
                "demo-gif-1",
                "Demo GIF",
                "https://media.giphy.com/media/l0MYt5jPR6QX5pnqM/giphy.gif",
            ),
            demo(
                "demo-gif-2",
                "Demo GIF 2",
                "https://media.giphy.com/media/3o7TKSjRrfIPjeiVyM/giphy.gif",
            ),
        ],
        current_page: 1,
        per_page: PER_PAGE,
        has_next: false,
    }
}

// ── Upstream wire format ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct KlipyResponse {
    result: bool,
    data: KlipyData,
}

#[derive(Debug, Deserialize)]
struct KlipyData {
    data: Vec<KlipyGif>,
    current_page: u32,
    per_page: u32,
    has_next: bool,
}

#[derive(Debug, Deserialize)]
struct KlipyGif {
    slug: String,
    title: String,
    file: KlipyFile,
}

#[derive(Debug, Deserialize)]
struct KlipyFile {
    hd: KlipyRenditions,
}

#[derive(Debug, Deserialize)]
struct KlipyRenditions {
    gif: KlipyRendition,
    webp: KlipyRendition,
    mp4: KlipyRendition,
}

#[derive(Debug, Deserialize)]
struct KlipyRendition {
    url: String,
    width: u32,
    height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_query_returns_empty_page_without_upstream() {
        let client = KlipyClient::new("https://api.klipy.invalid", Some("key".to_string()));
        let page = client.search("   ", 1).await.unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_next);
    }

    #[tokio::test]
    async fn test_unconfigured_client_serves_demo_page() {
        let client = KlipyClient::new("https://api.klipy.invalid", None);
        assert!(!client.is_configured());

        let page = client.search("celebration", 1).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.current_page, 1);
        assert!(!page.has_next);
        assert!(page.items[0].gif_url.starts_with("https://"));
    }

    #[test]
    fn test_search_url_shape() {
        let client = KlipyClient::new("https://api.klipy.co/", None);
        assert_eq!(
            client.search_url("abc"),
            "https://api.klipy.co/api/v1/abc/gifs/search"
        );
    }

    #[test]
    fn test_upstream_response_parsing() {
        let raw = serde_json::json!({
            "result": true,
            "data": {
                "data": [{
                    "slug": "party-1",
                    "title": "Party",
                    "file": {
                        "hd": {
                            "gif": { "url": "https://cdn/p.gif", "width": 480, "height": 270, "size": 1024 },
                            "webp": { "url": "https://cdn/p.webp", "width": 480, "height": 270, "size": 512 },
                            "mp4": { "url": "https://cdn/p.mp4", "width": 480, "height": 270, "size": 256 }
                        }
                    }
                }],
                "current_page": 2,
                "per_page": 12,
                "has_next": true
            }
        });

        let parsed: KlipyResponse = serde_json::from_value(raw).unwrap();
        assert!(parsed.result);
        assert_eq!(parsed.data.current_page, 2);
        assert!(parsed.data.has_next);
        assert_eq!(parsed.data.data[0].file.hd.gif.url, "https://cdn/p.gif");
    }
}
