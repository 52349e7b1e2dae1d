//! Debounced, paginated GIF search.
//!
//! Coalesces rapid input into one provider call per quiet interval and keeps
//! results keyed by page number, so a page that is requested twice (or whose
//! response arrives late) replaces its slot instead of appending duplicates.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::infrastructure::gif::{Gif, GifProvider, PER_PAGE};
use crate::utils::debounce::{DEFAULT_QUIET, Debouncer};

/// User-facing message for a failed provider call.
const SEARCH_ERROR: &str = "Failed to search for GIFs";

/// Mutable search state for one interactive session.
#[derive(Debug)]
struct SearchState {
    query: String,
    pages: BTreeMap<u32, Vec<Gif>>,
    current_page: u32,
    per_page: u32,
    has_next: bool,
    in_flight: bool,
    error: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            pages: BTreeMap::new(),
            current_page: 1,
            per_page: PER_PAGE,
            has_next: false,
            in_flight: false,
            error: None,
        }
    }
}

/// Interactive GIF search session against a [`GifProvider`].
///
/// One instance per user interaction. The state lock is never held across
/// an await, so accessors stay synchronous.
pub struct GifSearchService {
    provider: Arc<dyn GifProvider>,
    debouncer: Debouncer,
    state: Mutex<SearchState>,
}

impl GifSearchService {
    /// Creates a search session with the standard 300 ms quiet interval.
    pub fn new(provider: Arc<dyn GifProvider>) -> Self {
        Self::with_quiet(provider, DEFAULT_QUIET)
    }

    /// Creates a search session with a custom debounce quiet interval.
    pub fn with_quiet(provider: Arc<dyn GifProvider>, quiet: Duration) -> Self {
        Self {
            provider,
            debouncer: Debouncer::new(quiet),
            state: Mutex::new(SearchState::default()),
        }
    }

    /// Registers new search input, waiting out the debounce interval.
    ///
    /// Only the last input of a rapid burst issues a provider call (always
    /// for page 1). Returns whether this input was the one that fired.
    pub async fn search_input(&self, query: &str) -> bool {
        {
            let mut state = self.state.lock().unwrap();
            state.query = query.to_string();
        }

        if !self.debouncer.acquire().await {
            return false;
        }

        self.search(query, 1).await;
        true
    }

    /// Searches immediately, bypassing the debounce.
    ///
    /// A blank query clears the results. Page 1 starts a fresh result set;
    /// later pages land in their numbered slot.
    pub async fn search(&self, query: &str, page: u32) {
        if query.trim().is_empty() {
            let mut state = self.state.lock().unwrap();
            *state = SearchState::default();
            return;
        }

        {
            let mut state = self.state.lock().unwrap();
            state.query = query.to_string();
            state.in_flight = true;
            state.error = None;
        }

        self.fetch(query, page).await;
    }

    /// Loads the next page, if one exists and no request is in flight.
    pub async fn load_more(&self) {
        let (query, next_page) = {
            let mut state = self.state.lock().unwrap();
            if state.in_flight || !state.has_next {
                return;
            }
            state.in_flight = true;
            state.error = None;
            (state.query.clone(), state.current_page + 1)
        };

        self.fetch(&query, next_page).await;
    }

    /// Performs the provider call; `in_flight` must already be set.
    async fn fetch(&self, query: &str, page: u32) {
        let result = self.provider.search(query, page).await;

        let mut state = self.state.lock().unwrap();
        state.in_flight = false;

        match result {
            Ok(results) => {
                if results.current_page <= 1 {
                    state.pages.clear();
                }
                state
                    .pages
                    .insert(results.current_page.max(1), results.items);
                state.current_page = results.current_page.max(1);
                state.per_page = results.per_page;
                state.has_next = results.has_next;
            }
            Err(err) => {
                tracing::warn!("gif search failed: {err}");
                state.error = Some(SEARCH_ERROR.to_string());
            }
        }
    }

    /// All loaded results, in page order.
    pub fn results(&self) -> Vec<Gif> {
        let state = self.state.lock().unwrap();
        state.pages.values().flatten().cloned().collect()
    }

    pub fn has_next(&self) -> bool {
        self.state.lock().unwrap().has_next
    }

    pub fn current_page(&self) -> u32 {
        self.state.lock().unwrap().current_page
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().unwrap().error.clone()
    }

    /// Clears query, results, and error state.
    pub fn reset(&self) {
        self.debouncer.cancel();
        let mut state = self.state.lock().unwrap();
        *state = SearchState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::infrastructure::gif::{GifPage, MockGifProvider};
    use serde_json::json;

    fn gif(slug: &str) -> Gif {
        Gif {
            slug: slug.to_string(),
            title: slug.to_string(),
            gif_url: format!("https://cdn.example.com/{slug}.gif"),
            webp_url: None,
            mp4_url: None,
            width: 480,
            height: 270,
        }
    }

    fn page_of(page: u32, slugs: &[&str], has_next: bool) -> GifPage {
        GifPage {
            items: slugs.iter().map(|s| gif(s)).collect(),
            current_page: page,
            per_page: PER_PAGE,
            has_next,
        }
    }

    #[tokio::test]
    async fn test_search_populates_first_page() {
        let mut provider = MockGifProvider::new();
        provider
            .expect_search()
            .withf(|q, p| q == "cats" && *p == 1)
            .times(1)
            .returning(|_, _| Ok(page_of(1, &["a", "b"], true)));

        let service = GifSearchService::new(Arc::new(provider));
        service.search("cats", 1).await;

        assert_eq!(service.results().len(), 2);
        assert_eq!(service.current_page(), 1);
        assert!(service.has_next());
        assert!(service.error().is_none());
    }

    #[tokio::test]
    async fn test_blank_query_clears_results() {
        let mut provider = MockGifProvider::new();
        provider
            .expect_search()
            .times(1)
            .returning(|_, _| Ok(page_of(1, &["a"], false)));

        let service = GifSearchService::new(Arc::new(provider));
        service.search("cats", 1).await;
        assert_eq!(service.results().len(), 1);

        service.search("   ", 1).await;
        assert!(service.results().is_empty());
    }

    #[tokio::test]
    async fn test_load_more_appends_next_page_in_order() {
        let mut provider = MockGifProvider::new();
        provider
            .expect_search()
            .withf(|_, p| *p == 1)
            .times(1)
            .returning(|_, _| Ok(page_of(1, &["a", "b"], true)));
        provider
            .expect_search()
            .withf(|_, p| *p == 2)
            .times(1)
            .returning(|_, _| Ok(page_of(2, &["c", "d"], false)));

        let service = GifSearchService::new(Arc::new(provider));
        service.search("cats", 1).await;
        service.load_more().await;

        let slugs: Vec<String> = service.results().into_iter().map(|g| g.slug).collect();
        assert_eq!(slugs, ["a", "b", "c", "d"]);
        assert_eq!(service.current_page(), 2);
        assert!(!service.has_next());
    }

    #[tokio::test]
    async fn test_load_more_noop_when_no_next_page() {
        let mut provider = MockGifProvider::new();
        provider
            .expect_search()
            .times(1)
            .returning(|_, _| Ok(page_of(1, &["a"], false)));

        let service = GifSearchService::new(Arc::new(provider));
        service.search("cats", 1).await;

        // has_next is false, so no second provider call happens.
        service.load_more().await;
        assert_eq!(service.results().len(), 1);
    }

    #[tokio::test]
    async fn test_rerequested_page_replaces_instead_of_appending() {
        let mut provider = MockGifProvider::new();
        provider
            .expect_search()
            .withf(|_, p| *p == 1)
            .times(1)
            .returning(|_, _| Ok(page_of(1, &["a", "b"], true)));
        provider
            .expect_search()
            .withf(|_, p| *p == 2)
            .times(2)
            .returning(|_, _| Ok(page_of(2, &["c", "d"], true)));

        let service = GifSearchService::new(Arc::new(provider));
        service.search("cats", 1).await;
        service.search("cats", 2).await;
        service.search("cats", 2).await;

        // Page 2 lands in its slot both times; nothing is duplicated.
        assert_eq!(service.results().len(), 4);
    }

    #[tokio::test]
    async fn test_new_first_page_search_resets_result_set() {
        let mut provider = MockGifProvider::new();
        provider
            .expect_search()
            .withf(|q, _| q == "cats")
            .times(1)
            .returning(|_, _| Ok(page_of(1, &["a", "b"], true)));
        provider
            .expect_search()
            .withf(|q, _| q == "dogs")
            .times(1)
            .returning(|_, _| Ok(page_of(1, &["x"], false)));

        let service = GifSearchService::new(Arc::new(provider));
        service.search("cats", 1).await;
        service.search("dogs", 1).await;

        let slugs: Vec<String> = service.results().into_iter().map(|g| g.slug).collect();
        assert_eq!(slugs, ["x"]);
    }

    #[tokio::test]
    async fn test_provider_failure_sets_user_facing_error() {
        let mut provider = MockGifProvider::new();
        provider
            .expect_search()
            .times(1)
            .returning(|_, _| Err(AppError::upstream("boom", json!({}))));

        let service = GifSearchService::new(Arc::new(provider));
        service.search("cats", 1).await;

        assert_eq!(service.error().as_deref(), Some(SEARCH_ERROR));
        assert!(service.results().is_empty());
        // The failed request no longer blocks pagination bookkeeping.
        service.load_more().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_input_debounces_rapid_keystrokes() {
        let mut provider = MockGifProvider::new();
        // Only the final keystroke's query reaches the provider.
        provider
            .expect_search()
            .withf(|q, p| q == "cat" && *p == 1)
            .times(1)
            .returning(|_, _| Ok(page_of(1, &["a"], false)));

        let service = Arc::new(GifSearchService::with_quiet(
            Arc::new(provider),
            Duration::from_millis(300),
        ));

        let mut handles = Vec::new();
        for query in ["c", "ca", "cat"] {
            let service = service.clone();
            let query = query.to_string();
            handles.push(tokio::spawn(async move {
                service.search_input(&query).await
            }));
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        tokio::time::advance(Duration::from_millis(500)).await;

        let fired: Vec<bool> = futures_join(handles).await;
        assert_eq!(fired, [false, false, true]);
        assert_eq!(service.results().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_inputs_each_fire() {
        let mut provider = MockGifProvider::new();
        provider
            .expect_search()
            .times(2)
            .returning(|_, _| Ok(page_of(1, &["a"], false)));

        let service = GifSearchService::with_quiet(Arc::new(provider), Duration::from_millis(300));

        assert!(service.search_input("cat").await);
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(service.search_input("dog").await);
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let mut provider = MockGifProvider::new();
        provider
            .expect_search()
            .times(1)
            .returning(|_, _| Ok(page_of(1, &["a"], true)));

        let service = GifSearchService::new(Arc::new(provider));
        service.search("cats", 1).await;
        service.reset();

        assert!(service.results().is_empty());
        assert!(!service.has_next());
        assert_eq!(service.current_page(), 1);
        assert!(service.error().is_none());
    }

    async fn futures_join(handles: Vec<tokio::task::JoinHandle<bool>>) -> Vec<bool> {
        let mut out = Vec::with_capacity(handles.len());
        for handle in handles {
            out.push(handle.await.unwrap());
        }
        out
    }
}
