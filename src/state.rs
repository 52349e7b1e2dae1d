//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::PageService;
use crate::infrastructure::gif::GifProvider;

/// Application-wide shared state.
///
/// Cheap to clone; all fields are reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<PageService>,
    pub gif_provider: Arc<dyn GifProvider>,
}

impl AppState {
    pub fn new(page_service: Arc<PageService>, gif_provider: Arc<dyn GifProvider>) -> Self {
        Self {
            page_service,
            gif_provider,
        }
    }
}
