//! Business logic services.

pub mod gif_service;
pub mod page_service;

pub use gif_service::GifSearchService;
pub use page_service::PageService;
