//! HTTP request handlers for the JSON API.

pub mod gifs;
pub mod health;
pub mod pages;

pub use gifs::gif_search_handler;
pub use health::health_handler;
pub use pages::{check_slug_handler, create_page_handler, get_page_handler};
