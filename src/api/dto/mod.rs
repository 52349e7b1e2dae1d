//! Request and response types for the JSON API.

pub mod gifs;
pub mod health;
pub mod pages;

pub use gifs::{GifSearchParams, GifSearchResponse};
pub use health::{CheckStatus, HealthChecks, HealthResponse};
pub use pages::{AvailabilityResponse, CreatePageRequest, CreatePageResponse, PageResponse};
