//! GIF provider integration.

pub mod klipy;
pub mod provider;

pub use klipy::KlipyClient;
pub use provider::{Gif, GifPage, GifProvider, PER_PAGE};

#[cfg(test)]
pub use provider::MockGifProvider;
