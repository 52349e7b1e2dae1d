//! Core business entities.

pub mod page;
pub mod theme;

pub use page::{NewPage, Page, PageSummary};
pub use theme::{Theme, ThemeColors};
