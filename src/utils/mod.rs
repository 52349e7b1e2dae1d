//! Utility helpers shared across the application.
//!
//! - [`debounce`] - Timer-reset-on-new-input debounce primitive

pub mod debounce;
