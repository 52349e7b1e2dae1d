//! Server-rendered page handlers.

pub mod home;
pub mod tenant;

pub use home::home_handler;
pub use tenant::tenant_handler;
