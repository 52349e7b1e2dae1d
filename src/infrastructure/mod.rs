//! Infrastructure layer: database, GIF provider, and outbound HTTP clients.
//!
//! Implements the traits defined by the domain layer against concrete
//! backends:
//!
//! - [`persistence`] - PostgreSQL repositories
//! - [`gif`] - Klipy GIF search client (with demo fallback)
//! - [`http`] - HTTP creation gateway for out-of-process wizard frontends

pub mod gif;
pub mod http;
pub mod persistence;
