//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures (pages, themes)
//! - [`repositories`] - Data access trait definitions
//! - [`wizard`] - The multi-step creation wizard state machine
//! - [`subdomain`] - Host-name classification and routing decisions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository and gateway traits define contracts implemented by the
//!   infrastructure layer
//! - The subdomain resolver is pure: one function shared by every call site

pub mod entities;
pub mod repositories;
pub mod subdomain;
pub mod wizard;
