//! The creation wizard: an ordered, validated multi-step form flow that
//! produces exactly one create request per attempt.
//!
//! # Flow
//!
//! `Basic(0) → Content(1) → Visuals(2) → Preview(3)`, linear, no skipping
//! forward. Forward navigation is gated on the current step's validation
//! predicate; backward navigation and jumps to already-visited steps are
//! always allowed.
//!
//! # Modules
//!
//! - [`steps`] - Static step catalog and the per-step validation table
//! - [`session`] - [`WizardSession`], the owned mutable session state
//! - [`gateway`] - [`CreationGateway`], the seam to the persistence collaborator

pub mod gateway;
pub mod session;
pub mod steps;

pub use gateway::CreationGateway;
pub use session::{WizardFormData, WizardSession};
pub use steps::{STEPS, WizardStep, validate_step};

#[cfg(test)]
pub use gateway::MockCreationGateway;
