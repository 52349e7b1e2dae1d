//! Outbound HTTP clients for collaborator contracts.

pub mod creation_client;

pub use creation_client::HttpCreationGateway;
