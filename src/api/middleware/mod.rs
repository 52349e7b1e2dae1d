//! HTTP middleware: tenant resolution, rate limiting, request tracing.

pub mod rate_limit;
pub mod subdomain;
pub mod tracing;

pub use subdomain::{ResolvedSubdomain, resolve_tenant};
