//! Server-rendered web layer (askama templates).

pub mod handlers;
pub mod routes;
