//! Database persistence implementations.

pub mod pg_page_repository;

pub use pg_page_repository::PgPageRepository;
