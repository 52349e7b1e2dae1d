//! Data access trait definitions.

pub mod page_repository;

pub use page_repository::PageRepository;

#[cfg(test)]
pub use page_repository::MockPageRepository;
