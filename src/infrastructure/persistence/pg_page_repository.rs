//! PostgreSQL implementation of the page repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPage, Page};
use crate::domain::repositories::PageRepository;
use crate::error::AppError;

/// PostgreSQL repository for flashpage storage and retrieval.
///
/// Slug uniqueness rests on the `pages_pkey` constraint; a duplicate insert
/// surfaces as [`AppError::Conflict`] through the sqlx error mapping.
pub struct PgPageRepository {
    pool: Arc<PgPool>,
}

impl PgPageRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageRepository for PgPageRepository {
    async fn create(&self, new_page: NewPage) -> Result<Page, AppError> {
        let page = sqlx::query_as::<_, Page>(
            r#"
            INSERT INTO pages (slug, title, content, gif_url, theme, is_dark_mode)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING slug, title, content, gif_url, theme, is_dark_mode, created_at, views
            "#,
        )
        .bind(&new_page.slug)
        .bind(&new_page.title)
        .bind(&new_page.content)
        .bind(&new_page.gif_url)
        .bind(new_page.theme)
        .bind(new_page.is_dark_mode)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(page)
    }

    async fn slug_taken(&self, slug: &str) -> Result<bool, AppError> {
        let taken = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM pages WHERE slug = $1)"#,
        )
        .bind(slug)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(taken)
    }

    async fn record_view(&self, slug: &str) -> Result<Option<Page>, AppError> {
        let page = sqlx::query_as::<_, Page>(
            r#"
            UPDATE pages
            SET views = views + 1
            WHERE slug = $1
            RETURNING slug, title, content, gif_url, theme, is_dark_mode, created_at, views
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(page)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM pages"#)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
