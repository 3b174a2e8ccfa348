//! PostgreSQL implementation of the redirect store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::error::AppError;
use crate::store::{NewRedirect, RedirectStore};

/// PostgreSQL store for redirect records.
///
/// Issues exactly one statement per operation: an insert on the write path
/// and a single-row projected select on the read path.
pub struct PgRedirectStore {
    pool: Arc<PgPool>,
}

impl PgRedirectStore {
    /// Creates a new store backed by a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedirectStore for PgRedirectStore {
    async fn insert(&self, redirect: NewRedirect) -> Result<(), AppError> {
        sqlx::query("INSERT INTO redirects (short_code, original_url) VALUES ($1, $2)")
            .bind(&redirect.short_code)
            .bind(&redirect.original_url)
            .execute(self.pool.as_ref())
            .await?;

        tracing::debug!(code = %redirect.short_code, "redirect stored");
        Ok(())
    }

    async fn find_original_url(&self, short_code: &str) -> Result<Option<String>, AppError> {
        // No ORDER BY: which row wins for a duplicated code is unspecified.
        let url: Option<String> =
            sqlx::query_scalar("SELECT original_url FROM redirects WHERE short_code = $1 LIMIT 1")
                .bind(short_code)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(url)
    }
}
