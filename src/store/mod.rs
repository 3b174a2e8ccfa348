//! Redirect record storage.
//!
//! The store persists `(original_url, short_code)` pairs and resolves a code
//! back to its stored URL. Records are write-once: no update and no delete
//! operation exists.
//!
//! # Implementations
//!
//! - [`PgRedirectStore`] - PostgreSQL implementation used in production
//! - [`InMemoryRedirectStore`] - in-process implementation for tests

use crate::error::AppError;
use async_trait::async_trait;

pub mod memory;
pub mod pg;

pub use memory::InMemoryRedirectStore;
pub use pg::PgRedirectStore;

/// A redirect record to be persisted.
///
/// `original_url` is stored exactly as submitted; scheme normalization is a
/// read-time concern. `short_code` is intended to be unique but the store
/// does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRedirect {
    pub original_url: String,
    pub short_code: String,
}

/// Storage interface for redirect records.
///
/// Implementations must be safe to call concurrently from multiple request
/// tasks without caller-side synchronization.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectStore: Send + Sync {
    /// Persists a new redirect record.
    ///
    /// Does not check for an existing identical `original_url` (duplicate
    /// submissions get distinct codes) and does not reject a duplicate
    /// `short_code` at the storage level.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the write fails. The failure is
    /// surfaced to the caller; nothing was stored in that case.
    async fn insert(&self, redirect: NewRedirect) -> Result<(), AppError>;

    /// Resolves a short code to its stored original URL.
    ///
    /// Projects only the `original_url` field. Returns `Ok(None)` when no
    /// record matches. When several records share a code, whichever row the
    /// store's default ordering yields first is returned; no ordering is
    /// guaranteed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the lookup itself fails.
    async fn find_original_url(&self, short_code: &str) -> Result<Option<String>, AppError>;
}
