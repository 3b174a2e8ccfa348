//! In-memory implementation of the redirect store.
//!
//! Used by tests in place of PostgreSQL. Matches the persistence semantics of
//! [`crate::store::PgRedirectStore`]: write-once records, no uniqueness
//! enforcement, first matching record wins on lookup.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::AppError;
use crate::store::{NewRedirect, RedirectStore};

/// Redirect store keeping records in a vector, in insertion order.
#[derive(Default)]
pub struct InMemoryRedirectStore {
    records: RwLock<Vec<NewRedirect>>,
}

impl InMemoryRedirectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().expect("redirect store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RedirectStore for InMemoryRedirectStore {
    async fn insert(&self, redirect: NewRedirect) -> Result<(), AppError> {
        self.records
            .write()
            .expect("redirect store lock poisoned")
            .push(redirect);
        Ok(())
    }

    async fn find_original_url(&self, short_code: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .records
            .read()
            .expect("redirect store lock poisoned")
            .iter()
            .find(|r| r.short_code == short_code)
            .map(|r| r.original_url.clone()))
    }
}
