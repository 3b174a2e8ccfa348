//! Redirect creation and resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::error::AppError;
use crate::store::{NewRedirect, RedirectStore};
use crate::utils::code_generator::{CODE_LENGTH, CodeGenerator};
use crate::utils::url_normalizer::ensure_scheme;

/// Attempts at generating an unused code before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for creating and resolving short redirects.
///
/// Owns the code generator and the store handle; constructed once at startup
/// and shared with request handlers through
/// [`crate::state::AppState`]. Safe for concurrent use.
pub struct RedirectService {
    store: Arc<dyn RedirectStore>,
    codegen: Arc<CodeGenerator>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(store: Arc<dyn RedirectStore>, codegen: Arc<CodeGenerator>) -> Self {
        Self { store, codegen }
    }

    /// Creates a redirect for `original_url` and returns its short code.
    ///
    /// The submitted text is persisted as-is: it is not validated as a
    /// well-formed URL, and repeated submissions of the same URL produce
    /// distinct codes rather than being deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the write fails (the code was not
    /// stored) or when code generation keeps colliding past the attempt
    /// limit.
    pub async fn create(&self, original_url: String) -> Result<String, AppError> {
        let short_code = self.generate_unused_code().await?;

        self.store
            .insert(NewRedirect {
                original_url,
                short_code: short_code.clone(),
            })
            .await?;

        tracing::info!(code = %short_code, "redirect created");
        Ok(short_code)
    }

    /// Resolves a short code to its redirect target.
    ///
    /// The stored URL gets an `http://` prefix when it lacks a scheme; the
    /// record itself is never mutated. Resolution has no side effects, so
    /// repeated calls return the same result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no record matches the code and
    /// [`AppError::Internal`] when the lookup fails.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        match self.store.find_original_url(short_code).await? {
            Some(url) => Ok(ensure_scheme(url)),
            None => Err(AppError::not_found(
                "Short link not found",
                json!({ "code": short_code }),
            )),
        }
    }

    /// Generates a code that no stored record currently uses.
    ///
    /// Best effort only: a concurrent create can still race this check, so
    /// duplicate codes remain possible and reads tolerate them.
    async fn generate_unused_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = self.codegen.generate(CODE_LENGTH);

            if self.store.find_original_url(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unused code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }
}
