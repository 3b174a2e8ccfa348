//! Read-time URL scheme normalization.
//!
//! Submitted URLs are stored exactly as received; the scheme prefix is added
//! only when a redirect target is resolved, so stored records never change.

/// Prefixes `http://` when the URL does not already start with `http://` or
/// `https://`. Already-prefixed URLs pass through unchanged.
///
/// The check is case-sensitive and no well-formedness validation is applied;
/// whatever was submitted is what gets redirected to.
pub fn ensure_scheme(url: String) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url
    } else {
        format!("http://{url}")
    }
}
