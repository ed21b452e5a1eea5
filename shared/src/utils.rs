//! # Shared Utility Functions
//!
//! Display helpers used by the browser app and by log statements.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_credits, redact};
//! use shared::Language;
//!
//! assert_eq!(redact("eyJhbGciOiJIUzI1NiJ9.payload"), "eyJhbG...");
//! assert_eq!(format_credits(75, Language::En), "75 Credits");
//! ```

use crate::i18n::Language;

const REDACT_PREFIX_LEN: usize = 6;

/// Shorten a secret for logging by keeping only its first characters.
///
/// Secrets no longer than the kept prefix are fully masked.
///
/// # Examples
///
/// ```rust
/// use shared::utils::redact;
///
/// assert_eq!(redact("abcdefghijk"), "abcdef...");
/// assert_eq!(redact("abc"), "***");
/// ```
pub fn redact(secret: &str) -> String {
    if secret.chars().count() <= REDACT_PREFIX_LEN {
        return "*".repeat(secret.chars().count());
    }

    // Char-based so a multi-byte token never splits a code point
    let prefix: String = secret.chars().take(REDACT_PREFIX_LEN).collect();
    format!("{}...", prefix)
}

/// Credit amount with the localized unit, e.g. `75 Kredit`.
pub fn format_credits(amount: u32, lang: Language) -> String {
    format!("{} {}", amount, lang.select().credits)
}
