use serde::{Deserialize, Serialize};

use crate::url::encode_component;

/// Path of the credit balance endpoint on the backend.
pub const CREDITS_PATH: &str = "/api/credits";

/// Credit balance response
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreditsResponse {
    pub credits: u32,
}

/// Full URL of the credit lookup for `email` on `backend_url`.
///
/// ```rust
/// use shared::dto::credits_url;
///
/// assert_eq!(
///     credits_url("https://api.example.com/", "a@b.com"),
///     "https://api.example.com/api/credits?user_email=a%40b.com"
/// );
/// ```
pub fn credits_url(backend_url: &str, email: &str) -> String {
    format!(
        "{}{}?user_email={}",
        backend_url.trim_end_matches('/'),
        CREDITS_PATH,
        encode_component(email)
    )
}
