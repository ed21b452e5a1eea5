/// Path of the Google OAuth entry point on the backend.
pub const GOOGLE_AUTH_PATH: &str = "/auth/google";

/// Google sign-in URL served by `backend_url`.
///
/// ```rust
/// use shared::dto::google_auth_url;
///
/// assert_eq!(
///     google_auth_url("https://api.example.com"),
///     "https://api.example.com/auth/google"
/// );
/// ```
pub fn google_auth_url(backend_url: &str) -> String {
    format!("{}{}", backend_url.trim_end_matches('/'), GOOGLE_AUTH_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_auth_url_follows_backend() {
        assert_eq!(
            google_auth_url("http://127.0.0.1:3001/"),
            "http://127.0.0.1:3001/auth/google"
        );
        assert_eq!(
            google_auth_url("https://backend-cb98.onrender.com"),
            "https://backend-cb98.onrender.com/auth/google"
        );
    }
}
