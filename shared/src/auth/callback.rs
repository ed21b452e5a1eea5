use futures_util::future::{select, Either};
use std::future::Future;
use thiserror::Error;

use super::credentials::{persist_and_verify, CredentialStore};
use super::params::{CallbackError, CallbackParams};
use crate::flow::GOOGLE_CREDITS;
use crate::i18n::Language;
use crate::url::encode_component;
use crate::utils::redact;

/// Credits used when the balance lookup fails.
pub const FALLBACK_CREDITS: u32 = GOOGLE_CREDITS;

#[derive(Debug, Error)]
pub enum CreditsError {
    #[error("credits request failed: {0}")]
    Transport(String),

    #[error("credits endpoint returned status {0}")]
    Status(u16),

    #[error("credits response was malformed: {0}")]
    Decode(String),

    #[error("credits request timed out after {0} ms")]
    Timeout(u32),
}

/// Lookup of the current credit balance for an email.
#[allow(async_fn_in_trait)]
pub trait CreditsSource {
    async fn fetch_credits(&self, email: &str) -> Result<u32, CreditsError>;
}

/// Race a credit lookup against `timer`. The timer firing first is a
/// [`CreditsError::Timeout`] and drops the request.
pub async fn race_timeout<R, T>(request: R, timer: T, timeout_ms: u32) -> Result<u32, CreditsError>
where
    R: Future<Output = Result<u32, CreditsError>>,
    T: Future<Output = ()>,
{
    match select(Box::pin(request), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(CreditsError::Timeout(timeout_ms)),
    }
}

/// Where the callback sends the browser next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// Hand off to the chat menu.
    Menu { email: String, credits: u32 },
    /// Back to the landing screen after showing `alert`.
    Landing { alert: &'static str },
}

impl Redirect {
    pub fn to_path(&self) -> String {
        match self {
            Redirect::Menu { email, credits } => {
                format!("/menu?email={}&credits={}", encode_component(email), credits)
            }
            Redirect::Landing { .. } => "/".to_string(),
        }
    }

    pub fn alert(&self) -> Option<&'static str> {
        match self {
            Redirect::Landing { alert } => Some(*alert),
            Redirect::Menu { .. } => None,
        }
    }
}

/// Run the OAuth callback for one redirect.
///
/// `lang` picks the alert language. Validation and storage failures end on the
/// landing screen; a failed credit lookup only costs the real balance.
pub async fn handle_callback<S, C>(query: &str, lang: Language, store: &S, credits: &C) -> Redirect
where
    S: CredentialStore + ?Sized,
    C: CreditsSource + ?Sized,
{
    let email = match persist_callback(query, store) {
        Ok(email) => email,
        Err(e) => {
            log::error!("[AUTH CALLBACK] {}", e);
            return Redirect::Landing { alert: e.alert(lang) };
        }
    };

    let credits = match credits.fetch_credits(&email).await {
        Ok(balance) => {
            log::info!("[AUTH CALLBACK] Credits for {}: {}", email, balance);
            balance
        }
        Err(e) => {
            log::warn!("[AUTH CALLBACK] Credit lookup failed, using {}: {}", FALLBACK_CREDITS, e);
            FALLBACK_CREDITS
        }
    };

    Redirect::Menu { email, credits }
}

fn persist_callback<S>(query: &str, store: &S) -> Result<String, CallbackError>
where
    S: CredentialStore + ?Sized,
{
    let params = CallbackParams::from_query(query)?;
    log::info!(
        "[AUTH CALLBACK] token={} email={}",
        redact(&params.token),
        params.email
    );

    let credentials = params.into_credentials();
    persist_and_verify(store, &credentials)?;
    Ok(credentials.email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemoryStore, SessionCredentials};
    use std::cell::Cell;
    use std::time::Duration;

    const TEST_TIMEOUT_MS: u32 = 20;

    enum Backend {
        Balance(u32),
        Unreachable,
        NotJson,
        Hanging,
    }

    struct FakeCredits {
        backend: Backend,
        calls: Cell<usize>,
    }

    impl FakeCredits {
        fn new(backend: Backend) -> Self {
            Self { backend, calls: Cell::new(0) }
        }
    }

    impl CreditsSource for FakeCredits {
        async fn fetch_credits(&self, _email: &str) -> Result<u32, CreditsError> {
            self.calls.set(self.calls.get() + 1);
            match self.backend {
                Backend::Balance(n) => Ok(n),
                Backend::Unreachable => Err(CreditsError::Transport("connection refused".to_string())),
                Backend::NotJson => Err(CreditsError::Decode("expected value at line 1".to_string())),
                Backend::Hanging => {
                    race_timeout(
                        std::future::pending(),
                        tokio::time::sleep(Duration::from_millis(TEST_TIMEOUT_MS.into())),
                        TEST_TIMEOUT_MS,
                    )
                    .await
                }
            }
        }
    }

    #[tokio::test]
    async fn test_success_uses_fetched_credits() {
        let store = MemoryStore::new();
        let backend = FakeCredits::new(Backend::Balance(40));

        let redirect = handle_callback("?token=abc&email=a@b.com", Language::Id, &store, &backend).await;

        assert_eq!(redirect.to_path(), "/menu?email=a%40b.com&credits=40");
        assert_eq!(redirect.alert(), None);
        assert_eq!(
            store.load().unwrap(),
            Some(SessionCredentials { token: "abc".to_string(), email: "a@b.com".to_string() })
        );
        assert_eq!(backend.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_backend_falls_back() {
        let store = MemoryStore::new();
        let backend = FakeCredits::new(Backend::Unreachable);

        let redirect = handle_callback("?token=abc&email=a@b.com", Language::Id, &store, &backend).await;

        assert_eq!(redirect.to_path(), "/menu?email=a%40b.com&credits=75");
        assert!(store.raw().is_some());
    }

    #[tokio::test]
    async fn test_non_json_body_falls_back() {
        let store = MemoryStore::new();
        let backend = FakeCredits::new(Backend::NotJson);

        let redirect = handle_callback("token=t&email=x%2By%40b.com", Language::En, &store, &backend).await;

        assert_eq!(
            redirect,
            Redirect::Menu { email: "x+y@b.com".to_string(), credits: FALLBACK_CREDITS }
        );
    }

    #[tokio::test]
    async fn test_race_timeout_prefers_finished_request() {
        let result = race_timeout(
            async { Ok(40) },
            tokio::time::sleep(Duration::from_secs(60)),
            60_000,
        )
        .await;
        assert_eq!(result.unwrap(), 40);
    }

    #[tokio::test]
    async fn test_race_timeout_fires_on_hanging_request() {
        let result = race_timeout(
            std::future::pending(),
            tokio::time::sleep(Duration::from_millis(10)),
            10,
        )
        .await;
        assert!(matches!(result, Err(CreditsError::Timeout(10))));
    }

    #[tokio::test]
    async fn test_hanging_backend_falls_back() {
        let store = MemoryStore::new();
        let backend = FakeCredits::new(Backend::Hanging);

        let redirect = handle_callback("?token=abc&email=a@b.com", Language::Id, &store, &backend).await;

        assert_eq!(redirect.to_path(), "/menu?email=a%40b.com&credits=75");
        assert_eq!(backend.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_zero_balance_is_kept() {
        let store = MemoryStore::new();
        let backend = FakeCredits::new(Backend::Balance(0));

        let redirect = handle_callback("?token=abc&email=a@b.com", Language::En, &store, &backend).await;

        assert_eq!(redirect.to_path(), "/menu?email=a%40b.com&credits=0");
    }

    #[tokio::test]
    async fn test_missing_email_alerts_and_never_writes() {
        let store = MemoryStore::new();
        let backend = FakeCredits::new(Backend::Balance(40));

        let redirect = handle_callback("?token=abc", Language::En, &store, &backend).await;

        assert_eq!(redirect.to_path(), "/");
        assert_eq!(redirect.alert(), Some("Invalid login data. Please try again."));
        assert_eq!(store.write_count(), 0);
        assert_eq!(backend.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_malformed_params_never_write() {
        for query in ["", "?email=a@b.com", "?token=a&token=b&email=a@b.com", "?token=abc&email=%FF"] {
            let store = MemoryStore::new();
            let backend = FakeCredits::new(Backend::Balance(40));

            let redirect = handle_callback(query, Language::Jp, &store, &backend).await;

            assert_eq!(redirect.to_path(), "/", "query {query:?}");
            assert_eq!(store.write_count(), 0, "query {query:?}");
        }
    }

    #[tokio::test]
    async fn test_empty_token_is_a_storage_failure() {
        let store = MemoryStore::new();
        let backend = FakeCredits::new(Backend::Balance(40));

        let redirect = handle_callback("?token=&email=a@b.com", Language::En, &store, &backend).await;

        assert_eq!(redirect.to_path(), "/");
        assert_eq!(redirect.alert(), Some(Language::En.alerts().login_failed));
        assert_eq!(store.write_count(), 1);
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(backend.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_skips_credit_fetch() {
        let store = MemoryStore::failing();
        let backend = FakeCredits::new(Backend::Balance(40));

        let redirect = handle_callback("?token=abc&email=a@b.com", Language::Id, &store, &backend).await;

        assert_eq!(redirect.to_path(), "/");
        assert_eq!(redirect.alert(), Some("Terjadi kesalahan saat login. Silakan coba lagi."));
        assert_eq!(backend.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_lost_write_is_a_storage_failure() {
        let store = MemoryStore::discarding();
        let backend = FakeCredits::new(Backend::Balance(40));

        let redirect = handle_callback("?token=abc&email=a@b.com", Language::En, &store, &backend).await;

        assert_eq!(redirect.alert(), Some("Error during login. Please try again."));
        assert_eq!(store.write_count(), 1);
        assert_eq!(backend.calls.get(), 0);
    }
}
