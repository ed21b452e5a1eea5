//! Credit balance lookup against the MyKugy backend

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use shared::auth::{race_timeout, CreditsError, CreditsSource};
use shared::dto::{credits_url, CreditsResponse};

/// [`CreditsSource`] calling `GET {backend}/api/credits?user_email=…`.
///
/// Non-2xx statuses and bodies without an unsigned `credits` field are failures.
/// The request races a timer so a hanging backend cannot hold the callback.
pub struct HttpCreditsSource {
    base_url: String,
    timeout_ms: u32,
}

impl HttpCreditsSource {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self { base_url: base_url.into(), timeout_ms }
    }
}

impl CreditsSource for HttpCreditsSource {
    async fn fetch_credits(&self, email: &str) -> Result<u32, CreditsError> {
        let url = credits_url(&self.base_url, email);
        log::debug!("[CREDITS] GET {}", url);

        race_timeout(
            request_credits(url),
            TimeoutFuture::new(self.timeout_ms),
            self.timeout_ms,
        )
        .await
    }
}

async fn request_credits(url: String) -> Result<u32, CreditsError> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| CreditsError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(CreditsError::Status(response.status()));
    }

    let body = response
        .json::<CreditsResponse>()
        .await
        .map_err(|e| CreditsError::Decode(e.to_string()))?;

    Ok(body.credits)
}
