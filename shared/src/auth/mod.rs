//! # OAuth Callback Flow
//!
//! After Google sign-in the backend redirects to `/auth/callback?token=…&email=…`.
//! [`handle_callback`] turns that query into a single [`Redirect`]:
//!
//! 1. validate `token` and `email` ([`CallbackParams::from_query`])
//! 2. persist them as one record and read it back ([`persist_and_verify`])
//! 3. look up the credit balance, best effort ([`CreditsSource`])
//! 4. go to `/menu` with the email and credits, or back to `/` with an alert
//!
//! Storage and the credit lookup are traits so the browser adapters stay in the web
//! crate and the flow is tested here against [`MemoryStore`].

mod callback;
mod credentials;
mod params;

pub use callback::{
    handle_callback, race_timeout, CreditsError, CreditsSource, Redirect, FALLBACK_CREDITS,
};
pub use credentials::{
    decode_record, encode_record, persist_and_verify, CredentialStore, MemoryStore,
    SessionCredentials, StorageError, SESSION_KEY,
};
pub use params::{CallbackError, CallbackParams};
