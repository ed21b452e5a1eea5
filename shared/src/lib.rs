//! # MyKugy Shared Library
//!
//! Target-agnostic domain logic for the MyKugy AI Anime Chat front door. Everything in
//! here compiles natively and to `wasm32`, so the browser app stays a thin layer of
//! Leptos views over types that are unit-tested without a browser.
//!
//! ## Structure
//!
//! - **[`auth`]**: OAuth callback flow
//!   - **[`auth::CallbackParams`]**: validated `token`/`email` pair from the redirect
//!   - **[`auth::CredentialStore`]**: single-record credential persistence seam
//!   - **[`auth::CreditsSource`]**: credit balance lookup seam
//!   - **[`auth::handle_callback`]**: validate, persist, fetch, redirect
//! - **[`dto`]**: wire types exchanged with the credits backend
//! - **[`flow`]**: the `start → select → guest|login` step machine and credit constants
//! - **[`carousel`]**: feature carousel and progress bar timing model
//! - **[`i18n`]**: supported languages and every localized string
//! - **[`theme`]**: color palettes and page backdrops
//! - **[`url`]**: query string parsing and encoding
//! - **[`utils`]**: display helpers
//!
//! ## Usage in the browser app
//!
//! ```rust,no_run
//! use shared::auth::{handle_callback, MemoryStore, CreditsSource, CreditsError};
//! use shared::i18n::Language;
//!
//! struct Offline;
//!
//! impl CreditsSource for Offline {
//!     async fn fetch_credits(&self, _email: &str) -> Result<u32, CreditsError> {
//!         Err(CreditsError::Transport("offline".to_string()))
//!     }
//! }
//!
//! # async fn run() {
//! let store = MemoryStore::new();
//! let redirect = handle_callback("?token=abc&email=a@b.com", Language::En, &store, &Offline).await;
//! assert_eq!(redirect.to_path(), "/menu?email=a%40b.com&credits=75");
//! # }
//! ```

pub mod auth;
pub mod carousel;
pub mod dto;
pub mod flow;
pub mod i18n;
pub mod theme;
pub mod url;
pub mod utils;

pub use dto::*;
pub use i18n::Language;
pub use utils::*;
