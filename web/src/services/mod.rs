//! Browser adapters for the shared auth flow

pub mod credits;
pub mod storage;

pub use credits::HttpCreditsSource;
pub use storage::BrowserSessionStore;
