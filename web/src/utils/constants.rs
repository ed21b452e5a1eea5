//! Application constants
//!
//! Endpoints can be overridden at build time, e.g.
//! `MYKUGY_BACKEND_URL=http://127.0.0.1:3001 trunk build`.

pub const BACKEND_URL: &str = match option_env!("MYKUGY_BACKEND_URL") {
    Some(url) => url,
    None => "https://backend-cb98.onrender.com",
};

/// Google OAuth entry point, `{BACKEND_URL}/auth/google` unless overridden
pub fn google_auth_url() -> String {
    match option_env!("MYKUGY_GOOGLE_AUTH_URL") {
        Some(url) => url.to_string(),
        None => shared::dto::google_auth_url(BACKEND_URL),
    }
}

// UI constants
pub const START_TRANSITION_MS: u64 = 450;
pub const CREDITS_TIMEOUT_MS: u32 = 8000;

pub const APP_VERSION: &str = "v1.0.0 Beta";
pub const LOGO_SRC: &str = "/logo.png";
pub const FALLBACK_LOGO_SRC: &str = "/fallback-logo.png";
pub const STAR_CURSOR_CLASS: &str = "star-cursor";

pub const INSTAGRAM_URL: &str = "https://instagram.com/yourbrand";
pub const DISCORD_URL: &str = "https://discord.gg/yourbrand";
pub const PRIVACY_PATH: &str = "/privacy";
