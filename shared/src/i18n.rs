//! # Languages and Localized Copy
//!
//! All user-facing strings live here, keyed by [`Language`]. The landing screen,
//! the selection screen and the callback alerts each get their own table so a view
//! only borrows what it renders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported UI languages. Indonesian is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Id,
    En,
    Jp,
}

impl Language {
    /// Display order used by both language pickers.
    pub const ALL: [Language; 3] = [Language::Id, Language::En, Language::Jp];

    pub fn code(self) -> &'static str {
        match self {
            Language::Id => "id",
            Language::En => "en",
            Language::Jp => "jp",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "id" => Some(Language::Id),
            "en" => Some(Language::En),
            "jp" => Some(Language::Jp),
            _ => None,
        }
    }

    /// Flag shown by the selection screen dropdown.
    pub fn flag(self) -> &'static str {
        match self {
            Language::Id => "🇮🇩",
            Language::En => "🇺🇸",
            Language::Jp => "🇯🇵",
        }
    }

    /// Name of the language in the language itself.
    pub fn local_name(self) -> &'static str {
        match self {
            Language::Id => "Indonesia",
            Language::En => "English",
            Language::Jp => "日本語",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Language::Id => "Indonesian",
            Language::En => "English",
            Language::Jp => "Japanese",
        }
    }

    /// Option label of the landing screen `<select>`.
    pub fn picker_label(self) -> &'static str {
        match self {
            Language::Id => "🇮🇩 Indonesia",
            Language::En => "🇬🇧 English",
            Language::Jp => "🇯🇵 日本語",
        }
    }

    pub fn landing(self) -> &'static LandingTexts {
        match self {
            Language::Id => &LANDING_ID,
            Language::En => &LANDING_EN,
            Language::Jp => &LANDING_JP,
        }
    }

    pub fn select(self) -> &'static SelectTexts {
        match self {
            Language::Id => &SELECT_ID,
            Language::En => &SELECT_EN,
            Language::Jp => &SELECT_JP,
        }
    }

    pub fn alerts(self) -> &'static AlertTexts {
        match self {
            Language::Id => &ALERTS_ID,
            Language::En => &ALERTS_EN,
            Language::Jp => &ALERTS_JP,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Copy of the landing (start) screen.
#[derive(Debug)]
pub struct LandingTexts {
    pub start: &'static str,
    pub carousel: [&'static str; 4],
    pub developed: &'static str,
    pub by: &'static str,
    pub version: &'static str,
}

/// Copy of the sign-in selection screen.
#[derive(Debug)]
pub struct SelectTexts {
    pub sign_in_google: &'static str,
    pub start_as_guest: &'static str,
    pub loading: &'static str,
    pub google_login: &'static str,
    pub guest_mode: &'static str,
    pub credits: &'static str,
    pub made_with: &'static str,
}

/// Blocking alerts raised by the auth callback.
#[derive(Debug)]
pub struct AlertTexts {
    /// Redirect parameters were missing or malformed.
    pub invalid_login: &'static str,
    /// Credentials could not be persisted.
    pub login_failed: &'static str,
}

static LANDING_ID: LandingTexts = LandingTexts {
    start: "Mulai",
    carousel: [
        "🎁 Gratis 75 Kredit untuk Pengguna Baru!",
        "🚀 Login dengan Google atau Sebagai Tamu",
        "💬 Chat AI Karakter Anime 24/7",
        "✨ Privasi Aman & Tampilan Premium",
    ],
    developed: "Dikembangkan dengan",
    by: "oleh",
    version: "Versi",
};

static LANDING_EN: LandingTexts = LandingTexts {
    start: "Start",
    carousel: [
        "🎁 75 Free Credits for New Users!",
        "🚀 Login with Google or as Guest",
        "💬 Chat with Anime AI 24/7",
        "✨ Secure Privacy & Premium Appearance",
    ],
    developed: "Developed with",
    by: "by",
    version: "Version",
};

static LANDING_JP: LandingTexts = LandingTexts {
    start: "スタート",
    carousel: [
        "🎁 新規ユーザーに75クレジット無料！",
        "🚀 Googleでログインまたはゲスト利用",
        "💬 24時間アニメAIチャット",
        "✨ 安全なプライバシー＆プレミアムデザイン",
    ],
    developed: "開発：",
    by: "",
    version: "バージョン",
};

static SELECT_ID: SelectTexts = SelectTexts {
    sign_in_google: "Daftar dengan Google",
    start_as_guest: "Mulai Sebagai Tamu",
    loading: "Memuat...",
    google_login: "Login Google",
    guest_mode: "Mode Tamu",
    credits: "Kredit",
    made_with: "Dibuat dengan ❤️ oleh MyKugy Team",
};

static SELECT_EN: SelectTexts = SelectTexts {
    sign_in_google: "Sign in with Google",
    start_as_guest: "Start as Guest",
    loading: "Loading...",
    google_login: "Google Login",
    guest_mode: "Guest Mode",
    credits: "Credits",
    made_with: "Made with ❤️ by MyKugy Team",
};

static SELECT_JP: SelectTexts = SelectTexts {
    sign_in_google: "Google でログイン",
    start_as_guest: "ゲストとして始める",
    loading: "読み込み中...",
    google_login: "Googleログイン",
    guest_mode: "ゲストモード",
    credits: "クレジット",
    made_with: "MyKugy Team により愛を込めて制作",
};

static ALERTS_ID: AlertTexts = AlertTexts {
    invalid_login: "Data login tidak valid. Silakan coba lagi.",
    login_failed: "Terjadi kesalahan saat login. Silakan coba lagi.",
};

static ALERTS_EN: AlertTexts = AlertTexts {
    invalid_login: "Invalid login data. Please try again.",
    login_failed: "Error during login. Please try again.",
};

static ALERTS_JP: AlertTexts = AlertTexts {
    invalid_login: "無効なログインデータです。もう一度お試しください。",
    login_failed: "ログイン中にエラーが発生しました。もう一度お試しください。",
};

/// An inspirational anime quote shown under the start button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const ANIME_QUOTES: [Quote; 7] = [
    Quote { text: "Impian itu bukan untuk dikejar, tapi untuk diwujudkan.", author: "One Piece" },
    Quote { text: "Tidak apa-apa untuk menangis, tapi bangkitlah setelahnya.", author: "Naruto" },
    Quote {
        text: "Hidup ini seperti pensil yang pasti akan habis, tapi meninggalkan tulisan indah.",
        author: "Natsume Yuujinchou",
    },
    Quote { text: "Jangan remehkan kekuatan impian.", author: "Haikyuu!!" },
    Quote { text: "Setiap orang punya waktu yang berharga.", author: "Your Name" },
    Quote {
        text: "Jika kamu tidak mencoba, kamu tidak akan pernah tahu hasilnya.",
        author: "Kuroko no Basket",
    },
    Quote { text: "Dunia ini kejam, tapi juga sangat indah.", author: "Attack on Titan" },
];

/// Pick a quote from a uniform sample in `[0, 1)`, e.g. `Math.random()`.
///
/// Out-of-range samples are clamped, so this never panics.
pub fn quote_at(sample: f64) -> &'static Quote {
    let sample = if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.0 };
    let idx = ((sample * ANIME_QUOTES.len() as f64) as usize).min(ANIME_QUOTES.len() - 1);
    &ANIME_QUOTES[idx]
}
