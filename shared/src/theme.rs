//! # Themes and Backdrops
//!
//! Palettes selectable on the landing screen, and the two page backdrops (anime
//! artwork or dark gradient) toggled by dark mode.

/// Color palette applied to the title, carousel and start button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub color: &'static str,
    /// Tailwind gradient classes for badges and the start button.
    pub gradient: &'static str,
}

pub const THEMES: [Theme; 4] = [
    Theme { name: "Biru Langit", color: "#38bdf8", gradient: "from-blue-400 to-sky-400" },
    Theme { name: "Ungu", color: "#a78bfa", gradient: "from-purple-400 to-fuchsia-400" },
    Theme { name: "Pink", color: "#fb7185", gradient: "from-pink-400 to-rose-400" },
    Theme { name: "Hijau", color: "#34d399", gradient: "from-emerald-400 to-teal-300" },
];

impl Theme {
    /// Look up a theme by its display name, falling back to the first palette.
    pub fn by_name(name: &str) -> &'static Theme {
        THEMES.iter().find(|theme| theme.name == name).unwrap_or(&THEMES[0])
    }

    /// Glow rules for the start button, tinted with this palette.
    pub fn glow_css(&self) -> String {
        format!(
            ".animate-glow {{ box-shadow: 0 0 20px 3px {c}80, 0 0 40px 7px {c}60; transition: box-shadow 0.3s; }}\n\
             .animate-glow:hover {{ box-shadow: 0 0 36px 10px {c}88, 0 0 72px 12px {c}80; }}",
            c = self.color
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEMES[0]
    }
}

pub const ANIME_ARTWORK_URL: &str =
    "https://raw.githubusercontent.com/Minatoz997/angel_background.png/main/angel_background.png";
pub const DARK_GRADIENT: &str = "linear-gradient(135deg,#0f172a 40%,#172554 100%)";

/// Background offset (in percent) derived from the pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Parallax {
    pub x: f64,
    pub y: f64,
}

impl Parallax {
    const MAX_X: f64 = 12.0;
    const MAX_Y: f64 = 8.0;

    /// Map a pointer position inside a viewport to an offset of at most
    /// ±12 % horizontally and ±8 % vertically.
    pub fn from_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        let nx = ((client_x / width - 0.5) * 2.0).clamp(-1.0, 1.0);
        let ny = ((client_y / height - 0.5) * 2.0).clamp(-1.0, 1.0);
        Self { x: nx * Self::MAX_X, y: ny * Self::MAX_Y }
    }
}

/// Page background behind every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backdrop {
    #[default]
    Anime,
    Dark,
}

impl Backdrop {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Backdrop::Dark
        } else {
            Backdrop::Anime
        }
    }

    pub fn is_dark(self) -> bool {
        self == Backdrop::Dark
    }

    /// Inline style for the page container. The parallax offset only moves the
    /// artwork; the gradient ignores it.
    pub fn css(self, parallax: Parallax) -> String {
        match self {
            Backdrop::Dark => format!("background: {DARK_GRADIENT}; min-height: 100vh;"),
            Backdrop::Anime => format!(
                "background: url('{ANIME_ARTWORK_URL}') center/cover no-repeat; min-height: 100vh; \
                 background-position: {}% {}%;",
                50.0 + parallax.x,
                50.0 + parallax.y
            ),
        }
    }
}
