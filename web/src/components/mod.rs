//! UI Components

pub mod carousel;
pub mod chat_handoff;
pub mod footer;
pub mod logo;
pub mod pickers;

pub use carousel::FeatureCarousel;
pub use chat_handoff::ChatHandoff;
pub use footer::LandingFooter;
pub use logo::Logo;
pub use pickers::{DarkModeToggle, LanguageDropdown, LanguageSelect, ThemeSelect};
