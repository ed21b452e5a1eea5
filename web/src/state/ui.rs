//! UI preference state
//!
//! Language, color theme and dark mode. Held in memory only; a reload starts over
//! with the defaults.

use leptos::prelude::*;
use shared::theme::{Backdrop, Theme};
use shared::Language;

/// Global UI context
#[derive(Clone, Copy)]
pub struct UiContext {
    pub lang: RwSignal<Language>,
    pub theme: RwSignal<Theme>,
    pub dark_mode: RwSignal<bool>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            lang: RwSignal::new(Language::default()),
            theme: RwSignal::new(Theme::default()),
            dark_mode: RwSignal::new(false),
        }
    }

    /// Current language without subscribing to changes
    pub fn language(&self) -> Language {
        self.lang.get_untracked()
    }

    /// Select a language by code; unknown codes are ignored.
    pub fn set_language_code(&self, code: &str) {
        match Language::from_code(code) {
            Some(lang) => self.lang.set(lang),
            None => log::warn!("Ignoring unknown language code {:?}", code),
        }
    }

    pub fn set_theme_name(&self, name: &str) {
        self.theme.set(*Theme::by_name(name));
    }

    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|dark| *dark = !*dark);
    }

    pub fn backdrop(&self) -> Backdrop {
        Backdrop::from_dark_mode(self.dark_mode.get())
    }
}

pub fn provide_ui_context() -> UiContext {
    let context = UiContext::new();
    provide_context(context);
    context
}

pub fn use_ui_context() -> UiContext {
    expect_context::<UiContext>()
}
