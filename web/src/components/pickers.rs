//! Theme, language and dark mode controls

use leptos::prelude::*;
use shared::theme::THEMES;
use shared::Language;

use crate::state::ui::use_ui_context;

const PICKER_CLASS: &str = "rounded px-2 py-1 bg-white/60 text-blue-900 font-bold shadow";

#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ui = use_ui_context();

    view! {
        <select
            class=PICKER_CLASS
            prop:value=move || ui.theme.get().name
            on:change=move |ev| ui.set_theme_name(&event_target_value(&ev))
        >
            {THEMES
                .iter()
                .map(|theme| view! { <option value=theme.name>{theme.name}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn LanguageSelect() -> impl IntoView {
    let ui = use_ui_context();

    view! {
        <select
            class=PICKER_CLASS
            prop:value=move || ui.lang.get().code()
            on:change=move |ev| ui.set_language_code(&event_target_value(&ev))
        >
            {Language::ALL
                .into_iter()
                .map(|lang| view! { <option value=lang.code()>{lang.picker_label()}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ui = use_ui_context();

    view! {
        <button
            class="absolute top-5 right-5 z-20 bg-white/30 hover:bg-white/60 p-2 rounded-full shadow transition"
            title=move || if ui.dark_mode.get() { "Light Mode" } else { "Dark Mode" }
            on:click=move |_| ui.toggle_dark_mode()
        >
            {move || if ui.dark_mode.get() { "☀️" } else { "🌙" }}
        </button>
    }
}

/// Flag dropdown used on the sign-in card
#[component]
pub fn LanguageDropdown() -> impl IntoView {
    let ui = use_ui_context();
    let (open, set_open) = signal(false);

    view! {
        <div class="relative">
            <button
                class="flex items-center gap-2 px-3 py-1 rounded-md bg-white/80 backdrop-blur-sm text-blue-900 text-sm font-medium hover:bg-white/90 transition"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span
                    class="text-lg"
                    role="img"
                    aria-label=move || format!("{} Flag", ui.lang.get().english_name())
                >
                    {move || ui.lang.get().flag()}
                </span>
                {move || ui.lang.get().local_name()}
            </button>

            <Show when=move || open.get()>
                <div class="absolute top-full left-0 mt-1 w-full bg-white/95 backdrop-blur-sm rounded-md shadow-lg overflow-hidden">
                    {Language::ALL
                        .into_iter()
                        .map(|lang| {
                            view! {
                                <button
                                    class=move || format!(
                                        "w-full flex items-center gap-2 px-3 py-2 text-sm hover:bg-blue-50 transition {}",
                                        if ui.lang.get() == lang { "bg-blue-50" } else { "" },
                                    )
                                    on:click=move |_| {
                                        ui.lang.set(lang);
                                        set_open.set(false);
                                    }
                                >
                                    <span class="text-lg">{lang.flag()}</span>
                                    <span>{lang.local_name()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
