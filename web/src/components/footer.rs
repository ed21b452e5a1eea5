//! Landing footer

use leptos::prelude::*;

use crate::state::ui::use_ui_context;
use crate::utils::constants::{APP_VERSION, DISCORD_URL, INSTAGRAM_URL, PRIVACY_PATH};

#[component]
pub fn LandingFooter() -> impl IntoView {
    let ui = use_ui_context();
    let texts = move || ui.lang.get().landing();

    view! {
        <div class="absolute bottom-3 w-full flex flex-col items-center z-10 text-xs text-white/80">
            <div class="mb-1 flex gap-2">
                <span class="bg-blue-300/80 text-sky-800 px-2 py-0.5 rounded font-bold text-xs">
                    {move || format!("{} {}", texts().version, APP_VERSION)}
                </span>
                <span>"|"</span>
                <a href=INSTAGRAM_URL target="_blank" rel="noopener noreferrer" class="hover:text-blue-300 transition">
                    "Instagram"
                </a>
                <span>"|"</span>
                <a href=DISCORD_URL target="_blank" rel="noopener noreferrer" class="hover:text-blue-300 transition">
                    "Discord"
                </a>
            </div>
            <div>
                "Artwork by AI | "
                <a href=PRIVACY_PATH class="underline hover:text-blue-200">"Kebijakan Privasi"</a>
            </div>
            <div class="mt-1">
                {move || texts().developed}
                " " <span class="text-pink-300">"❤️"</span> " "
                {move || texts().by}
                " " <b class="text-sky-300">"Eichiro"</b>
            </div>
        </div>
    }
}
