//! Sign-in Selection - Google or guest entry

use leptos::prelude::*;
use shared::flow::{GOOGLE_CREDITS, GUEST_ADVERTISED_CREDITS};
use shared::format_credits;
use shared::theme::Parallax;

use crate::components::{LanguageDropdown, Logo};
use crate::state::ui::use_ui_context;

#[component]
pub fn HomeSelect(
    on_google: Callback<()>,
    on_guest: Callback<()>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let ui = use_ui_context();
    // Card theme is local to this screen
    let (dark, set_dark) = signal(ui.dark_mode.get_untracked());

    let texts = move || ui.lang.get().select();
    let muted = move || if dark.get() { "text-gray-200" } else { "text-gray-600" };

    view! {
        <div class="min-h-screen w-full" style=move || ui.backdrop().css(Parallax::default())>
            <div class="fixed top-4 left-4 flex gap-2 z-10">
                <button
                    class="px-3 py-1 rounded-md bg-white/80 backdrop-blur-sm text-blue-900 text-sm font-medium hover:bg-white/90 transition"
                    on:click=move |_| set_dark.update(|d| *d = !*d)
                >
                    {move || if dark.get() { "Mode Gelap" } else { "Biru Langit" }}
                </button>
                <LanguageDropdown/>
            </div>

            <div class="h-screen flex items-center justify-center px-4">
                <div class=move || format!(
                    "{} rounded-3xl shadow-2xl px-8 py-10 w-full max-w-md flex flex-col items-center relative backdrop-blur-md",
                    if dark.get() { "bg-gray-800/95 text-white" } else { "bg-white/95" },
                )>
                    <div class="absolute -top-3 left-1/2 -translate-x-1/2 z-10">
                        <span class="bg-[#4785FF] text-white font-medium px-4 py-1 rounded-full text-xs">
                            "MyKugy Beta"
                        </span>
                    </div>

                    <Logo/>

                    <h1 class=move || format!(
                        "text-2xl font-bold mb-1 {}",
                        if dark.get() { "text-white" } else { "text-gray-800" },
                    )>"AI Anime Chat"</h1>
                    <p class=move || format!(
                        "text-sm mb-8 {}",
                        if dark.get() { "text-gray-300" } else { "text-gray-600" },
                    )>"MyKugy"</p>

                    {move || error.get().map(|err| view! {
                        <div class="w-full mb-4 p-3 bg-red-100 dark:bg-red-900/30 rounded-lg">
                            <p class="text-red-600 dark:text-red-400 text-sm text-center">{err}</p>
                        </div>
                    })}

                    <button
                        class="w-full py-3 mb-3 rounded-lg font-medium bg-[#4785FF] text-white hover:opacity-90 transition disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || loading.get()
                        on:click=move |_| on_google.run(())
                    >
                        {move || if loading.get() { texts().loading } else { texts().sign_in_google }}
                    </button>
                    <button
                        class="w-full py-3 rounded-lg font-medium border-2 border-gray-400 text-gray-600 hover:bg-gray-50 transition disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || loading.get()
                        on:click=move |_| on_guest.run(())
                    >
                        {move || if loading.get() { texts().loading } else { texts().start_as_guest }}
                    </button>

                    <div class="mt-6 flex flex-col items-center gap-2 p-4 rounded-lg bg-gray-50 dark:bg-gray-700/30 w-full">
                        <div class="flex items-center gap-2 text-sm w-full">
                            <span class="flex items-center justify-center w-5 h-5 rounded-full bg-[#4785FF] text-white font-bold text-xs">"G"</span>
                            <span class=muted>
                                {move || texts().google_login}
                                <span class="font-semibold ml-1">
                                    {move || format_credits(GOOGLE_CREDITS, ui.lang.get())}
                                </span>
                            </span>
                        </div>
                        <div class="flex items-center gap-2 text-sm w-full">
                            <span class="flex items-center justify-center w-5 h-5 rounded-full bg-gray-400 text-white font-bold text-xs">"T"</span>
                            <span class=muted>
                                {move || texts().guest_mode}
                                <span class="font-semibold ml-1">
                                    {move || format_credits(GUEST_ADVERTISED_CREDITS, ui.lang.get())}
                                </span>
                            </span>
                        </div>
                    </div>

                    <div class=move || format!(
                        "mt-8 text-center text-xs {}",
                        if dark.get() { "text-gray-400" } else { "text-gray-500" },
                    )>
                        <p>{move || texts().made_with}</p>
                        <p class="mt-1">"© 2024 MyKugy - v1.0.0 Beta"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
