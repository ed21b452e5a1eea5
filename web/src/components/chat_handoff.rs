//! Hand-off panel shown where the chat screen takes over

use leptos::prelude::*;
use shared::flow::Handoff;
use shared::format_credits;
use shared::theme::Parallax;

use crate::state::ui::use_ui_context;

#[component]
pub fn ChatHandoff(handoff: Handoff) -> impl IntoView {
    let ui = use_ui_context();
    let Handoff { email, credits, guest } = handoff;

    log::info!("Entering chat: guest={} credits={}", guest, credits);

    let mode = move || {
        let texts = ui.lang.get().select();
        if guest { texts.guest_mode } else { texts.google_login }
    };

    view! {
        <div
            class="min-h-screen w-full flex items-center justify-center px-4"
            style=move || ui.backdrop().css(Parallax::default())
        >
            <div class="bg-white/95 rounded-3xl shadow-2xl px-8 py-10 w-full max-w-md flex flex-col items-center gap-3">
                <h1 class="text-2xl font-bold text-gray-800">"AI Anime Chat"</h1>
                <p class="text-sm text-gray-600">{mode}</p>
                {(!email.is_empty()).then(|| view! {
                    <p class="text-sm font-mono text-gray-700 break-all">{email.clone()}</p>
                })}
                <span class="bg-[#4785FF] text-white font-semibold px-4 py-1 rounded-full text-sm">
                    {move || format_credits(credits, ui.lang.get())}
                </span>
            </div>
        </div>
    }
}
