//! Landing Page - start screen, sign-in selection and the hand-off to chat
//!
//! One route, three faces: the page swaps its body as the session moves through
//! `Start → Select → Guest|Login`.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use shared::flow::{Session, Step};
use shared::i18n::quote_at;
use shared::theme::Parallax;
use std::time::Duration;

use crate::components::{
    ChatHandoff, DarkModeToggle, FeatureCarousel, LandingFooter, LanguageSelect, ThemeSelect,
};
use crate::pages::select::HomeSelect;
use crate::state::ui::use_ui_context;
use crate::utils::constants::{google_auth_url, STAR_CURSOR_CLASS, START_TRANSITION_MS};
use crate::utils::url::{redirect_external, replace_url};

#[component]
pub fn LandingPage() -> impl IntoView {
    let location = use_location();
    let session = RwSignal::new(Session::from_landing_query(&location.search.get_untracked()));

    if session.with_untracked(|s| s.step == Step::Login) {
        log::info!("Returning from Google sign-in");
        replace_url("/");
    }

    let (redirecting, set_redirecting) = signal(false);

    let on_start = Callback::new(move |_: ()| {
        session.update(|s| {
            s.start();
        });
    });

    let on_google = Callback::new(move |_: ()| {
        set_redirecting.set(true);
        log::info!("Redirecting to Google sign-in");
        redirect_external(&google_auth_url());
    });

    let on_guest = Callback::new(move |_: ()| {
        session.update(|s| {
            s.continue_as_guest();
        });
    });

    move || match session.with(|s| s.step) {
        Step::Start => view! { <StartScreen on_start=on_start/> }.into_any(),
        Step::Select => view! {
            <HomeSelect on_google=on_google on_guest=on_guest loading=redirecting error=Signal::stored(None::<String>)/>
        }
        .into_any(),
        Step::Guest | Step::Login => match session.with(Session::handoff) {
            Some(handoff) => view! { <ChatHandoff handoff=handoff/> }.into_any(),
            None => ().into_any(),
        },
    }
}

#[component]
fn StartScreen(on_start: Callback<()>) -> impl IntoView {
    let ui = use_ui_context();
    let (blurring, set_blurring) = signal(false);
    let parallax = RwSignal::new(Parallax::default());
    let quote = quote_at(js_sys::Math::random());

    let mouse = window_event_listener(ev::mousemove, move |e| {
        let window = window();
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        parallax.set(Parallax::from_pointer(e.client_x().into(), e.client_y().into(), width, height));
    });

    set_star_cursor(true);
    on_cleanup(move || {
        mouse.remove();
        set_star_cursor(false);
    });

    let start = move |_| {
        if blurring.get_untracked() {
            return;
        }
        set_blurring.set(true);
        set_timeout(
            move || {
                set_blurring.set(false);
                on_start.run(());
            },
            Duration::from_millis(START_TRANSITION_MS),
        );
    };

    let texts = move || ui.lang.get().landing();

    view! {
        <div
            class="flex flex-col min-h-screen relative overflow-hidden transition-colors duration-500"
            style=move || ui.backdrop().css(parallax.get())
        >
            <div class="absolute top-5 left-5 z-20 flex gap-2">
                <ThemeSelect/>
                <LanguageSelect/>
            </div>

            <DarkModeToggle/>

            <div class="absolute left-1/2 transform -translate-x-1/2 top-8 z-10">
                <span class=move || format!(
                    "bg-gradient-to-r {} text-white text-xs font-bold px-3 py-1 rounded-full shadow",
                    ui.theme.get().gradient,
                )>"Beta"</span>
            </div>

            <div class="absolute top-14 left-0 right-0 flex flex-col items-center z-10">
                <div
                    class="text-2xl font-extrabold drop-shadow-lg tracking-wider"
                    style=move || format!("color: {}; text-shadow: 0 2px 8px #0369a1cc;", ui.theme.get().color)
                >
                    "MyKugy Ai Chat Anime"
                </div>
            </div>

            <div class="flex flex-1 items-center justify-center">
                <div class=move || format!(
                    "bg-white/30 {} rounded-3xl shadow-2xl p-8 flex flex-col items-center min-w-[320px] max-w-[94vw] w-full mx-2 border border-white/50 relative",
                    if ui.dark_mode.get() { "bg-opacity-10" } else { "backdrop-blur-2xl" },
                )>
                    <FeatureCarousel/>

                    <button
                        class=move || format!(
                            "px-16 py-4 text-2xl rounded-full font-bold bg-gradient-to-r {} shadow-xl text-white hover:scale-105 hover:shadow-2xl transition-all duration-300 focus:outline-none focus:ring-4 focus:ring-blue-200/40 animate-glow {}",
                            ui.theme.get().gradient,
                            if blurring.get() { "blur-sm" } else { "" },
                        )
                        style="letter-spacing: 2px;"
                        disabled=move || blurring.get()
                        on:click=start
                    >
                        {move || texts().start}
                    </button>

                    <Show when=move || blurring.get()>
                        <div class="absolute inset-0 bg-white/60 backdrop-blur-md rounded-3xl transition-all duration-300"></div>
                    </Show>

                    <style>{move || ui.theme.get().glow_css()}</style>

                    <div class="mt-7 mb-2 w-full flex flex-col items-center">
                        <div class="text-xs italic text-blue-900 text-center max-w-xs">
                            {format!("“{}” ", quote.text)}
                            <span class="not-italic font-bold text-blue-600">{format!("- {}", quote.author)}</span>
                        </div>
                    </div>
                </div>
            </div>

            <LandingFooter/>
        </div>
    }
}

fn set_star_cursor(enabled: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let classes = body.class_list();
    let result = if enabled {
        classes.add_1(STAR_CURSOR_CLASS)
    } else {
        classes.remove_1(STAR_CURSOR_CLASS)
    };
    if let Err(e) = result {
        log::warn!("Failed to toggle star cursor: {:?}", e);
    }
}
