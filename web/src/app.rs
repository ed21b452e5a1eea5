//! MyKugy Front Door - Leptos App
//!
//! Routes:
//! - `/` landing, sign-in selection and guest hand-off
//! - `/auth/callback` OAuth redirect target
//! - `/menu` hand-off after a Google sign-in

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::pages::{AuthCallbackPage, LandingPage, MenuPage};
use crate::state::ui::provide_ui_context;

#[component]
pub fn App() -> impl IntoView {
    provide_ui_context();

    // Backup in case main() ran before the loading screen was in the DOM
    Effect::new(move || crate::hide_loading_screen());

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/auth/callback") view=AuthCallbackPage/>
                    <Route path=path!("/menu") view=MenuPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex justify-center items-center">
            <div class="bg-white/95 rounded-3xl shadow-2xl px-8 py-10 max-w-md text-center">
                <h1 class="text-2xl font-bold text-gray-800 mb-4">"404 - Page Not Found"</h1>
                <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="inline-block px-6 py-2 rounded-full bg-[#4785FF] text-white font-medium">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
