//! OAuth Callback Page - stores the issued credentials and forwards to the menu

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use shared::auth::handle_callback;

use crate::services::{BrowserSessionStore, HttpCreditsSource};
use crate::state::ui::use_ui_context;
use crate::utils::constants::{BACKEND_URL, CREDITS_TIMEOUT_MS};
use crate::utils::url::alert;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let ui = use_ui_context();
    let navigate = use_navigate();
    let query = use_location().search.get_untracked();
    let lang = ui.language();

    // Runs once per mount, i.e. once per redirect
    leptos::task::spawn_local(async move {
        let store = BrowserSessionStore::session();
        let credits = HttpCreditsSource::new(BACKEND_URL, CREDITS_TIMEOUT_MS);

        let redirect = handle_callback(&query, lang, &store, &credits).await;

        if let Some(message) = redirect.alert() {
            alert(message);
        }
        let path = redirect.to_path();
        log::info!("[AUTH CALLBACK] Navigating to {}", path);
        navigate(&path, Default::default());
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-r from-blue-500 to-indigo-600">
            <div class="text-white text-xl">"Loading..."</div>
        </div>
    }
}
