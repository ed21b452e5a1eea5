//! MyKugy AI Anime Chat - Browser Front Door
//!
//! Landing, sign-in selection and OAuth callback screens. The chat itself lives
//! elsewhere; this app ends by handing the visitor over with an email and a
//! credit balance.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("MyKugy front door starting (backend: {})", utils::constants::BACKEND_URL);

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen shipped in index.html
pub(crate) fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available");
        return;
    };

    let Some(loading_element) = document.get_element_by_id("leptos-loading") else {
        log::debug!("Loading element not found");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to add 'hidden' class: {:?}", e);
        }
    }

    // Also set display:none as backup
    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to hide loading element: {:?}", e);
    }
}
