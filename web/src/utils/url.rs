//! Browser URL access
//!
//! Query parsing lives in [`shared::url`]; this module only talks to the window.

use web_sys::window;

/// Rewrite the address bar without navigating
pub fn replace_url(path: &str) {
    let Some(window) = window() else {
        return;
    };
    let title = window.document().map(|d| d.title()).unwrap_or_default();
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, &title, Some(path)) {
                log::warn!("history.replaceState failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("No history available: {:?}", e),
    }
}

/// Leave the app for an absolute URL
pub fn redirect_external(url: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("Failed to redirect to {}: {:?}", url, e);
        }
    }
}

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert() failed: {:?}", e);
        }
    }
}
