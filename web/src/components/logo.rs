//! Logo with a fallback asset when the primary image fails to load

use leptos::prelude::*;

use crate::utils::constants::{FALLBACK_LOGO_SRC, LOGO_SRC};

#[component]
pub fn Logo() -> impl IntoView {
    let (failed, set_failed) = signal(false);

    view! {
        <div class="w-32 h-32 mb-4 relative">
            <img
                src=move || if failed.get() { FALLBACK_LOGO_SRC } else { LOGO_SRC }
                alt="MyKugy Logo"
                width="128"
                height="128"
                class="object-contain"
                on:error=move |_| set_failed.set(true)
            />
        </div>
    }
}
