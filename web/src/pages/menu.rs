//! Menu route - where the auth callback lands before the chat takes over

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use shared::flow::Handoff;

use crate::components::ChatHandoff;

#[component]
pub fn MenuPage() -> impl IntoView {
    let location = use_location();

    move || {
        let handoff = Handoff::from_menu_query(&location.search.get());
        view! { <ChatHandoff handoff=handoff/> }
    }
}
