//! Feature Carousel Component
//! Rotating marketing lines with a progress bar, tinted with the active theme

use leptos::prelude::*;
use shared::carousel::{Carousel, ADVANCE_INTERVAL_MS, PROGRESS_INTERVAL_MS};
use std::time::Duration;

use crate::state::ui::use_ui_context;

#[component]
pub fn FeatureCarousel() -> impl IntoView {
    let ui = use_ui_context();
    let carousel = RwSignal::new(Carousel::new(ui.lang.get_untracked().landing().carousel.len()));

    let timers = StoredValue::new(Vec::<IntervalHandle>::new());
    let clear_timers = move || {
        timers.update_value(|handles| handles.drain(..).for_each(|handle| handle.clear()));
    };

    // A language switch starts over from the first line with fresh timers
    Effect::new(move |_| {
        let len = ui.lang.get().landing().carousel.len();
        clear_timers();
        carousel.update(|c| c.restart(len));

        let advance = set_interval_with_handle(
            move || carousel.update(Carousel::advance),
            Duration::from_millis(ADVANCE_INTERVAL_MS.into()),
        );
        let progress = set_interval_with_handle(
            move || carousel.update(Carousel::tick),
            Duration::from_millis(PROGRESS_INTERVAL_MS.into()),
        );
        timers.set_value([advance, progress].into_iter().flatten().collect());
    });

    // Timers only run while the landing screen is mounted
    on_cleanup(clear_timers);

    let line = move || {
        let texts = ui.lang.get().landing();
        carousel.with(|c| c.current(&texts.carousel)).unwrap_or_default()
    };

    view! {
        <div class="mb-6 w-full">
            <div
                class="text-md"
                style=move || format!("color: {}; font-weight: 700; text-align: center;", ui.theme.get().color)
            >
                {line}
            </div>
            <div class="w-full h-1 bg-blue-100 rounded-full mt-1">
                <div
                    class="h-1 rounded-full transition-all"
                    style=move || format!(
                        "width: {}%; background: {};",
                        carousel.with(|c| c.progress()),
                        ui.theme.get().color,
                    )
                ></div>
            </div>
        </div>
    }
}
