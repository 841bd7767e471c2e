//! Light/dark switch pinned to the corner of the page.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            title="Toggle dark mode"
            on:click=move |_| {
                let current = ui.with_untracked(|u| u.dark_mode);
                let next = dark_mode::toggle(current);
                ui.update(|u| u.dark_mode = next);
            }
        >
            {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
        </button>
    }
}
