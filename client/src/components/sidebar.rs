//! Section navigation: an icon rail on desktop, a drawer on mobile.

use leptos::prelude::*;
use spatial::layout::{LayoutController, SelectPolicy};
use spatial::manifest::Section;

use crate::state::layout::{LayoutSignal, apply};
use crate::state::ui::{UiState, nav_icon, nav_label};

#[component]
pub fn Sidebar() -> impl IntoView {
    let layout = expect_context::<LayoutSignal>();
    let ui = expect_context::<RwSignal<UiState>>();
    let mobile = Memo::new(move |_| layout.with(LayoutController::is_mobile));

    view! {
        <Show
            when=move || mobile.get()
            fallback=move || {
                view! {
                    <nav class="sidebar">
                        <NavItems />
                    </nav>
                }
            }
        >
            <button
                class="sidebar__menu-toggle"
                attr:aria-label=move || ui.with(UiState::menu_button_label)
                on:click=move |_| ui.update(UiState::toggle_menu)
            >
                {move || if ui.with(|u| u.menu_open) { "✕" } else { "☰" }}
            </button>
            <Show when=move || ui.with(|u| u.menu_open)>
                <nav class="sidebar sidebar--drawer">
                    <NavItems />
                </nav>
            </Show>
        </Show>
    }
}

#[component]
fn NavItems() -> impl IntoView {
    let layout = expect_context::<LayoutSignal>();
    let ui = expect_context::<RwSignal<UiState>>();

    Section::ALL
        .into_iter()
        .map(|section| {
            let open = move || layout.with(|l| l.store().get(section).is_some_and(|r| r.visible));
            // The "Close" wording only fits when clicking an open card closes it.
            let label = move || {
                let toggles = layout.with(|l| l.select_policy() == SelectPolicy::Toggle);
                nav_label(section, open() && toggles)
            };
            let on_click = move |_| {
                apply(layout, move |l| l.select_card_key(section.key()));
                let is_mobile = layout.with_untracked(LayoutController::is_mobile);
                ui.update(|u| u.after_navigation(is_mobile));
            };
            view! {
                <button
                    class="sidebar__item"
                    class:sidebar__item--active=open
                    title=label
                    attr:aria-label=label
                    on:click=on_click
                >
                    <span class="sidebar__icon">{nav_icon(section)}</span>
                    <span class="sidebar__label">{label}</span>
                </button>
            }
        })
        .collect_view()
}
