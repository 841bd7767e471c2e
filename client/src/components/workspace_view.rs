//! Pannable, zoomable surface the cards live on.
//!
//! SYSTEM CONTEXT
//! ==============
//! The surface owns background pan, wheel zoom, and the zoom controls. It
//! renders one transformed layer holding every visible card, so a card's
//! stored position is in workspace units and the layer's CSS transform does
//! the rest. On mobile the layer is untransformed and the controls are hidden.

use leptos::html::Div;
use leptos::prelude::*;
use spatial::geometry::Point;
use spatial::layout::LayoutController;
use spatial::manifest::Section;

use super::card_view::CardView;
use crate::state::layout::LayoutSignal;

fn client_point(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

/// Pointer position relative to the surface's top-left corner.
fn surface_point(surface: NodeRef<Div>, x: i32, y: i32) -> Point {
    let client = client_point(x, y);
    #[cfg(feature = "csr")]
    {
        if let Some(el) = surface.get_untracked() {
            let rect = el.get_bounding_client_rect();
            return Point::new(client.x - rect.left(), client.y - rect.top());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("surface {} not measured natively", surface.get_untracked().is_some());
    }
    client
}

/// The press landed on the bare background rather than on a card.
fn is_background(ev: &leptos::ev::PointerEvent, surface: NodeRef<Div>) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(el) = surface.get_untracked() else {
            return false;
        };
        let background: &web_sys::EventTarget = el.as_ref();
        ev.target().as_ref() == Some(background)
    }
    #[cfg(not(feature = "csr"))]
    {
        surface.get_untracked().is_some() && ev.target() == ev.current_target()
    }
}

#[component]
pub fn WorkspaceView() -> impl IntoView {
    let layout = expect_context::<LayoutSignal>();
    let surface = NodeRef::<Div>::new();
    let mobile = Memo::new(move |_| layout.with(LayoutController::is_mobile));
    let visible = Memo::new(move |_| {
        layout.with(|l| l.store().visible_records().iter().map(|r| r.id).collect::<Vec<Section>>())
    });

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        // Presses on cards bubble up here; only the bare background pans.
        if ev.button() != 0 || !is_background(&ev, surface) {
            return;
        }
        let pointer = client_point(ev.client_x(), ev.client_y());
        if layout.try_update(|l| l.workspace_mut().begin_pan(pointer)).unwrap_or(false) {
            ev.prevent_default();
            #[cfg(feature = "csr")]
            {
                if let Some(el) = surface.get_untracked() {
                    if let Err(err) = el.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("pointer capture refused: {err:?}");
                    }
                }
            }
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !layout.with_untracked(|l| l.workspace().is_panning()) {
            return;
        }
        let pointer = client_point(ev.client_x(), ev.client_y());
        layout.maybe_update(|l| l.workspace_mut().pan_to(pointer));
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        layout.maybe_update(|l| l.workspace_mut().end_pan());
    };

    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        if mobile.get_untracked() {
            return;
        }
        ev.prevent_default();
        let pointer = surface_point(surface, ev.client_x(), ev.client_y());
        let delta_y = ev.delta_y();
        layout.maybe_update(|l| l.workspace_mut().wheel(pointer, delta_y));
    };

    let show_grid = move || layout.with(|l| l.workspace().grid_visible() && l.workspace().is_enabled());
    let grid_style = move || {
        if !show_grid() {
            return String::new();
        }
        layout.with(|l| {
            let cell = l.workspace().grid_cell_size();
            let origin = l.workspace().background_position();
            format!("background-size: {cell}px {cell}px; background-position: {}px {}px;", origin.x, origin.y)
        })
    };
    let layer_transform = move || layout.with(|l| l.workspace().effective_transform().css());

    view! {
        <div
            class="workspace"
            class:workspace--panning=move || layout.with(|l| l.workspace().is_panning())
            class:workspace--mobile=move || mobile.get()
            class:bg-none=move || !show_grid()
            node_ref=surface
            style=grid_style
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
            on:wheel=on_wheel
        >
            <div class="workspace__layer" style:transform=layer_transform>
                <For each=move || visible.get() key=|id| *id let:id>
                    <CardView id=id />
                </For>
            </div>
        </div>
        <Show when=move || !mobile.get()>
            <ZoomControls />
        </Show>
    }
}

#[component]
fn ZoomControls() -> impl IntoView {
    let layout = expect_context::<LayoutSignal>();
    let percent = move || format!("{}%", layout.with(|l| l.workspace().zoom_percent()));
    let grid_on = move || layout.with(|l| l.workspace().grid_visible());

    view! {
        <div class="zoom-controls">
            <button
                class="zoom-controls__button"
                title="Zoom in"
                on:click=move |_| {
                    layout.maybe_update(|l| l.workspace_mut().zoom_in());
                }
            >
                "+"
            </button>
            <span class="zoom-controls__level">{percent}</span>
            <button
                class="zoom-controls__button"
                title="Zoom out"
                on:click=move |_| {
                    layout.maybe_update(|l| l.workspace_mut().zoom_out());
                }
            >
                "−"
            </button>
            <button
                class="zoom-controls__button"
                title="Reset view"
                on:click=move |_| layout.update(|l| l.workspace_mut().reset_view())
            >
                "⟲"
            </button>
            <button
                class="zoom-controls__button"
                class:zoom-controls__button--active=grid_on
                title=move || if grid_on() { "Hide grid" } else { "Show grid" }
                on:click=move |_| {
                    layout.update(|l| {
                        l.workspace_mut().toggle_grid();
                    });
                }
            >
                "#"
            </button>
        </div>
    }
}
