//! A draggable, resizable card on the workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each visible `CardRecord` renders as one `CardView`. The committed
//! geometry comes from the layout controller; while a gesture is running the
//! card draws from its own `CardInteraction` frame instead and only writes
//! back on release.
//!
//! DESIGN
//! ======
//! Pointer tracking runs on window listeners so a fast drag that outruns the
//! title bar keeps going. The listeners live exactly as long as the gesture
//! (pointer-up, pointer-cancel, window blur) or the component, whichever
//! ends first. Resize commits land one tick after release so the final
//! pointer frame has been painted before the store changes underneath it.

use leptos::prelude::*;
use spatial::card::{CardCommit, CardInteraction};
use spatial::geometry::{Point, ResizeCorner};
use spatial::layout::LayoutController;
use spatial::manifest::Section;

use super::sections::section_content;
use crate::state::layout::{LayoutSignal, apply};
#[cfg(feature = "csr")]
use crate::util::listener::GestureListeners;
use crate::util::timer::defer;

fn client_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[component]
pub fn CardView(id: Section) -> impl IntoView {
    let layout = expect_context::<LayoutSignal>();
    let record = Memo::new(move |_| layout.with(|l| l.store().get(id).cloned()));
    let mobile = Memo::new(move |_| layout.with(LayoutController::is_mobile));

    let Some(initial) = record.get_untracked() else {
        log::warn!("card view for {id:?} has no record");
        return ().into_any();
    };
    let interaction = RwSignal::new(CardInteraction::new(&initial));

    Effect::new(move || {
        let mobile = mobile.get();
        let Some(record) = record.get() else {
            return;
        };
        interaction.update(|i| {
            i.set_mobile(mobile);
            i.sync(&record);
        });
    });

    #[cfg(feature = "csr")]
    let listeners = StoredValue::new_local(None::<GestureListeners>);

    // Release: hand the frame back to the controller.
    let finish = move || {
        #[cfg(feature = "csr")]
        {
            if let Some(guard) = listeners.try_update_value(Option::take).flatten() {
                guard.release_later();
            }
        }
        let Some(commit) = interaction.try_update(CardInteraction::release).flatten() else {
            return;
        };
        match commit {
            CardCommit::Moved { .. } => apply(layout, move |l| l.commit(id, commit)),
            CardCommit::Resized { .. } => defer(0, move || apply(layout, move |l| l.commit(id, commit))),
        }
    };

    let track = move || {
        #[cfg(feature = "csr")]
        {
            let on_move = move |ev: web_sys::PointerEvent| {
                let scale = layout.with_untracked(|l| l.workspace().scale());
                interaction.try_update(|i| i.pointer_move(client_point(&ev), scale));
            };
            match GestureListeners::attach(on_move, finish) {
                Some(guard) => listeners.set_value(Some(guard)),
                None => {
                    log::warn!("card {id:?}: no window listeners, abandoning gesture");
                    finish();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("card {id:?}: no window to track the pointer on");
            finish();
        }
    };

    let on_title_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let pointer = client_point(&ev);
        if interaction.try_update(|i| i.begin_drag(pointer)).unwrap_or(false) {
            ev.prevent_default();
            track();
        }
    };

    let on_handle_down = move |ev: leptos::ev::PointerEvent, corner: ResizeCorner| {
        if ev.button() != 0 {
            return;
        }
        let pointer = client_point(&ev);
        if interaction.try_update(|i| i.begin_resize(corner, pointer)).unwrap_or(false) {
            ev.prevent_default();
            ev.stop_propagation();
            track();
        }
    };

    #[cfg(feature = "csr")]
    on_cleanup(move || {
        if let Some(guard) = listeners.try_update_value(Option::take).flatten() {
            guard.release_later();
        }
    });

    let frame = move || interaction.with(CardInteraction::frame);
    let style = move || {
        let f = frame();
        let z = record.with(|r| r.as_ref().map_or(0, |r| r.z_index));
        if mobile.get() {
            let size = layout.with(|l| l.viewport().fit_on_mobile(f.size));
            format!("width: {}px; height: {}px; z-index: {z};", size.width, size.height)
        } else {
            format!(
                "left: {}px; top: {}px; width: {}px; height: {}px; z-index: {z};",
                f.position.x, f.position.y, f.size.width, f.size.height
            )
        }
    };
    let accent = move || record.with(|r| r.as_ref().and_then(|r| r.accent_color)).map(|c| format!("background: {c};"));

    view! {
        <div
            class="card"
            class:card--mobile=move || mobile.get()
            class:dragging=move || frame().elevated
            attr:data-card=id.key()
            style=style
            on:pointerdown=move |_| apply(layout, move |l| l.bring_to_front(id))
        >
            <div class="card__titlebar" style=accent on:pointerdown=on_title_down>
                <span class="card__title">{id.title()}</span>
                <button
                    class="card__close"
                    title=format!("Close {}", id.title())
                    on:pointerdown=|ev: leptos::ev::PointerEvent| ev.stop_propagation()
                    on:click=move |_| apply(layout, move |l| l.close_card(id))
                >
                    "×"
                </button>
            </div>
            <div class="card__content">{section_content(id)}</div>
            <Show when=move || !mobile.get()>
                {ResizeCorner::ALL
                    .into_iter()
                    .map(|corner| {
                        view! {
                            <div
                                class=format!("card__handle card__handle--{}", corner.as_str())
                                on:pointerdown=move |ev| on_handle_down(ev, corner)
                            ></div>
                        }
                    })
                    .collect_view()}
            </Show>
        </div>
    }
    .into_any()
}
