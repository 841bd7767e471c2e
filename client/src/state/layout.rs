//! Reactive wrapper around `spatial::layout::LayoutController`.
//!
//! ARCHITECTURE
//! ============
//! The controller owns the card store and workspace transform. It lives in a
//! local-storage signal because its size storage holds browser handles.
//! Components mutate it through `apply`, which also runs the actions the
//! controller hands back (deferred raises in particular).

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use spatial::layout::{Action, LayoutController};
use spatial::manifest::Section;
use spatial::persist::SizeStorage;
use spatial::viewport::Viewport;

use crate::util::timer::defer;

/// Shared layout handle provided through context.
pub type LayoutSignal = RwSignal<LayoutController, LocalStorage>;

pub fn new_layout(viewport: Viewport, storage: Box<dyn SizeStorage>) -> LayoutSignal {
    RwSignal::new_local(LayoutController::new(viewport, storage))
}

/// Run a controller operation and process the actions it returns.
pub fn apply(layout: LayoutSignal, op: impl FnOnce(&mut LayoutController) -> Vec<Action>) {
    let actions = layout.try_update(op).unwrap_or_default();
    dispatch(layout, actions);
}

/// Process controller actions on behalf of the view layer.
pub fn dispatch(layout: LayoutSignal, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::ScheduleBringToFront(id) => schedule_raise(layout, id),
            Action::ClassChanged(class) => log::debug!("layout switched to {class:?}"),
            Action::SizesPersisted => log::debug!("card sizes saved"),
            // Signal writes already re-render.
            Action::RenderNeeded => {}
        }
    }
}

/// Raise a freshly shown card on the next tick, once it has been rendered.
fn schedule_raise(layout: LayoutSignal, id: Section) {
    defer(0, move || {
        layout.try_update(|l| l.bring_to_front(id));
    });
}
