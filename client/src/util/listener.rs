//! Scoped window event listeners.
//!
//! [`WindowListener`] registers one callback on `window` and removes it on
//! drop. [`GestureListeners`] bundles the set a pointer gesture needs:
//! `pointermove`, plus `pointerup`, `pointercancel` and `blur` to end it.
//!
//! A wasm closure must outlive its own invocation, so a handler that ends
//! the gesture it belongs to hands the guard to
//! [`GestureListeners::release_later`] instead of dropping it in place.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub struct WindowListener {
    window: web_sys::Window,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    /// Register `f` for `event`. Returns `None` without a window or when the
    /// browser refuses the registration.
    pub fn attach(event: &'static str, f: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
        if let Err(err) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::warn!("window listener: cannot register {event}: {err:?}");
            return None;
        }
        Some(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(err) =
            self.window.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("window listener: cannot remove {}: {err:?}", self.event);
        }
    }
}

/// Listeners for one drag or resize.
pub struct GestureListeners {
    listeners: Vec<WindowListener>,
}

impl GestureListeners {
    /// Track the pointer until `on_end` fires. Returns `None` if any listener
    /// could not be registered; the ones that were are removed again.
    pub fn attach(
        mut on_move: impl FnMut(web_sys::PointerEvent) + 'static,
        on_end: impl Fn() + Clone + 'static,
    ) -> Option<Self> {
        let mut listeners = Vec::with_capacity(4);
        listeners.push(WindowListener::attach("pointermove", move |ev| {
            if let Ok(ev) = ev.dyn_into::<web_sys::PointerEvent>() {
                on_move(ev);
            }
        })?);
        for event in ["pointerup", "pointercancel", "blur"] {
            let on_end = on_end.clone();
            listeners.push(WindowListener::attach(event, move |_| on_end())?);
        }
        Some(Self { listeners })
    }

    /// Drop on the next tick, after the handler that asked for it returns.
    pub fn release_later(self) {
        gloo_timers::callback::Timeout::new(0, move || drop(self)).forget();
    }
}
