//! One-shot callbacks on the browser event loop.

/// Run `f` after `ms` milliseconds. `0` means the next tick.
///
/// Natively there is no event loop to defer to, so `f` runs immediately.
pub fn defer(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(ms, f).forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("deferred callback ({ms} ms) run inline");
        f();
    }
}
