//! Leptos front end for the portfolio workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! `spatial` decides where cards go; this crate draws them, feeds it pointer
//! and window events, and supplies the browser pieces it cannot own itself:
//! `localStorage`, timers, mail delivery, and toasts.
//!
//! Browser-only code is gated behind the `csr` feature. Without it the crate
//! builds natively so state modules can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
