//! Browser adapters shared across client components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `window`, `localStorage`, and listener plumbing
//! from component logic. Everything that touches `web_sys` is gated behind
//! the `csr` feature and degrades to a no-op natively.

pub mod dark_mode;
#[cfg(feature = "csr")]
pub mod listener;
pub mod storage;
pub mod timer;
pub mod viewport;
