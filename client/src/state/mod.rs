//! Client state held in Leptos signals and provided through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The card layout itself lives in the `spatial` engine; the modules here
//! wrap it for the reactive layer and add the page chrome around it.

pub mod contact;
pub mod layout;
pub mod toast;
pub mod ui;
