//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the workspace and its chrome while reading and writing
//! shared state from Leptos context providers set up by `App`.

pub mod card_view;
pub mod sections;
pub mod sidebar;
pub mod theme_toggle;
pub mod toast_host;
pub mod workspace_view;
