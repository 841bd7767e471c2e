//! Interaction engine for the folio card workspace.
//!
//! Portfolio sections are presented as cards on a pannable, zoomable
//! workspace. This crate owns everything about that surface that does not
//! need a browser: card geometry and stacking, per-card drag/resize gestures,
//! the workspace transform, and the controller that reacts to navigation and
//! viewport changes. The Leptos front end in `client` wires DOM events to it
//! and renders the resulting state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | [`layout::LayoutController`]: selection, visibility, gesture commits, viewport class |
//! | [`store`] | Card records and the z-index counter |
//! | [`card`] | Per-card drag/resize gesture state machine |
//! | [`workspace`] | Pan/zoom transform and background grid |
//! | [`geometry`] | Pure resize, zoom, and grid math |
//! | [`manifest`] | The fixed set of portfolio sections and their defaults |
//! | [`viewport`] | Mobile/desktop classification and mobile card sizing |
//! | [`persist`] | Remembered card sizes behind the [`persist::SizeStorage`] adapter |
//! | [`consts`] | Shared numeric constants (zoom limits, minimum sizes, etc.) |

pub mod card;
pub mod consts;
pub mod geometry;
pub mod layout;
pub mod manifest;
pub mod persist;
pub mod store;
pub mod viewport;
pub mod workspace;
