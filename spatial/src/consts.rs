//! Shared numeric constants for the spatial crate.

// ── Card geometry ───────────────────────────────────────────────

/// Smallest width a card can be resized to, in workspace units.
pub const MIN_CARD_WIDTH: f64 = 280.0;

/// Smallest height a card can be resized to, in workspace units.
pub const MIN_CARD_HEIGHT: f64 = 200.0;

/// Z-index counter value at session start.
pub const INITIAL_Z_INDEX: i64 = 1;

// ── Workspace zoom ──────────────────────────────────────────────

/// Lower bound for the workspace scale factor.
pub const MIN_SCALE: f64 = 0.1;

/// Upper bound for the workspace scale factor.
pub const MAX_SCALE: f64 = 5.0;

/// Multiplier applied per wheel notch when zooming in; zooming out divides by it.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Multiplier for the zoom-in control button.
pub const STEP_ZOOM_IN: f64 = 1.2;

/// Multiplier for the zoom-out control button.
pub const STEP_ZOOM_OUT: f64 = 0.8;

/// Background grid cell size at scale 1.0, in screen pixels.
pub const GRID_BASE_SIZE: f64 = 50.0;

/// Background grid cells never shrink below this many screen pixels.
pub const GRID_MIN_SIZE: f64 = 10.0;

// ── Viewport classes ────────────────────────────────────────────

/// Viewports narrower than this (in CSS pixels) use the single-card mobile layout.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Widest a card may be on mobile.
pub const MOBILE_MAX_CARD_WIDTH: f64 = 450.0;

/// Horizontal breathing room kept around a mobile card (10 px per side).
pub const MOBILE_GUTTER: f64 = 20.0;

/// Fixed card height on mobile.
pub const MOBILE_CARD_HEIGHT: f64 = 600.0;

/// Vertical space reserved for the menu toggle and theme button on mobile.
pub const MOBILE_CHROME_HEIGHT: f64 = 100.0;

// ── Persistence ─────────────────────────────────────────────────

/// Storage key holding the JSON map of remembered card sizes.
pub const SIZES_STORAGE_KEY: &str = "cardDimensions";
