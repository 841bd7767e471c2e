//! The pannable, zoomable surface the cards sit on.
//!
//! Holds the transform between workspace units and screen pixels along with
//! the background pan gesture. Mobile layouts disable it.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use crate::consts::{STEP_ZOOM_IN, STEP_ZOOM_OUT};
use crate::geometry::{Point, ZoomDirection, clamp_scale, grid_cell_size, zoom_to_pointer};

/// Pan/zoom state of the workspace surface.
///
/// Cards are laid out in workspace units and drawn at
/// `screen = (world + offset) * scale`, so `offset` is in workspace units
/// and `scale` is a plain factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkspaceTransform {
    pub scale: f64,
    pub offset: Point,
}

impl Default for WorkspaceTransform {
    fn default() -> Self {
        Self { scale: 1.0, offset: Point::default() }
    }
}

impl WorkspaceTransform {
    /// Convert a screen point (relative to the workspace element) to workspace coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point { x: screen.x / self.scale - self.offset.x, y: screen.y / self.scale - self.offset.y }
    }

    /// Convert a workspace point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point { x: (world.x + self.offset.x) * self.scale, y: (world.y + self.offset.y) * self.scale }
    }

    /// Convert a screen-space distance (pixels) to workspace units.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }

    /// CSS `transform` value for the card layer.
    #[must_use]
    pub fn css(&self) -> String {
        format!("scale({}) translate({}px, {}px)", self.scale, self.offset.x, self.offset.y)
    }
}

/// Background pan in progress: the screen point of the previous move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    pub last: Point,
}

/// Workspace surface: transform, background pan, and grid toggle.
///
/// While disabled (mobile layout) every gesture is ignored and rendering
/// uses the identity transform. The stored transform is kept so returning
/// to desktop picks up where the user left off.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceView {
    transform: WorkspaceTransform,
    pan: Option<PanGesture>,
    grid_visible: bool,
    enabled: bool,
}

impl Default for WorkspaceView {
    fn default() -> Self {
        Self { transform: WorkspaceTransform::default(), pan: None, grid_visible: true, enabled: true }
    }
}

impl WorkspaceView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// Stored transform, regardless of whether the workspace is enabled.
    #[must_use]
    pub fn transform(&self) -> WorkspaceTransform {
        self.transform
    }

    /// Transform to render with: identity while disabled.
    #[must_use]
    pub fn effective_transform(&self) -> WorkspaceTransform {
        if self.enabled { self.transform } else { WorkspaceTransform::default() }
    }

    /// Scale used to convert card gesture deltas.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.effective_transform().scale
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    #[must_use]
    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    /// Background grid cell size in screen pixels.
    #[must_use]
    pub fn grid_cell_size(&self) -> f64 {
        grid_cell_size(self.effective_transform().scale)
    }

    /// Background grid origin so the grid moves with the cards.
    #[must_use]
    pub fn background_position(&self) -> Point {
        let t = self.effective_transform();
        Point { x: t.offset.x * t.scale, y: t.offset.y * t.scale }
    }

    /// Scale as a rounded percentage for the zoom indicator.
    #[must_use]
    pub fn zoom_percent(&self) -> i64 {
        #[allow(clippy::cast_possible_truncation)]
        let percent = (self.transform.scale * 100.0).round() as i64;
        percent
    }

    // --- Mode ---

    /// Enable or disable pan/zoom. Disabling drops any pan in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pan = None;
        }
    }

    // --- Pan ---

    /// Start a background pan. The host only calls this for presses that
    /// land on the workspace background itself, never on a card.
    /// Returns false if the press is ignored.
    pub fn begin_pan(&mut self, pointer: Point) -> bool {
        if !self.enabled {
            return false;
        }
        self.pan = Some(PanGesture { last: pointer });
        true
    }

    /// Follow the pointer during a pan. Returns true if the offset changed.
    pub fn pan_to(&mut self, pointer: Point) -> bool {
        let Some(pan) = self.pan.as_mut() else {
            return false;
        };
        let dx = pointer.x - pan.last.x;
        let dy = pointer.y - pan.last.y;
        pan.last = pointer;
        self.transform.offset = self.transform.offset.offset_by(
            self.transform.screen_dist_to_world(dx),
            self.transform.screen_dist_to_world(dy),
        );
        true
    }

    /// Finish the pan. Returns true if one was running.
    pub fn end_pan(&mut self) -> bool {
        self.pan.take().is_some()
    }

    // --- Zoom ---

    /// One wheel notch at `pointer`; scrolling down zooms out. Returns true if
    /// the transform changed.
    pub fn wheel(&mut self, pointer: Point, delta_y: f64) -> bool {
        if !self.enabled {
            return false;
        }
        let direction = ZoomDirection::from_wheel(delta_y);
        let before = self.transform;
        let (scale, offset) = zoom_to_pointer(before.scale, before.offset, pointer, direction);
        self.transform = WorkspaceTransform { scale, offset };
        self.transform != before
    }

    /// Zoom-in button: scale only, no anchor.
    pub fn zoom_in(&mut self) -> bool {
        self.step_zoom(STEP_ZOOM_IN)
    }

    /// Zoom-out button: scale only, no anchor.
    pub fn zoom_out(&mut self) -> bool {
        self.step_zoom(STEP_ZOOM_OUT)
    }

    fn step_zoom(&mut self, factor: f64) -> bool {
        if !self.enabled {
            return false;
        }
        let before = self.transform;
        self.transform.scale = clamp_scale(before.scale * factor);
        self.transform != before
    }

    /// Back to scale 1 with no offset.
    pub fn reset_view(&mut self) {
        self.transform = WorkspaceTransform::default();
        self.pan = None;
    }

    /// Show or hide the background grid, returning the new state.
    pub fn toggle_grid(&mut self) -> bool {
        self.grid_visible = !self.grid_visible;
        self.grid_visible
    }
}
