//! Pure geometry: points, sizes, resize arithmetic, and zoom-to-cursor math.
//!
//! Everything here is stateless. The workspace maps world coordinates to the
//! screen with `screen = (world + offset) * scale`, so `offset` is a pan
//! expressed in workspace units and a pointer delta of `d` screen pixels pans
//! by `d / scale`.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{GRID_BASE_SIZE, GRID_MIN_SIZE, MAX_SCALE, MIN_CARD_HEIGHT, MIN_CARD_WIDTH, MIN_SCALE, WHEEL_ZOOM_STEP};

/// A point in either screen or workspace space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Width and height of a card in workspace units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Corner handle a resize gesture is dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeCorner {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeCorner {
    pub const ALL: [Self; 4] = [Self::NorthWest, Self::NorthEast, Self::SouthWest, Self::SouthEast];

    /// Short handle label, also used as the handle's CSS modifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    #[must_use]
    pub fn is_north(self) -> bool {
        matches!(self, Self::NorthEast | Self::NorthWest)
    }

    #[must_use]
    pub fn is_west(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }
}

impl fmt::Display for ResizeCorner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised corner label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resize corner: {0}")]
pub struct ParseCornerError(pub String);

impl FromStr for ResizeCorner {
    type Err = ParseCornerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "ne" | "northeast" => Ok(Self::NorthEast),
            "nw" | "northwest" => Ok(Self::NorthWest),
            "se" | "southeast" => Ok(Self::SouthEast),
            "sw" | "southwest" => Ok(Self::SouthWest),
            _ => Err(ParseCornerError(s.to_owned())),
        }
    }
}

/// Result of one incremental resize step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeStep {
    /// New clamped size.
    pub size: Size,
    /// How far the card's top-left corner must move to keep the opposite edges anchored.
    pub position_delta: Point,
}

/// Wheel zoom direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Direction for a wheel event; scrolling down (positive `delta_y`) zooms out.
    #[must_use]
    pub fn from_wheel(delta_y: f64) -> Self {
        if delta_y > 0.0 { Self::Out } else { Self::In }
    }

    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::In => WHEEL_ZOOM_STEP,
            Self::Out => 1.0 / WHEEL_ZOOM_STEP,
        }
    }
}

/// Enforce the minimum card size.
#[must_use]
pub fn clamp_size(width: f64, height: f64) -> Size {
    Size { width: width.max(MIN_CARD_WIDTH), height: height.max(MIN_CARD_HEIGHT) }
}

/// Apply an incremental pointer delta to a card being resized from `corner`.
///
/// South/east edges grow with positive deltas. North/west edges grow with
/// negative deltas and drag the card origin along, limited to how far the
/// edge really moved once clamping kicks in.
#[must_use]
pub fn apply_resize_delta(current: Size, corner: ResizeCorner, dx: f64, dy: f64) -> ResizeStep {
    let raw_width = if corner.is_west() { current.width - dx } else { current.width + dx };
    let raw_height = if corner.is_north() { current.height - dy } else { current.height + dy };
    let size = clamp_size(raw_width, raw_height);

    let shift_x = if corner.is_west() { current.width - size.width } else { 0.0 };
    let shift_y = if corner.is_north() { current.height - size.height } else { 0.0 };

    ResizeStep { size, position_delta: Point::new(shift_x, shift_y) }
}

/// Clamp a scale factor to the supported zoom range.
#[must_use]
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Zoom one wheel step around `pointer` (screen space, relative to the workspace).
///
/// Returns the new scale and the offset that keeps the workspace point under
/// the pointer fixed on screen.
#[must_use]
pub fn zoom_to_pointer(scale: f64, offset: Point, pointer: Point, direction: ZoomDirection) -> (f64, Point) {
    let new_scale = clamp_scale(scale * direction.factor());
    (new_scale, offset_for_anchor(scale, offset, pointer, new_scale))
}

/// Offset that keeps `pointer` over the same workspace point when moving from `scale` to `new_scale`.
#[must_use]
pub fn offset_for_anchor(scale: f64, offset: Point, pointer: Point, new_scale: f64) -> Point {
    let world_x = pointer.x / scale - offset.x;
    let world_y = pointer.y / scale - offset.y;
    Point { x: pointer.x / new_scale - world_x, y: pointer.y / new_scale - world_y }
}

/// Background grid cell size for the given scale.
#[must_use]
pub fn grid_cell_size(scale: f64) -> f64 {
    (GRID_BASE_SIZE / scale).max(GRID_MIN_SIZE)
}
