//! Viewport dimensions and the mobile/desktop layout split.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{MOBILE_BREAKPOINT, MOBILE_CARD_HEIGHT, MOBILE_CHROME_HEIGHT, MOBILE_GUTTER, MOBILE_MAX_CARD_WIDTH};
use crate::geometry::{Point, Size, clamp_size};

/// Layout mode picked from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    /// Many cards on a pannable, zoomable workspace.
    #[default]
    Desktop,
    /// One card at a time at a fixed centered anchor.
    Mobile,
}

impl ViewportClass {
    #[must_use]
    pub fn classify(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT { Self::Mobile } else { Self::Desktop }
    }

    #[must_use]
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

/// Browser viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn class(self) -> ViewportClass {
        ViewportClass::classify(self.width)
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Card size used for every card in the mobile layout. Never below the
    /// card minimum, even on screens narrower than it.
    #[must_use]
    pub fn mobile_card_size(self) -> Size {
        clamp_size(MOBILE_MAX_CARD_WIDTH.min(self.width - MOBILE_GUTTER), MOBILE_CARD_HEIGHT)
    }

    /// Shrink a card so it fits on a phone screen, leaving room for the menu and theme controls.
    #[must_use]
    pub fn fit_on_mobile(self, size: Size) -> Size {
        clamp_size(size.width.min(self.width - MOBILE_GUTTER), size.height.min(self.height - MOBILE_CHROME_HEIGHT))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280.0, height: 800.0 }
    }
}
