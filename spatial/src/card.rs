//! Per-card gesture tracking: drag-to-move and resize-by-corner.
//!
//! A card keeps two geometries. The committed one lives in the store's
//! `CardRecord`; the display one (`CardFrame`) follows the pointer while a
//! gesture is in flight and is handed back as a `CardCommit` on release.
//! Between gestures the frame mirrors the record.
//!
//! Drag and resize are mutually exclusive: a press is refused while another
//! gesture on the same card is active.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use crate::geometry::{Point, ResizeCorner, Size, apply_resize_delta};
use crate::manifest::Section;
use crate::store::CardRecord;

/// Gesture currently running on a card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CardGesture {
    /// Waiting for a press on the title bar or a corner handle.
    #[default]
    Idle,
    /// Moving the card by its title bar.
    Dragging {
        /// Screen point where the press started.
        press: Point,
        /// Card position when the press started.
        origin: Point,
    },
    /// Resizing the card from one corner.
    Resizing {
        /// Corner handle being dragged.
        corner: ResizeCorner,
        /// Screen point of the previous pointer event; deltas are incremental.
        last: Point,
    },
}

/// Display geometry of a card, which may run ahead of the committed record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    pub position: Point,
    pub size: Size,
    /// Raised look (scale and shadow) while being dragged.
    pub elevated: bool,
}

/// Geometry to write back to the store when a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardCommit {
    /// Drag finished at `position`.
    Moved { position: Point },
    /// Resize finished; `position` differs from the record when a north or west corner was used.
    Resized { position: Point, size: Size },
}

/// Gesture state machine for one card.
#[derive(Debug, Clone)]
pub struct CardInteraction {
    id: Section,
    gesture: CardGesture,
    frame: CardFrame,
    mobile: bool,
}

impl CardInteraction {
    #[must_use]
    pub fn new(record: &CardRecord) -> Self {
        Self {
            id: record.id,
            gesture: CardGesture::Idle,
            frame: CardFrame { position: record.position, size: record.size, elevated: false },
            mobile: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> Section {
        self.id
    }

    #[must_use]
    pub fn frame(&self) -> CardFrame {
        self.frame
    }

    #[must_use]
    pub fn gesture(&self) -> CardGesture {
        self.gesture
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.gesture == CardGesture::Idle
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, CardGesture::Dragging { .. })
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, CardGesture::Resizing { .. })
    }

    /// Adopt the committed geometry. Ignored mid-gesture so the display does
    /// not jump back under the pointer.
    pub fn sync(&mut self, record: &CardRecord) {
        if self.is_idle() {
            self.frame.position = record.position;
            self.frame.size = record.size;
        }
    }

    /// Switch between free positioning and the fixed mobile anchor. Any
    /// running gesture is abandoned.
    pub fn set_mobile(&mut self, mobile: bool) {
        if mobile && !self.is_idle() {
            self.cancel_to(self.frame.position, self.frame.size);
        }
        self.mobile = mobile;
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Start moving the card. Returns false if the press is refused.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if self.mobile || !self.is_idle() {
            return false;
        }
        self.gesture = CardGesture::Dragging { press: pointer, origin: self.frame.position };
        self.frame.elevated = true;
        true
    }

    /// Start resizing from `corner`. Returns false if the press is refused.
    pub fn begin_resize(&mut self, corner: ResizeCorner, pointer: Point) -> bool {
        if self.mobile || !self.is_idle() {
            return false;
        }
        self.gesture = CardGesture::Resizing { corner, last: pointer };
        true
    }

    /// Follow the pointer. `scale` converts screen deltas into workspace units.
    /// Returns true if the frame changed.
    pub fn pointer_move(&mut self, pointer: Point, scale: f64) -> bool {
        match self.gesture {
            CardGesture::Idle => false,
            CardGesture::Dragging { press, origin } => {
                let dx = (pointer.x - press.x) / scale;
                let dy = (pointer.y - press.y) / scale;
                self.frame.position = origin.offset_by(dx, dy);
                true
            }
            CardGesture::Resizing { corner, last } => {
                let dx = (pointer.x - last.x) / scale;
                let dy = (pointer.y - last.y) / scale;
                let step = apply_resize_delta(self.frame.size, corner, dx, dy);
                self.frame.size = step.size;
                self.frame.position = self.frame.position.offset_by(step.position_delta.x, step.position_delta.y);
                self.gesture = CardGesture::Resizing { corner, last: pointer };
                true
            }
        }
    }

    /// End the gesture and hand back what to commit.
    pub fn release(&mut self) -> Option<CardCommit> {
        let commit = match self.gesture {
            CardGesture::Idle => None,
            CardGesture::Dragging { .. } => Some(CardCommit::Moved { position: self.frame.position }),
            CardGesture::Resizing { .. } => {
                Some(CardCommit::Resized { position: self.frame.position, size: self.frame.size })
            }
        };
        self.gesture = CardGesture::Idle;
        self.frame.elevated = false;
        commit
    }

    /// Abandon the gesture and snap the frame back to the committed record.
    pub fn cancel(&mut self, record: &CardRecord) {
        self.cancel_to(record.position, record.size);
    }

    fn cancel_to(&mut self, position: Point, size: Size) {
        self.gesture = CardGesture::Idle;
        self.frame = CardFrame { position, size, elevated: false };
    }
}
