//! Card records and the in-memory store that owns them.
//!
//! This module defines the committed state of every card on the workspace
//! (`CardRecord`) and the runtime store (`CardStore`) that mutates it in
//! response to finished gestures, navigation, and viewport changes. Records
//! are created once from the section manifest and never removed; closing a
//! card only clears `visible`.
//!
//! Every mutation addressed to a section the store does not hold is a silent
//! no-op. Gesture callbacks can fire after a card left the view, and that
//! race is benign.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::consts::INITIAL_Z_INDEX;
use crate::geometry::{Point, Size, clamp_size};
use crate::manifest::Section;
use crate::persist::{SavedSizes, SizeStorage, load_sizes, save_sizes};
use crate::viewport::{Viewport, ViewportClass};

/// Committed geometry and visibility of one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRecord {
    /// Section this card presents; unique within the store.
    pub id: Section,
    /// Title bar label.
    pub title: &'static str,
    /// Top-left corner in workspace coordinates.
    pub position: Point,
    /// Card size in workspace units; never below the minimum.
    pub size: Size,
    /// Whether the card is rendered.
    pub visible: bool,
    /// Stacking order; higher draws on top.
    pub z_index: i64,
    /// Optional title bar background.
    pub accent_color: Option<&'static str>,
    /// Set once the user picked a size, so viewport changes leave it alone.
    pub size_customized: bool,
}

impl CardRecord {
    /// Build a record for `section` at its default geometry for `viewport`.
    #[must_use]
    pub fn for_section(section: Section, viewport: Viewport) -> Self {
        let (position, size) = default_geometry(section, viewport);
        Self {
            id: section,
            title: section.title(),
            position,
            size,
            visible: section.starts_visible(),
            z_index: INITIAL_Z_INDEX,
            accent_color: section.accent_color(),
            size_customized: false,
        }
    }
}

/// Default position and size of `section` for the given viewport.
///
/// Desktop scatters cards around the viewport center at fixed offsets.
/// Mobile stacks every card at the shared anchor with one shared size.
#[must_use]
pub fn default_geometry(section: Section, viewport: Viewport) -> (Point, Size) {
    match viewport.class() {
        ViewportClass::Desktop => {
            let center = viewport.center();
            let offset = section.desktop_offset();
            (center.offset_by(offset.x, offset.y), section.desktop_size())
        }
        ViewportClass::Mobile => (Point::default(), viewport.mobile_card_size()),
    }
}

/// In-memory store of card records plus the session's z-index counter.
pub struct CardStore {
    cards: HashMap<Section, CardRecord>,
    highest_z: i64,
    storage: Box<dyn SizeStorage>,
}

impl CardStore {
    /// Build the seven manifest cards for `viewport`, applying any sizes the
    /// user saved in an earlier session.
    #[must_use]
    pub fn initialize(viewport: Viewport, storage: Box<dyn SizeStorage>) -> Self {
        let saved = load_sizes(storage.as_ref());
        let records = Section::ALL.into_iter().map(|section| {
            let mut record = CardRecord::for_section(section, viewport);
            if let Some(size) = saved.get(&section) {
                record.size = *size;
                record.size_customized = true;
            }
            record
        });
        Self::from_records(records, storage)
    }

    /// Build a store from explicit records. The z-index counter starts at the
    /// highest index present.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = CardRecord>, storage: Box<dyn SizeStorage>) -> Self {
        let cards: HashMap<Section, CardRecord> = records.into_iter().map(|r| (r.id, r)).collect();
        let highest_z = cards.values().map(|r| r.z_index).max().unwrap_or(INITIAL_Z_INDEX).max(INITIAL_Z_INDEX);
        Self { cards, highest_z, storage }
    }

    // --- Mutations ---

    /// Move a card. Returns false if the card is unknown.
    pub fn update_position(&mut self, id: Section, position: Point) -> bool {
        let Some(card) = self.cards.get_mut(&id) else {
            return false;
        };
        card.position = position;
        true
    }

    /// Resize a card (clamped to the minimum) and persist every card's size.
    /// Returns whether the sizes reached storage, or `None` if the card is unknown.
    pub fn update_size(&mut self, id: Section, size: Size) -> Option<bool> {
        let card = self.cards.get_mut(&id)?;
        card.size = clamp_size(size.width, size.height);
        card.size_customized = true;
        let sizes = self.saved_sizes();
        Some(save_sizes(self.storage.as_mut(), &sizes))
    }

    /// Raise a card above every other card. Returns the assigned z-index, or
    /// `None` (with the counter untouched) if the card is unknown.
    pub fn bring_to_front(&mut self, id: Section) -> Option<i64> {
        let card = self.cards.get_mut(&id)?;
        self.highest_z += 1;
        card.z_index = self.highest_z;
        Some(self.highest_z)
    }

    /// Show or hide a card. Returns false if the card is unknown.
    pub fn set_visible(&mut self, id: Section, visible: bool) -> bool {
        let Some(card) = self.cards.get_mut(&id) else {
            return false;
        };
        card.visible = visible;
        true
    }

    /// Flip a card's visibility, returning the new value.
    pub fn toggle_visible(&mut self, id: Section) -> Option<bool> {
        let card = self.cards.get_mut(&id)?;
        card.visible = !card.visible;
        Some(card.visible)
    }

    /// Hide every card except `keep`.
    pub fn hide_all_except(&mut self, keep: Section) {
        for card in self.cards.values_mut() {
            if card.id != keep {
                card.visible = false;
            }
        }
    }

    /// Reset every card to its default position for `viewport`, and to its
    /// default size unless the user already chose one. Visibility and z-order
    /// are untouched.
    pub fn recalculate_for_viewport(&mut self, viewport: Viewport) {
        for card in self.cards.values_mut() {
            let (position, size) = default_geometry(card.id, viewport);
            card.position = position;
            if !card.size_customized {
                card.size = size;
            }
        }
    }

    // --- Queries ---

    /// Look up a card.
    #[must_use]
    pub fn get(&self, id: Section) -> Option<&CardRecord> {
        self.cards.get(&id)
    }

    /// All cards in manifest order.
    #[must_use]
    pub fn records(&self) -> Vec<&CardRecord> {
        Section::ALL.iter().filter_map(|id| self.cards.get(id)).collect()
    }

    /// Visible cards sorted by `(z_index, manifest order)` for draw order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&CardRecord> {
        let mut visible: Vec<&CardRecord> = self.records().into_iter().filter(|r| r.visible).collect();
        visible.sort_by_key(|r| r.z_index);
        visible
    }

    /// Sections currently shown, in manifest order.
    #[must_use]
    pub fn active_ids(&self) -> Vec<Section> {
        self.records().into_iter().filter(|r| r.visible).map(|r| r.id).collect()
    }

    /// Topmost visible card, if any.
    #[must_use]
    pub fn topmost_visible(&self) -> Option<Section> {
        self.visible_records().last().map(|r| r.id)
    }

    /// Highest z-index assigned this session.
    #[must_use]
    pub fn highest_z(&self) -> i64 {
        self.highest_z
    }

    /// Current size of every card, as written to storage.
    #[must_use]
    pub fn saved_sizes(&self) -> SavedSizes {
        self.cards.values().map(|r| (r.id, r.size)).collect()
    }

    /// Number of cards in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the store holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
