//! Card selection and viewport policy for the workspace.
//!
//! The controller is the single entry point the front end drives. It owns
//! the card store and the workspace surface and reports back through
//! [`Action`] values the host interprets.

use crate::card::CardCommit;
use crate::manifest::Section;
use crate::persist::SizeStorage;
use crate::store::CardStore;
use crate::viewport::{Viewport, ViewportClass};
use crate::workspace::WorkspaceView;

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Actions returned from controller operations for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Raise this card on the next tick, once the show has been rendered.
    ScheduleBringToFront(Section),
    /// Card sizes were handed to the storage adapter.
    SizesPersisted,
    /// Card records or the workspace changed; redraw.
    RenderNeeded,
    /// The viewport crossed the mobile breakpoint.
    ClassChanged(ViewportClass),
}

/// What selecting an already-visible card does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectPolicy {
    /// Raise it above the other cards.
    #[default]
    BringToFront,
    /// Close it, so the navigation entry acts as a show/hide switch.
    Toggle,
}

/// Owns the card store and the workspace surface and applies navigation,
/// gesture commits, and viewport changes to them.
///
/// Separated from the Leptos view layer so it can be tested without a browser.
pub struct LayoutController {
    store: CardStore,
    workspace: WorkspaceView,
    viewport: Viewport,
    class: ViewportClass,
    select_policy: SelectPolicy,
    active: Option<Section>,
}

impl LayoutController {
    /// Build the cards for `viewport`, restoring sizes saved in `storage`.
    #[must_use]
    pub fn new(viewport: Viewport, storage: Box<dyn SizeStorage>) -> Self {
        let class = viewport.class();
        let store = CardStore::initialize(viewport, storage);
        let mut workspace = WorkspaceView::new();
        workspace.set_enabled(!class.is_mobile());
        let active = store.topmost_visible();
        Self { store, workspace, viewport, class, select_policy: SelectPolicy::default(), active }
    }

    #[must_use]
    pub fn with_select_policy(mut self, policy: SelectPolicy) -> Self {
        self.select_policy = policy;
        self
    }

    // --- Queries ---

    #[must_use]
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    #[must_use]
    pub fn workspace(&self) -> &WorkspaceView {
        &self.workspace
    }

    /// Mutable access for workspace gestures (pan, wheel, zoom buttons).
    pub fn workspace_mut(&mut self) -> &mut WorkspaceView {
        &mut self.workspace
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn class(&self) -> ViewportClass {
        self.class
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.class.is_mobile()
    }

    #[must_use]
    pub fn select_policy(&self) -> SelectPolicy {
        self.select_policy
    }

    /// Most recently shown card that is still visible, falling back to the topmost one.
    #[must_use]
    pub fn active_card(&self) -> Option<Section> {
        self.active
            .filter(|id| self.store.get(*id).is_some_and(|r| r.visible))
            .or_else(|| self.store.topmost_visible())
    }

    // --- Viewport ---

    /// React to a window resize.
    ///
    /// Card defaults are recomputed only when the viewport crosses back into
    /// desktop, so resizing within a class leaves dragged cards where they
    /// are. Crossing into mobile keeps just the active card open.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.viewport = Viewport::new(width, height);
        let class = self.viewport.class();
        let mut actions = Vec::new();

        if class != self.class {
            log::debug!("viewport class {:?} -> {:?} at {width}x{height}", self.class, class);
            if class.is_mobile() {
                if let Some(keep) = self.active_card() {
                    self.store.hide_all_except(keep);
                }
            }
            self.class = class;
            self.workspace.set_enabled(!class.is_mobile());
            if !class.is_mobile() {
                self.store.recalculate_for_viewport(self.viewport);
            }
            actions.push(Action::ClassChanged(class));
        }

        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Selection ---

    /// Show a card from navigation, or apply the select policy if it is already shown.
    pub fn select_card(&mut self, id: Section) -> Vec<Action> {
        let Some(record) = self.store.get(id) else {
            return Vec::new();
        };

        if !record.visible {
            if self.class.is_mobile() {
                self.store.hide_all_except(id);
            }
            self.store.set_visible(id, true);
            self.active = Some(id);
            return vec![Action::RenderNeeded, Action::ScheduleBringToFront(id)];
        }

        match self.select_policy {
            SelectPolicy::BringToFront => {
                self.active = Some(id);
                self.bring_to_front(id)
            }
            SelectPolicy::Toggle => self.close_card(id),
        }
    }

    /// String entry point for navigation links. Unknown keys are ignored.
    pub fn select_card_key(&mut self, key: &str) -> Vec<Action> {
        match key.parse::<Section>() {
            Ok(id) => self.select_card(id),
            Err(err) => {
                log::debug!("ignoring selection: {err}");
                Vec::new()
            }
        }
    }

    /// Hide a card. The record stays in the store.
    pub fn close_card(&mut self, id: Section) -> Vec<Action> {
        if self.store.set_visible(id, false) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// Raise a card, e.g. on any click inside it.
    pub fn bring_to_front(&mut self, id: Section) -> Vec<Action> {
        match self.store.bring_to_front(id) {
            Some(_) => vec![Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Gesture commits ---

    /// Write a finished card gesture back to the store.
    pub fn commit(&mut self, id: Section, commit: CardCommit) -> Vec<Action> {
        match commit {
            CardCommit::Moved { position } => {
                if !self.store.update_position(id, position) {
                    return Vec::new();
                }
                self.store.bring_to_front(id);
                vec![Action::RenderNeeded]
            }
            CardCommit::Resized { position, size } => {
                let Some(record) = self.store.get(id) else {
                    return Vec::new();
                };
                if record.position != position {
                    self.store.update_position(id, position);
                }
                match self.store.update_size(id, size) {
                    Some(true) => vec![Action::RenderNeeded, Action::SizesPersisted],
                    Some(false) => vec![Action::RenderNeeded],
                    None => Vec::new(),
                }
            }
        }
    }
}
