#![allow(clippy::float_cmp)]

use super::*;
use crate::card::{CardCommit, CardInteraction};
use crate::geometry::{Point, ResizeCorner, Size};
use crate::persist::{MemoryStorage, SizeStorage, StorageError, decode_sizes};

// =============================================================
// Helpers
// =============================================================

fn desktop() -> LayoutController {
    LayoutController::new(Viewport::new(1200.0, 800.0), Box::new(MemoryStorage::new()))
}

/// Backend whose writes always fail, like `localStorage` over quota.
struct FullStorage;

impl SizeStorage for FullStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&mut self, _raw: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("quota exceeded".to_owned()))
    }
}

fn phone() -> LayoutController {
    LayoutController::new(Viewport::new(390.0, 844.0), Box::new(MemoryStorage::new()))
}

/// Play the host's part: run scheduled raises as the next tick would.
fn run(ctl: &mut LayoutController, actions: Vec<Action>) -> Vec<Action> {
    for action in &actions {
        if let Action::ScheduleBringToFront(id) = action {
            ctl.bring_to_front(*id);
        }
    }
    actions
}

fn select(ctl: &mut LayoutController, id: Section) -> Vec<Action> {
    let actions = ctl.select_card(id);
    run(ctl, actions)
}

fn z(ctl: &LayoutController, id: Section) -> i64 {
    ctl.store().get(id).unwrap().z_index
}

fn visible(ctl: &LayoutController, id: Section) -> bool {
    ctl.store().get(id).unwrap().visible
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_desktop_controller_enables_workspace() {
    let ctl = desktop();
    assert_eq!(ctl.class(), ViewportClass::Desktop);
    assert!(ctl.workspace().is_enabled());
    assert_eq!(ctl.active_card(), Some(Section::Welcome));
    assert_eq!(ctl.select_policy(), SelectPolicy::BringToFront);
}

#[test]
fn new_mobile_controller_disables_workspace() {
    let ctl = phone();
    assert!(ctl.is_mobile());
    assert!(!ctl.workspace().is_enabled());
}

// =============================================================
// select_card
// =============================================================

#[test]
fn selecting_about_shows_it_above_welcome() {
    let mut ctl = desktop();
    let actions = select(&mut ctl, Section::About);
    assert!(actions.contains(&Action::ScheduleBringToFront(Section::About)));
    assert!(visible(&ctl, Section::About));
    assert!(visible(&ctl, Section::Welcome));
    assert!(z(&ctl, Section::About) > z(&ctl, Section::Welcome));
    assert_eq!(ctl.store().topmost_visible(), Some(Section::About));
}

#[test]
fn select_hidden_card_defers_the_raise() {
    let mut ctl = desktop();
    let before = z(&ctl, Section::Skills);
    let actions = ctl.select_card(Section::Skills);
    assert_eq!(actions, vec![Action::RenderNeeded, Action::ScheduleBringToFront(Section::Skills)]);
    assert!(visible(&ctl, Section::Skills));
    assert_eq!(z(&ctl, Section::Skills), before);
    run(&mut ctl, actions);
    assert_eq!(z(&ctl, Section::Skills), ctl.store().highest_z());
}

#[test]
fn select_visible_card_brings_it_to_front() {
    let mut ctl = desktop();
    select(&mut ctl, Section::About);
    let actions = ctl.select_card(Section::Welcome);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert!(visible(&ctl, Section::Welcome));
    assert!(z(&ctl, Section::Welcome) > z(&ctl, Section::About));
}

#[test]
fn toggle_policy_closes_visible_card() {
    let mut ctl = desktop().with_select_policy(SelectPolicy::Toggle);
    ctl.select_card(Section::Welcome);
    assert!(!visible(&ctl, Section::Welcome));
    ctl.select_card(Section::Welcome);
    assert!(visible(&ctl, Section::Welcome));
}

#[test]
fn select_card_key_parses_navigation_keys() {
    let mut ctl = desktop();
    let actions = ctl.select_card_key("projects");
    assert!(actions.contains(&Action::ScheduleBringToFront(Section::Projects)));
    assert!(visible(&ctl, Section::Projects));
}

#[test]
fn select_card_key_ignores_unknown_keys() {
    let mut ctl = desktop();
    let before: Vec<Section> = ctl.store().active_ids();
    assert!(ctl.select_card_key("blog").is_empty());
    assert_eq!(ctl.store().active_ids(), before);
}

#[test]
fn mobile_select_skills_hides_about() {
    let mut ctl = phone();
    select(&mut ctl, Section::About);
    assert_eq!(ctl.store().active_ids(), vec![Section::About]);
    select(&mut ctl, Section::Skills);
    assert!(!visible(&ctl, Section::About));
    assert_eq!(ctl.store().active_ids(), vec![Section::Skills]);
}

// =============================================================
// close / bring_to_front
// =============================================================

#[test]
fn close_card_only_hides() {
    let mut ctl = desktop();
    assert_eq!(ctl.close_card(Section::Welcome), vec![Action::RenderNeeded]);
    assert!(!visible(&ctl, Section::Welcome));
    assert_eq!(ctl.store().len(), 7);
    assert_eq!(ctl.active_card(), None);
}

#[test]
fn bring_to_front_raises_counter() {
    let mut ctl = desktop();
    let before = ctl.store().highest_z();
    assert_eq!(ctl.bring_to_front(Section::Contact), vec![Action::RenderNeeded]);
    assert_eq!(ctl.store().highest_z(), before + 1);
}

// =============================================================
// commit
// =============================================================

#[test]
fn drag_commit_moves_and_raises() {
    let mut ctl = desktop();
    select(&mut ctl, Section::About);
    let mut card = CardInteraction::new(ctl.store().get(Section::Welcome).unwrap());
    card.begin_drag(Point::new(0.0, 0.0));
    card.pointer_move(Point::new(40.0, 10.0), ctl.workspace().scale());
    let commit = card.release().unwrap();

    assert_eq!(ctl.commit(Section::Welcome, commit), vec![Action::RenderNeeded]);
    assert_eq!(ctl.store().get(Section::Welcome).unwrap().position, Point::new(340.0, 160.0));
    assert_eq!(ctl.store().topmost_visible(), Some(Section::Welcome));
}

#[test]
fn drag_on_zoomed_workspace_moves_in_workspace_units() {
    let mut ctl = desktop();
    ctl.workspace_mut().zoom_in();
    ctl.workspace_mut().zoom_in();
    let scale = ctl.workspace().scale();
    let mut card = CardInteraction::new(ctl.store().get(Section::Welcome).unwrap());
    card.begin_drag(Point::new(0.0, 0.0));
    card.pointer_move(Point::new(144.0, 0.0), scale);
    ctl.commit(Section::Welcome, card.release().unwrap());
    let x = ctl.store().get(Section::Welcome).unwrap().position.x;
    assert!((x - 400.0).abs() < 1e-9);
}

#[test]
fn resizing_projects_to_150_commits_280() {
    let handle = MemoryStorage::new();
    let mut ctl = LayoutController::new(Viewport::new(1200.0, 800.0), Box::new(handle.clone()));
    let record = ctl.store().get(Section::Projects).unwrap().clone();
    let mut card = CardInteraction::new(&record);
    card.begin_resize(ResizeCorner::SouthEast, Point::new(0.0, 0.0));
    card.pointer_move(Point::new(150.0 - record.size.width, 0.0), 1.0);
    let actions = ctl.commit(Section::Projects, card.release().unwrap());

    assert!(actions.contains(&Action::SizesPersisted));
    let projects = ctl.store().get(Section::Projects).unwrap();
    assert_eq!(projects.size.width, 280.0);
    assert_eq!(projects.position, record.position);
    let saved = decode_sizes(&handle.value().unwrap()).unwrap();
    assert_eq!(saved[&Section::Projects].width, 280.0);
}

#[test]
fn failed_size_write_is_not_reported_as_persisted() {
    let mut ctl = LayoutController::new(Viewport::new(1200.0, 800.0), Box::new(FullStorage));
    let commit = CardCommit::Resized { position: Point::new(300.0, 150.0), size: Size::new(700.0, 520.0) };
    let actions = ctl.commit(Section::Welcome, commit);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(ctl.store().get(Section::Welcome).unwrap().size, Size::new(700.0, 520.0));
}

#[test]
fn north_west_resize_commit_moves_anchor() {
    let mut ctl = desktop();
    let record = ctl.store().get(Section::Welcome).unwrap().clone();
    let mut card = CardInteraction::new(&record);
    card.begin_resize(ResizeCorner::NorthWest, Point::new(0.0, 0.0));
    card.pointer_move(Point::new(-50.0, -20.0), 1.0);
    ctl.commit(Section::Welcome, card.release().unwrap());
    let welcome = ctl.store().get(Section::Welcome).unwrap();
    assert_eq!(welcome.position, record.position.offset_by(-50.0, -20.0));
    assert_eq!(welcome.size, Size::new(650.0, 520.0));
}

// =============================================================
// set_viewport
// =============================================================

#[test]
fn resize_within_desktop_keeps_dragged_cards() {
    let mut ctl = desktop();
    ctl.commit(Section::Welcome, CardCommit::Moved { position: Point::new(42.0, 17.0) });
    let actions = ctl.set_viewport(1201.0, 800.0);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(ctl.store().get(Section::Welcome).unwrap().position, Point::new(42.0, 17.0));
    ctl.set_viewport(1600.0, 1000.0);
    assert_eq!(ctl.store().get(Section::Welcome).unwrap().position, Point::new(42.0, 17.0));
}

#[test]
fn returning_to_desktop_recalculates_for_new_size() {
    let mut ctl = desktop();
    ctl.set_viewport(390.0, 844.0);
    ctl.set_viewport(1600.0, 1000.0);
    assert_eq!(ctl.store().get(Section::Welcome).unwrap().position, Point::new(500.0, 250.0));
}

#[test]
fn desktop_to_mobile_keeps_only_active_card() {
    let mut ctl = desktop();
    select(&mut ctl, Section::Skills);
    select(&mut ctl, Section::About);
    let actions = ctl.set_viewport(390.0, 844.0);
    assert!(actions.contains(&Action::ClassChanged(ViewportClass::Mobile)));
    assert_eq!(ctl.store().active_ids(), vec![Section::About]);
    assert!(!ctl.workspace().is_enabled());
}

#[test]
fn mobile_resize_skips_recalculation() {
    let mut ctl = desktop();
    ctl.set_viewport(390.0, 844.0);
    let before = ctl.store().get(Section::Welcome).unwrap().clone();
    let actions = ctl.set_viewport(360.0, 700.0);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(ctl.store().get(Section::Welcome).unwrap(), &before);
}

#[test]
fn desktop_mobile_desktop_restores_defaults() {
    let mut ctl = desktop();
    let baseline: Vec<(Point, Size)> = ctl.store().records().iter().map(|r| (r.position, r.size)).collect();
    ctl.set_viewport(390.0, 844.0);
    let actions = ctl.set_viewport(1200.0, 800.0);
    assert!(actions.contains(&Action::ClassChanged(ViewportClass::Desktop)));
    assert!(ctl.workspace().is_enabled());
    let after: Vec<(Point, Size)> = ctl.store().records().iter().map(|r| (r.position, r.size)).collect();
    assert_eq!(after, baseline);
}

#[test]
fn zoom_survives_a_trip_through_mobile() {
    let mut ctl = desktop();
    ctl.workspace_mut().zoom_in();
    ctl.set_viewport(390.0, 844.0);
    assert_eq!(ctl.workspace().scale(), 1.0);
    ctl.set_viewport(1200.0, 800.0);
    assert!((ctl.workspace().scale() - 1.2).abs() < 1e-9);
}
