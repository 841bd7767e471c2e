#![allow(clippy::float_cmp)]

use super::*;
use crate::viewport::Viewport;

fn record(section: Section) -> CardRecord {
    let mut record = CardRecord::for_section(section, Viewport::new(1200.0, 800.0));
    record.position = Point::new(100.0, 100.0);
    record.size = Size::new(500.0, 550.0);
    record
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_interaction_mirrors_record() {
    let card = CardInteraction::new(&record(Section::About));
    assert_eq!(card.id(), Section::About);
    assert!(card.is_idle());
    assert_eq!(card.frame().position, pt(100.0, 100.0));
    assert_eq!(card.frame().size, Size::new(500.0, 550.0));
    assert!(!card.frame().elevated);
}

// =============================================================
// Dragging
// =============================================================

#[test]
fn drag_follows_cumulative_offset() {
    let mut card = CardInteraction::new(&record(Section::About));
    assert!(card.begin_drag(pt(10.0, 10.0)));
    assert!(card.is_dragging());
    assert!(card.frame().elevated);

    card.pointer_move(pt(20.0, 15.0), 1.0);
    card.pointer_move(pt(60.0, 40.0), 1.0);
    assert_eq!(card.frame().position, pt(150.0, 130.0));
}

#[test]
fn drag_converts_screen_offset_by_scale() {
    let mut card = CardInteraction::new(&record(Section::About));
    card.begin_drag(pt(0.0, 0.0));
    card.pointer_move(pt(100.0, 50.0), 2.0);
    assert_eq!(card.frame().position, pt(150.0, 125.0));
}

#[test]
fn drag_release_commits_position_and_drops_elevation() {
    let mut card = CardInteraction::new(&record(Section::About));
    card.begin_drag(pt(0.0, 0.0));
    card.pointer_move(pt(-30.0, 5.0), 1.0);
    let commit = card.release();
    assert_eq!(commit, Some(CardCommit::Moved { position: pt(70.0, 105.0) }));
    assert!(card.is_idle());
    assert!(!card.frame().elevated);
}

#[test]
fn release_without_gesture_commits_nothing() {
    let mut card = CardInteraction::new(&record(Section::About));
    assert_eq!(card.release(), None);
}

#[test]
fn move_while_idle_changes_nothing() {
    let mut card = CardInteraction::new(&record(Section::About));
    assert!(!card.pointer_move(pt(500.0, 500.0), 1.0));
    assert_eq!(card.frame().position, pt(100.0, 100.0));
}

// =============================================================
// Resizing
// =============================================================

#[test]
fn resize_uses_incremental_deltas() {
    let mut card = CardInteraction::new(&record(Section::Projects));
    assert!(card.begin_resize(ResizeCorner::SouthEast, pt(0.0, 0.0)));
    card.pointer_move(pt(10.0, 10.0), 1.0);
    card.pointer_move(pt(25.0, 30.0), 1.0);
    assert_eq!(card.frame().size, Size::new(525.0, 580.0));
    assert_eq!(card.frame().position, pt(100.0, 100.0));
}

#[test]
fn resize_below_minimum_commits_minimum_width() {
    let mut card = CardInteraction::new(&record(Section::Projects));
    card.begin_resize(ResizeCorner::SouthEast, pt(600.0, 650.0));
    card.pointer_move(pt(250.0, 650.0), 1.0);
    let commit = card.release();
    let Some(CardCommit::Resized { size, .. }) = commit else {
        panic!("expected a resize commit, got {commit:?}");
    };
    assert_eq!(size.width, 280.0);
    assert_eq!(size.height, 550.0);
}

#[test]
fn resize_recovers_after_clamping() {
    let mut card = CardInteraction::new(&record(Section::Projects));
    card.begin_resize(ResizeCorner::SouthEast, pt(0.0, 0.0));
    card.pointer_move(pt(-400.0, 0.0), 1.0);
    card.pointer_move(pt(-380.0, 0.0), 1.0);
    assert_eq!(card.frame().size.width, 300.0);
}

#[test]
fn north_west_resize_moves_position() {
    let mut card = CardInteraction::new(&record(Section::About));
    card.begin_resize(ResizeCorner::NorthWest, pt(100.0, 100.0));
    card.pointer_move(pt(80.0, 90.0), 1.0);
    let commit = card.release();
    assert_eq!(
        commit,
        Some(CardCommit::Resized { position: pt(80.0, 90.0), size: Size::new(520.0, 560.0) })
    );
}

// =============================================================
// Exclusivity and mobile
// =============================================================

#[test]
fn drag_and_resize_are_mutually_exclusive() {
    let mut card = CardInteraction::new(&record(Section::About));
    assert!(card.begin_drag(pt(0.0, 0.0)));
    assert!(!card.begin_resize(ResizeCorner::NorthEast, pt(0.0, 0.0)));
    card.release();
    assert!(card.begin_resize(ResizeCorner::NorthEast, pt(0.0, 0.0)));
    assert!(!card.begin_drag(pt(0.0, 0.0)));
}

#[test]
fn mobile_refuses_gestures() {
    let mut card = CardInteraction::new(&record(Section::About));
    card.set_mobile(true);
    assert!(card.is_mobile());
    assert!(!card.begin_drag(pt(0.0, 0.0)));
    assert!(!card.begin_resize(ResizeCorner::SouthEast, pt(0.0, 0.0)));
}

#[test]
fn switching_to_mobile_abandons_gesture() {
    let mut card = CardInteraction::new(&record(Section::About));
    card.begin_drag(pt(0.0, 0.0));
    card.set_mobile(true);
    assert!(card.is_idle());
    assert_eq!(card.release(), None);
}

// =============================================================
// sync / cancel
// =============================================================

#[test]
fn sync_adopts_record_when_idle() {
    let mut card = CardInteraction::new(&record(Section::About));
    let mut moved = record(Section::About);
    moved.position = pt(7.0, 8.0);
    card.sync(&moved);
    assert_eq!(card.frame().position, pt(7.0, 8.0));
}

#[test]
fn sync_is_ignored_mid_gesture() {
    let mut card = CardInteraction::new(&record(Section::About));
    card.begin_drag(pt(0.0, 0.0));
    card.pointer_move(pt(50.0, 0.0), 1.0);
    let mut moved = record(Section::About);
    moved.position = pt(7.0, 8.0);
    card.sync(&moved);
    assert_eq!(card.frame().position, pt(150.0, 100.0));
}

#[test]
fn cancel_reverts_to_record() {
    let rec = record(Section::About);
    let mut card = CardInteraction::new(&rec);
    card.begin_resize(ResizeCorner::SouthWest, pt(0.0, 0.0));
    card.pointer_move(pt(-100.0, 100.0), 1.0);
    card.cancel(&rec);
    assert!(card.is_idle());
    assert_eq!(card.frame().size, rec.size);
    assert_eq!(card.frame().position, rec.position);
}
