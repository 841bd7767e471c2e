#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn narrow_viewports_are_mobile() {
    assert_eq!(ViewportClass::classify(375.0), ViewportClass::Mobile);
    assert_eq!(ViewportClass::classify(767.9), ViewportClass::Mobile);
}

#[test]
fn breakpoint_itself_is_desktop() {
    assert_eq!(ViewportClass::classify(768.0), ViewportClass::Desktop);
    assert_eq!(ViewportClass::classify(1920.0), ViewportClass::Desktop);
}

#[test]
fn default_class_is_desktop() {
    assert_eq!(ViewportClass::default(), ViewportClass::Desktop);
    assert!(!ViewportClass::Desktop.is_mobile());
    assert!(ViewportClass::Mobile.is_mobile());
}

#[test]
fn center_is_half_extent() {
    assert_eq!(Viewport::new(1000.0, 600.0).center(), Point::new(500.0, 300.0));
}

#[test]
fn mobile_card_width_is_capped() {
    assert_eq!(Viewport::new(700.0, 900.0).mobile_card_size(), Size::new(450.0, 600.0));
}

#[test]
fn mobile_card_width_leaves_gutter_on_small_phones() {
    assert_eq!(Viewport::new(360.0, 640.0).mobile_card_size(), Size::new(340.0, 600.0));
}

#[test]
fn fit_on_mobile_shrinks_to_screen() {
    let fitted = Viewport::new(390.0, 700.0).fit_on_mobile(Size::new(600.0, 900.0));
    assert_eq!(fitted, Size::new(370.0, 600.0));
}

#[test]
fn fit_on_mobile_keeps_smaller_cards() {
    let fitted = Viewport::new(700.0, 1000.0).fit_on_mobile(Size::new(300.0, 400.0));
    assert_eq!(fitted, Size::new(300.0, 400.0));
}

#[test]
fn mobile_card_size_respects_minimum_on_tiny_screens() {
    assert_eq!(Viewport::new(280.0, 500.0).mobile_card_size(), Size::new(280.0, 600.0));
}

#[test]
fn fit_on_mobile_respects_minimum_on_tiny_screens() {
    let fitted = Viewport::new(240.0, 250.0).fit_on_mobile(Size::new(600.0, 500.0));
    assert_eq!(fitted, Size::new(280.0, 200.0));
}
