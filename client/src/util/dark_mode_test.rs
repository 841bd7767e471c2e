#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_preference_is_light_without_a_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn stored_values_round_trip() {
    assert_eq!(parse_stored(stored_value(true)), Some(true));
    assert_eq!(parse_stored(stored_value(false)), Some(false));
}

#[test]
fn unknown_stored_value_means_no_preference() {
    assert_eq!(parse_stored("system"), None);
    assert_eq!(parse_stored(""), None);
}
