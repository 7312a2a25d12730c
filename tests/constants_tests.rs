// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use magnet_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_factors_are_unit_interval() {
    assert!(DEFAULT_ATTRACTION > 0.0 && DEFAULT_ATTRACTION < 1.0);
    assert!(DEFAULT_SMOOTHING > 0.0 && DEFAULT_SMOOTHING < 1.0);
    assert!(DEFAULT_TRIGGER_DISTANCE > 0.0);
}

#[test]
fn classes_are_distinct() {
    assert_ne!(MAGNETIZED_CLASS, DEFAULT_ACTIVE_CLASS);
    assert!(!MAGNETIZED_CLASS.contains(' '));
    assert!(!DEFAULT_ACTIVE_CLASS.contains(' '));
}

#[test]
fn attributes_are_data_attributes() {
    for attr in [
        MARKER_ATTR,
        DISTANCE_ATTR,
        ATTRACTION_ATTR,
        FRACTION_ATTR,
        SPEED_ATTR,
        MAX_OFFSET_X_ATTR,
        MAX_OFFSET_Y_ATTR,
    ] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
}

#[test]
fn option_keys_are_unique() {
    let keys = [
        OPT_ACTIVE_CLASS,
        OPT_ATTRACTION,
        OPT_DISTANCE,
        OPT_FRACTION,
        OPT_SPEED,
        OPT_DISABLE_ON_TOUCH,
        OPT_MAX_OFFSET_X,
        OPT_MAX_OFFSET_Y,
        OPT_METRIC,
        OPT_ON_ENTER,
        OPT_ON_EXIT,
        OPT_ON_UPDATE,
    ];
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn sample_keys_match_hook_contract() {
    assert_eq!(SAMPLE_DELTA_X, "deltaX");
    assert_eq!(SAMPLE_DELTA_Y, "deltaY");
    assert_eq!(SAMPLE_DISTANCE, "distance");
}
