// Host-side tests for pure CSS helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod css {
    include!("../src/css.rs");
}

use css::*;
use magnet_core::constants::MARKER_ATTR;

#[test]
fn translate_formats_pixels() {
    assert_eq!(translate(0.0, 0.0), "translate(0px, 0px)");
    assert_eq!(translate(0.3, -1.5), "translate(0.3px, -1.5px)");
    assert_eq!(translate(12.0, 4.25), "translate(12px, 4.25px)");
}

#[test]
fn marker_selector() {
    assert_eq!(attribute_selector(MARKER_ATTR), "[data-magnetic]");
}
