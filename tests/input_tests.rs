// Host-side tests for pure input mapping functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use armenu_core::gesture::{GestureOutput, GestureTracker, PointerPhase};
use input::*;

#[test]
fn every_registered_event_type_maps_to_a_phase() {
    for t in POINTER_EVENT_TYPES {
        assert!(phase_for_event_type(t).is_some(), "{t} unmapped");
    }
    assert_eq!(phase_for_event_type("pointerdown"), Some(PointerPhase::Down));
    assert_eq!(phase_for_event_type("pointermove"), Some(PointerPhase::Move));
    assert_eq!(phase_for_event_type("pointerup"), Some(PointerPhase::Up));
    assert_eq!(phase_for_event_type("pointercancel"), Some(PointerPhase::Cancel));
    assert_eq!(phase_for_event_type("click"), None);
}

#[test]
fn raw_pointer_keeps_missing_coordinates_missing() {
    let ev = raw_pointer(PointerPhase::Move, 3, Some(12.5), None);
    assert_eq!(ev.pointer_id, 3);
    assert_eq!(ev.x, Some(12.5));
    assert_eq!(ev.y, None);

    let mut tracker = GestureTracker::new();
    tracker.handle(raw_pointer(PointerPhase::Down, 3, Some(0.0), Some(0.0)));
    assert_eq!(tracker.handle(ev), None);
    assert_eq!(
        tracker.handle(raw_pointer(PointerPhase::Move, 3, Some(4.0), Some(1.0))),
        Some(GestureOutput::Pan(glam::Vec2::new(4.0, 1.0)))
    );
}

#[test]
fn wheel_direction_follows_delta_sign() {
    assert_eq!(wheel_direction(120.0), 1.0);
    assert_eq!(wheel_direction(-3.0), -1.0);
    // Horizontal-only scrolls report zero and zoom in, as the wheel handler always has.
    assert_eq!(wheel_direction(0.0), -1.0);
}
