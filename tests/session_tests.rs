// Host-side tests for the viewer session: gesture wiring, idle spin and
// model lifecycle.

use armenu_core::constants::*;
use armenu_core::*;
use glam::Vec2;

#[derive(Default)]
struct RecordingSink {
    frames: Vec<Transform>,
}

impl SceneSink for RecordingSink {
    fn apply_transform(&mut self, transform: &Transform) {
        self.frames.push(*transform);
    }
}

fn loaded_session() -> ViewerSession {
    let mut s = ViewerSession::new(DishRecord::default_dish());
    s.model_loaded(0.5).unwrap();
    s
}

#[test]
fn base_scale_comes_from_dish_size_and_bounding_box() {
    let mut s = ViewerSession::new(DishRecord::default_dish());
    let base = s.model_loaded(0.5).unwrap();
    assert!((base - 0.6).abs() < 1e-6);
    let t = s.transform().unwrap();
    assert!((t.base_scale - 0.6).abs() < 1e-6);
    assert_eq!(t.scale_factor, 1.0);
    assert!((t.position.y - 0.01).abs() < 1e-6);
}

#[test]
fn input_before_load_has_no_effect() {
    let mut s = ViewerSession::new(DishRecord::default_dish());
    assert_eq!(s.model_state(), ModelState::Loading);
    s.handle_pointer(RawPointerEvent::down(1, 0.0, 0.0));
    assert_eq!(s.handle_pointer(RawPointerEvent::moved(1, 50.0, 0.0)), None);
    s.handle_wheel(-1.0);
    s.advance_frame();
    s.reset();
    assert!(s.transform().is_none());

    let mut sink = RecordingSink::default();
    s.render(&mut sink);
    assert!(sink.frames.is_empty());

    // The drag that began during loading continues cleanly afterwards.
    s.model_loaded(0.5).unwrap();
    let out = s.handle_pointer(RawPointerEvent::moved(1, 60.0, 0.0));
    assert_eq!(out, Some(GestureOutput::Pan(Vec2::new(10.0, 0.0))));
    assert!((s.transform().unwrap().rotation.y - 0.1).abs() < 1e-6);
}

#[test]
fn pinch_and_wheel_scale_the_model() {
    let mut s = loaded_session();
    s.handle_pointer(RawPointerEvent::down(1, 0.0, 0.0));
    s.handle_pointer(RawPointerEvent::down(2, 100.0, 0.0));
    s.handle_pointer(RawPointerEvent::moved(2, 200.0, 0.0));
    assert!((s.transform().unwrap().scale_factor - 2.0).abs() < 1e-6);
    s.handle_wheel(1.0);
    assert!((s.transform().unwrap().scale_factor - 1.8).abs() < 1e-6);
}

#[test]
fn idle_spin_pauses_during_pan_and_resumes_after() {
    let mut s = loaded_session();
    for _ in 0..3 {
        s.advance_frame();
    }
    let spun = 3.0 * IDLE_SPIN_PER_FRAME;
    assert!((s.transform().unwrap().rotation.y - spun).abs() < 1e-6);

    s.handle_pointer(RawPointerEvent::down(1, 0.0, 0.0));
    for _ in 0..5 {
        s.advance_frame();
    }
    assert!((s.transform().unwrap().rotation.y - spun).abs() < 1e-6);

    s.handle_pointer(RawPointerEvent::moved(1, 10.0, 0.0));
    let after_pan = spun + 10.0 * PAN_SENSITIVITY;
    assert!((s.transform().unwrap().rotation.y - after_pan).abs() < 1e-6);
    s.advance_frame();
    assert!((s.transform().unwrap().rotation.y - after_pan).abs() < 1e-6);

    s.handle_pointer(RawPointerEvent::up(1));
    s.advance_frame();
    s.advance_frame();
    let resumed = after_pan + 2.0 * IDLE_SPIN_PER_FRAME;
    assert!((s.transform().unwrap().rotation.y - resumed).abs() < 1e-6);
}

#[test]
fn rendering_only_reads_state() {
    let mut s = loaded_session();
    s.advance_frame();
    let mut sink = RecordingSink::default();
    s.render(&mut sink);
    s.render(&mut sink);
    assert_eq!(sink.frames.len(), 2);
    assert_eq!(sink.frames[0], sink.frames[1]);
    assert_eq!(sink.frames[0], *s.transform().unwrap());
}

#[test]
fn reset_twice_equals_reset_once() {
    let mut s = loaded_session();
    s.handle_pointer(RawPointerEvent::down(1, 0.0, 0.0));
    s.handle_pointer(RawPointerEvent::moved(1, 33.0, 12.0));
    s.handle_wheel(-1.0);
    s.reset();
    let once = *s.transform().unwrap();
    s.reset();
    assert_eq!(*s.transform().unwrap(), once);
    assert_eq!(once.rotation, Vec2::ZERO);
    assert_eq!(once.scale_factor, 1.0);
}

#[test]
fn failed_load_reports_model_load_failure() {
    let mut s = ViewerSession::new(DishRecord::default_dish());
    let err = s.model_failed("404");
    assert!(matches!(err, MenuError::ModelLoadFailure(ref r) if r == "404"));
    assert_eq!(s.model_state(), ModelState::Failed);
    assert!(s.transform().is_none());
}

#[test]
fn failed_reload_keeps_displayed_model() {
    let mut s = loaded_session();
    s.model_failed("network");
    assert_eq!(s.model_state(), ModelState::Ready);
    assert!(s.transform().is_some());
}

#[test]
fn degenerate_bounding_box_is_a_load_failure() {
    let mut s = ViewerSession::new(DishRecord::default_dish());
    assert!(matches!(
        s.model_loaded(0.0),
        Err(MenuError::ModelLoadFailure(_))
    ));
    assert!(s.transform().is_none());
}

#[test]
fn entering_ar_places_model_in_front_of_viewer() {
    let mut s = loaded_session();
    s.handle_pointer(RawPointerEvent::down(1, 0.0, 0.0));
    s.enter_ar();
    assert!(s.is_in_ar());
    assert_eq!(s.transform().unwrap().position, AR_PLACEMENT);
    assert_eq!(s.tracker().active_pointer_count(), 0);
    s.exit_ar();
    assert!(!s.is_in_ar());
    s.reset();
    assert!((s.transform().unwrap().position.y - 0.01).abs() < 1e-6);
}

#[test]
fn new_session_starts_clean() {
    let mut first = loaded_session();
    first.handle_pointer(RawPointerEvent::down(1, 0.0, 0.0));
    first.handle_pointer(RawPointerEvent::moved(1, 80.0, 0.0));
    drop(first);

    let second = loaded_session();
    let t = second.transform().unwrap();
    assert_eq!(t.rotation, Vec2::ZERO);
    assert_eq!(t.scale_factor, 1.0);
    assert_eq!(second.tracker().active_pointer_count(), 0);
}
