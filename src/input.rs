use armenu_core::gesture::{PointerPhase, RawPointerEvent};

/// Pointer listeners registered on the viewer canvas.
pub const POINTER_EVENT_TYPES: [&str; 4] = ["pointerdown", "pointermove", "pointerup", "pointercancel"];

#[inline]
pub fn phase_for_event_type(event_type: &str) -> Option<PointerPhase> {
    match event_type {
        "pointerdown" => Some(PointerPhase::Down),
        "pointermove" => Some(PointerPhase::Move),
        "pointerup" => Some(PointerPhase::Up),
        "pointercancel" => Some(PointerPhase::Cancel),
        _ => None,
    }
}

/// Build a gesture event from what could be read off the DOM event.
/// Missing coordinates are carried through so the tracker can reject them.
#[inline]
pub fn raw_pointer(
    phase: PointerPhase,
    pointer_id: i32,
    client_x: Option<f64>,
    client_y: Option<f64>,
) -> RawPointerEvent {
    RawPointerEvent {
        phase,
        pointer_id,
        x: client_x.map(|v| v as f32),
        y: client_y.map(|v| v as f32),
    }
}

/// Collapse a wheel delta to a zoom direction: positive zooms out.
#[inline]
pub fn wheel_direction(delta_y: f64) -> f32 {
    if delta_y > 0.0 {
        1.0
    } else {
        -1.0
    }
}
