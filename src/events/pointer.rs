use super::listener::EventListener;
use crate::input;
use armenu_core::ViewerSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn read_coord(ev: &web::Event, name: &str) -> Option<f64> {
    js_sys::Reflect::get(ev.as_ref(), &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.as_f64())
}

/// Route canvas pointer and wheel input into the session. Dropping the
/// returned listeners detaches them.
pub fn wire_input_handlers(
    canvas: &web::HtmlCanvasElement,
    session: &Rc<RefCell<ViewerSession>>,
) -> anyhow::Result<Vec<EventListener>> {
    let target: &web::EventTarget = canvas.as_ref();
    let mut listeners = Vec::with_capacity(input::POINTER_EVENT_TYPES.len() + 1);

    for event_type in input::POINTER_EVENT_TYPES {
        let session = session.clone();
        let canvas = canvas.clone();
        listeners.push(EventListener::active(target, event_type, move |ev: web::Event| {
            let Some(pev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let Some(phase) = input::phase_for_event_type(&ev.type_()) else {
                return;
            };
            if event_type == "pointerdown" {
                _ = canvas.set_pointer_capture(pev.pointer_id());
            }
            let raw = input::raw_pointer(
                phase,
                pev.pointer_id(),
                read_coord(&ev, "clientX"),
                read_coord(&ev, "clientY"),
            );
            if let Some(out) = session.borrow_mut().handle_pointer(raw) {
                log::trace!("[gesture] {:?}", out);
            }
            ev.prevent_default();
        })?);
    }

    let session = session.clone();
    listeners.push(EventListener::active(target, "wheel", move |ev: web::Event| {
        if let Some(wev) = ev.dyn_ref::<web::WheelEvent>() {
            ev.prevent_default();
            session
                .borrow_mut()
                .handle_wheel(input::wheel_direction(wev.delta_y()));
        }
    })?);

    Ok(listeners)
}
