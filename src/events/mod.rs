pub mod admin;
pub mod listener;
pub mod pointer;

pub use admin::wire_admin_form;
pub use listener::EventListener;

use crate::app::App;
use crate::constants::*;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Value of `attr` on the nearest ancestor of the event target carrying it.
pub(crate) fn closest_attr(ev: &web::Event, attr: &str) -> Option<String> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    let hit = el.closest(&format!("[{attr}]")).ok()??;
    hit.get_attribute(attr)
}

/// Page-lifetime listeners for screen navigation and viewer controls.
pub fn wire_navigation(app: &Rc<App>) {
    let doc = app.document().clone();

    let a = app.clone();
    dom::add_click_listener(&doc, DISHES_CONTAINER_ID, move |ev| {
        if let Some(id) = closest_attr(&ev, DISH_ID_ATTR) {
            a.open_dish(&id);
        }
    });

    let a = app.clone();
    dom::add_click_listener(&doc, BACK_BUTTON_ID, move |_| a.close_viewer());

    let a = app.clone();
    dom::add_click_listener(&doc, RESET_BUTTON_ID, move |_| a.reset_view());

    let a = app.clone();
    dom::add_click_listener(&doc, START_AR_BUTTON_ID, move |_| {
        spawn_local(a.clone().start_ar());
    });

    let a = app.clone();
    dom::add_click_listener(&doc, ADMIN_BUTTON_ID, move |_| a.show_admin());

    let a = app.clone();
    dom::add_click_listener(&doc, CLOSE_ADMIN_BUTTON_ID, move |_| a.show_menu());
}
