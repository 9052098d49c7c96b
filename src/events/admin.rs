use super::closest_attr;
use crate::app::App;
use crate::constants::*;
use crate::{dom, files};
use armenu_core::dish::generate_id;
use armenu_core::form::{self, DishFormFields};
use armenu_core::MenuError;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn input_value(document: &web::Document, id: &str) -> String {
    if let Ok(el) = dom::element_by_id::<web::HtmlInputElement>(document, id) {
        return el.value();
    }
    dom::element_by_id::<web::HtmlTextAreaElement>(document, id)
        .map(|el| el.value())
        .unwrap_or_default()
}

fn first_file(document: &web::Document, id: &str) -> Option<web::File> {
    dom::element_by_id::<web::HtmlInputElement>(document, id)
        .ok()?
        .files()?
        .get(0)
}

fn read_fields(document: &web::Document) -> (DishFormFields, Option<web::File>, Option<web::File>) {
    let model = first_file(document, FORM_MODEL_ID);
    let image = first_file(document, FORM_IMAGE_ID);
    let fields = DishFormFields {
        name: input_value(document, FORM_NAME_ID),
        description: input_value(document, FORM_DESCRIPTION_ID),
        diameter: input_value(document, FORM_DIAMETER_ID),
        height: input_value(document, FORM_HEIGHT_ID),
        price: input_value(document, FORM_PRICE_ID),
        has_model_file: model.is_some(),
        has_image_file: image.is_some(),
    };
    (fields, model, image)
}

async fn submit(app: Rc<App>) {
    let document = app.document().clone();
    let (fields, model, image) = read_fields(&document);
    let draft = match form::validate(&fields) {
        Ok(d) => d,
        Err(e) => {
            log::warn!("[admin] form rejected: {}", e);
            dom::alert(&e.user_message());
            return;
        }
    };
    let Some(model) = model else {
        dom::alert(&MenuError::MissingRequiredInput("model").user_message());
        return;
    };
    let assets = match files::read_assets(&model, image.as_ref()).await {
        Ok(a) => a,
        Err(e) => {
            log::error!("[admin] {:?}", e);
            dom::alert(&MenuError::ModelLoadFailure(e.to_string()).user_message());
            return;
        }
    };
    let id = generate_id(js_sys::Date::now() as u64, &app.dishes());
    let record = draft.into_record(id, assets.model_url, assets.image_url);
    match app.add_dish(record) {
        Ok(()) => {
            if let Ok(form_el) = dom::element_by_id::<web::HtmlFormElement>(&document, DISH_FORM_ID) {
                form_el.reset();
            }
            dom::alert(DISH_ADDED_MESSAGE);
        }
        Err(e) => {
            log::error!("[admin] save failed: {}", e);
            dom::alert(&e.user_message());
        }
    }
}

/// Form submission and the delete buttons of the admin list.
pub fn wire_admin_form(app: &Rc<App>) {
    let document = app.document().clone();

    if let Some(form_el) = document.get_element_by_id(DISH_FORM_ID) {
        let a = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            spawn_local(submit(a.clone()));
        }) as Box<dyn FnMut(web::Event)>);
        _ = form_el.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let a = app.clone();
    dom::add_click_listener(&document, ADMIN_LIST_ID, move |ev| {
        let Some(id) = closest_attr(&ev, DELETE_ID_ATTR) else {
            return;
        };
        if !dom::confirm(DELETE_CONFIRM_MESSAGE) {
            return;
        }
        if let Err(e) = a.delete_dish(&id) {
            log::error!("[admin] delete failed: {}", e);
            dom::alert(&e.user_message());
        }
    });
}
