use crate::constants::*;
use crate::storage;
use crate::viewer::ActiveViewer;
use crate::{dom, views, xr};
use armenu_core::view::{admin_entries, dish_detail, menu_cards};
use armenu_core::xr::{ArAvailability, XrSessionInit};
use armenu_core::{BlobStore, Catalog, DishRecord, DishRepository, MenuError};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const SCREENS: [&str; 3] = [MENU_SCREEN_ID, AR_SCREEN_ID, ADMIN_SCREEN_ID];

/// Page-level controller. State flows one way: mutate, then re-render.
pub struct App {
    document: web::Document,
    catalog: RefCell<Catalog<Box<dyn BlobStore>>>,
    viewer: RefCell<Option<ActiveViewer>>,
    ar: Cell<ArAvailability>,
}

impl App {
    pub fn new(document: web::Document) -> anyhow::Result<Self> {
        let catalog = Catalog::open(DishRepository::new(storage::open_store()))?;
        Ok(Self {
            document,
            catalog: RefCell::new(catalog),
            viewer: RefCell::new(None),
            ar: Cell::new(ArAvailability::Unknown),
        })
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    pub fn dishes(&self) -> Vec<DishRecord> {
        self.catalog.borrow().dishes().to_vec()
    }

    pub fn render_lists(&self) {
        let dishes = self.dishes();
        if let Err(e) = views::render_menu(&self.document, &menu_cards(&dishes)) {
            log::error!("[menu] render failed: {:?}", e);
        }
        if let Err(e) = views::render_admin_list(&self.document, &admin_entries(&dishes)) {
            log::error!("[admin] render failed: {:?}", e);
        }
    }

    pub fn set_ar_availability(&self, availability: ArAvailability) {
        self.ar.set(availability);
        if !availability.can_start() {
            views::mark_ar_unavailable(&self.document);
        }
    }

    pub fn open_dish(&self, id: &str) {
        let Some(dish) = self.catalog.borrow().get(id).cloned() else {
            log::warn!("[menu] no dish with id {}", id);
            return;
        };
        // Tear down any previous viewer before building the next one.
        self.viewer.borrow_mut().take();

        dom::show_screen(&self.document, AR_SCREEN_ID, &SCREENS);
        if let Err(e) = views::render_detail(&self.document, &dish_detail(&dish)) {
            log::error!("[viewer] detail render failed: {:?}", e);
        }
        views::set_viewer_controls_visible(&self.document, true);
        match ActiveViewer::open(&self.document, dish) {
            Ok(v) => *self.viewer.borrow_mut() = Some(v),
            Err(e) => {
                log::error!("[viewer] failed to open: {:?}", e);
                dom::alert(&MenuError::ModelLoadFailure(e.to_string()).user_message());
                self.show_menu();
            }
        }
    }

    pub fn close_viewer(&self) {
        self.viewer.borrow_mut().take();
        views::show_loading(&self.document, false);
        self.show_menu();
    }

    pub fn show_menu(&self) {
        dom::show_screen(&self.document, MENU_SCREEN_ID, &SCREENS);
    }

    pub fn show_admin(&self) {
        dom::show_screen(&self.document, ADMIN_SCREEN_ID, &SCREENS);
        self.render_lists();
    }

    pub fn reset_view(&self) {
        if let Some(v) = self.viewer.borrow().as_ref() {
            v.reset();
        }
    }

    pub fn add_dish(&self, dish: DishRecord) -> Result<(), MenuError> {
        self.catalog.borrow_mut().add(dish)?;
        self.render_lists();
        Ok(())
    }

    pub fn delete_dish(&self, id: &str) -> Result<bool, MenuError> {
        let removed = self.catalog.borrow_mut().delete(id)?;
        if removed {
            self.render_lists();
        }
        Ok(removed)
    }

    pub async fn start_ar(self: Rc<Self>) {
        if !self.ar.get().can_start() {
            dom::alert(&MenuError::UnsupportedEnvironment.user_message());
            return;
        }
        if xr::probe().await != ArAvailability::Supported {
            self.set_ar_availability(ArAvailability::Unsupported);
            dom::alert(&MenuError::UnsupportedEnvironment.user_message());
            return;
        }
        let session = match xr::request_session(&XrSessionInit::default()).await {
            Ok(s) => s,
            Err(e) => {
                dom::alert(&e.user_message());
                return;
            }
        };
        let Some((viewer_session, scene)) = self
            .viewer
            .borrow()
            .as_ref()
            .map(|v| (v.session().clone(), v.scene().clone()))
        else {
            // Viewer closed while the permission prompt was up.
            xr::end_session(&session);
            return;
        };
        if let Err(e) = scene.attach_xr_session(&session).await {
            log::error!("[xr] {:?}", e);
            xr::end_session(&session);
            dom::alert(
                &MenuError::SessionRequestDenied {
                    cause: armenu_core::DenialCause::Other(e.to_string()),
                }
                .user_message(),
            );
            return;
        }
        let bound = match self.viewer.borrow().as_ref() {
            Some(v) if Rc::ptr_eq(v.session(), &viewer_session) => {
                v.bind_xr_session(session.clone());
                true
            }
            _ => false,
        };
        if !bound {
            xr::end_session(&session);
            return;
        }
        viewer_session.borrow_mut().enter_ar();
        views::set_viewer_controls_visible(&self.document, false);

        let document = self.document.clone();
        let weak_session = Rc::downgrade(&viewer_session);
        let on_end = Closure::once_into_js(move || {
            if let Some(s) = weak_session.upgrade() {
                s.borrow_mut().exit_ar();
            }
            views::set_viewer_controls_visible(&document, true);
        });
        if let Ok(target) = session.dyn_into::<web::EventTarget>() {
            _ = target.add_event_listener_with_callback("end", on_end.unchecked_ref());
        }
    }
}
