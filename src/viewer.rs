use crate::constants::AR_CONTAINER_ID;
use crate::events::{pointer, EventListener};
use crate::frame::{self, FrameContext};
use crate::scene::Scene;
use crate::teardown::Teardown;
use crate::{dom, views, xr};
use armenu_core::constants::{CAMERA_EYE, CAMERA_EYE_INITIAL, CAMERA_TARGET};
use armenu_core::{DishRecord, MenuError, ViewerSession};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// The open detail/AR view of one dish. Dropping it ends a running AR
/// session, stops the render loop, detaches every listener it registered
/// and frees the renderer.
pub struct ActiveViewer {
    session: Rc<RefCell<ViewerSession>>,
    scene: Scene,
    teardown: RefCell<Teardown>,
    _listeners: Vec<EventListener>,
    _frame: Closure<dyn FnMut()>,
}

impl ActiveViewer {
    pub fn open(document: &web::Document, dish: DishRecord) -> anyhow::Result<Self> {
        let container = dom::element_by_id::<web::Element>(document, AR_CONTAINER_ID)?;
        let scene = Scene::create(&container)?;
        // From here on every early return still disposes the renderer.
        let mut teardown = Teardown::new();
        let scene_for_dispose = scene.clone();
        teardown.push(move || scene_for_dispose.dispose());
        scene.look_from(CAMERA_EYE_INITIAL, CAMERA_TARGET);

        let model_url = dish.model_reference.clone();
        let session = Rc::new(RefCell::new(ViewerSession::new(dish)));

        let mut listeners = pointer::wire_input_handlers(&scene.canvas(), &session)?;
        if let Some(window) = web::window() {
            let scene_resize = scene.clone();
            let window_for_size = window.clone();
            listeners.push(EventListener::new(window.as_ref(), "resize", move |_| {
                let w = window_for_size.inner_width().ok().and_then(|v| v.as_f64());
                let h = window_for_size.inner_height().ok().and_then(|v| v.as_f64());
                if let (Some(w), Some(h)) = (w, h) {
                    scene_resize.resize(w, h.max(1.0));
                }
            })?);
        }

        let frame = frame::start_loop(FrameContext {
            session: session.clone(),
            scene: scene.clone(),
        });
        let scene_for_loop = scene.clone();
        teardown.push(move || scene_for_loop.set_frame_callback(None));

        spawn_model_load(
            document.clone(),
            Rc::downgrade(&session),
            scene.clone(),
            model_url,
        );

        Ok(Self {
            session,
            scene,
            teardown: RefCell::new(teardown),
            _listeners: listeners,
            _frame: frame,
        })
    }

    pub fn session(&self) -> &Rc<RefCell<ViewerSession>> {
        &self.session
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn reset(&self) {
        self.session.borrow_mut().reset();
    }

    /// Tie an XR session to this viewer so closing the viewer ends it.
    pub fn bind_xr_session(&self, xr_session: JsValue) {
        self.teardown
            .borrow_mut()
            .push(move || xr::end_session(&xr_session));
    }
}

impl Drop for ActiveViewer {
    fn drop(&mut self) {
        self.teardown.get_mut().run();
        log::info!("[viewer] closed '{}'", self.session.borrow().dish().name);
    }
}

// The session is held weakly: if the viewer closes mid-load the result is
// dropped instead of touching a disposed scene.
fn spawn_model_load(
    document: web::Document,
    session: Weak<RefCell<ViewerSession>>,
    scene: Scene,
    url: String,
) {
    views::show_loading(&document, true);
    spawn_local(async move {
        let result = scene.load(&url).await;
        let Some(session) = session.upgrade() else {
            log::debug!("[viewer] load of {} finished after close; ignored", url);
            return;
        };
        views::show_loading(&document, false);
        let outcome: Result<f32, MenuError> = match result {
            Ok(max_dim) => session.borrow_mut().model_loaded(max_dim),
            Err(reason) => Err(session.borrow_mut().model_failed(reason)),
        };
        match outcome {
            Ok(_) => scene.look_from(CAMERA_EYE, CAMERA_TARGET),
            Err(e) => dom::alert(&e.user_message()),
        }
    });
}
