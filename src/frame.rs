use crate::scene::Scene;
use armenu_core::ViewerSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Everything the per-frame callback touches.
pub struct FrameContext {
    pub session: Rc<RefCell<ViewerSession>>,
    pub scene: Scene,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.session.borrow_mut().advance_frame();
        self.session.borrow().render(&mut self.scene);
    }
}

/// Drive `ctx` from the renderer's animation loop, which keeps running
/// inside an XR session where `requestAnimationFrame` on the window does not.
/// The loop stops when the returned closure is dropped after
/// `Scene::set_frame_callback(None)`.
pub fn start_loop(mut ctx: FrameContext) -> Closure<dyn FnMut()> {
    let scene = ctx.scene.clone();
    let tick = Closure::wrap(Box::new(move || ctx.frame()) as Box<dyn FnMut()>);
    scene.set_frame_callback(Some(tick.as_ref().unchecked_ref()));
    tick
}
