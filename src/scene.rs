//! Binding to the external renderer (three.js behind `www/scene.js`).

use armenu_core::constants::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};
use armenu_core::{SceneSink, Transform};
use glam::Vec3;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[wasm_bindgen(module = "/www/scene.js")]
extern "C" {
    #[derive(Debug, Clone)]
    pub type SceneHandle;

    #[wasm_bindgen(js_name = createScene, catch)]
    fn create_scene(
        container: &web::Element,
        fov_degrees: f32,
        near: f32,
        far: f32,
    ) -> Result<SceneHandle, JsValue>;

    #[wasm_bindgen(js_name = setCamera)]
    fn set_camera(h: &SceneHandle, ex: f32, ey: f32, ez: f32, tx: f32, ty: f32, tz: f32);

    #[wasm_bindgen(js_name = loadModel)]
    fn load_model(h: &SceneHandle, url: &str, on_progress: &js_sys::Function) -> js_sys::Promise;

    #[wasm_bindgen(js_name = applyTransform)]
    fn apply_transform(h: &SceneHandle, rx: f32, ry: f32, scale: f32, px: f32, py: f32, pz: f32);

    #[wasm_bindgen(js_name = setAnimationLoop)]
    fn set_animation_loop(h: &SceneHandle, callback: Option<&js_sys::Function>);

    #[wasm_bindgen(js_name = startXrSession)]
    fn start_xr_session(h: &SceneHandle, session: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_name = resize)]
    fn resize(h: &SceneHandle, width: f64, height: f64);

    #[wasm_bindgen(js_name = canvas)]
    fn canvas(h: &SceneHandle) -> web::HtmlCanvasElement;

    #[wasm_bindgen(js_name = dispose)]
    fn dispose(h: &SceneHandle);
}

#[derive(Clone, Debug)]
pub struct Scene {
    handle: SceneHandle,
}

impl Scene {
    pub fn create(container: &web::Element) -> anyhow::Result<Self> {
        let handle = create_scene(container, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_FAR)
            .map_err(|e| anyhow::anyhow!("createScene: {:?}", e))?;
        Ok(Self { handle })
    }

    pub fn look_from(&self, eye: Vec3, target: Vec3) {
        set_camera(&self.handle, eye.x, eye.y, eye.z, target.x, target.y, target.z);
    }

    /// Load a model and resolve to the largest side of its bounding box.
    /// The JS side replaces any previously displayed model only on success.
    pub async fn load(&self, url: &str) -> Result<f32, String> {
        let progress = Closure::wrap(Box::new(|loaded: f64, total: f64| {
            if total > 0.0 {
                log::debug!("[viewer] loading: {:.0}%", loaded / total * 100.0);
            }
        }) as Box<dyn FnMut(f64, f64)>);
        let promise = load_model(&self.handle, url, progress.as_ref().unchecked_ref());
        let result = JsFuture::from(promise).await;
        drop(progress);
        match result {
            Ok(v) => v
                .as_f64()
                .map(|d| d as f32)
                .ok_or_else(|| "loader returned no bounding box".to_string()),
            Err(e) => Err(e.as_string().unwrap_or_else(|| format!("{:?}", e))),
        }
    }

    pub fn set_frame_callback(&self, callback: Option<&js_sys::Function>) {
        set_animation_loop(&self.handle, callback);
    }

    pub async fn attach_xr_session(&self, session: &JsValue) -> anyhow::Result<()> {
        JsFuture::from(start_xr_session(&self.handle, session))
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("setSession: {:?}", e))
    }

    pub fn resize(&self, width: f64, height: f64) {
        resize(&self.handle, width, height);
    }

    pub fn canvas(&self) -> web::HtmlCanvasElement {
        canvas(&self.handle)
    }

    pub fn dispose(&self) {
        dispose(&self.handle);
    }
}

impl SceneSink for Scene {
    fn apply_transform(&mut self, t: &Transform) {
        let s = t.effective_scale();
        apply_transform(
            &self.handle,
            t.rotation.x,
            t.rotation.y,
            s,
            t.position.x,
            t.position.y,
            t.position.z,
        );
    }
}
