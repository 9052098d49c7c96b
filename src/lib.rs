#![cfg(target_arch = "wasm32")]
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod app;
mod constants;
mod dom;
mod events;
mod files;
mod frame;
mod input;
mod scene;
mod storage;
mod teardown;
mod viewer;
mod views;
mod xr;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("armenu-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            let message = match e.downcast_ref::<armenu_core::MenuError>() {
                Some(menu_err) => menu_err.user_message(),
                None => constants::STARTUP_FAILED_MESSAGE.to_string(),
            };
            dom::alert(&message);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let app = Rc::new(app::App::new(document)?);
    app.render_lists();
    events::wire_navigation(&app);
    events::wire_admin_form(&app);

    let availability = xr::probe().await;
    log::info!("[xr] availability={:?}", availability);
    app.set_ar_availability(availability);
    Ok(())
}
