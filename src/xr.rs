//! WebXR access through `navigator.xr`, looked up dynamically so browsers
//! without the API simply report "unsupported".

use armenu_core::xr::{ArAvailability, XrSessionInit};
use armenu_core::{DenialCause, MenuError};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn navigator_xr() -> Option<JsValue> {
    let navigator = web::window()?.navigator();
    let xr = Reflect::get(navigator.as_ref(), &JsValue::from_str("xr")).ok()?;
    (!xr.is_undefined() && !xr.is_null()).then_some(xr)
}

fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<Promise, JsValue> {
    let f: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    let out = match args {
        [a] => f.call1(target, a)?,
        [a, b] => f.call2(target, a, b)?,
        _ => f.call0(target)?,
    };
    out.dyn_into::<Promise>()
}

pub async fn probe() -> ArAvailability {
    let Some(xr) = navigator_xr() else {
        return ArAvailability::Unsupported;
    };
    let mode = JsValue::from_str(XrSessionInit::default().mode());
    let result = match call_method(&xr, "isSessionSupported", &[&mode]) {
        Ok(p) => JsFuture::from(p).await.map(|v| v.as_bool().unwrap_or(false)),
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        log::warn!("[xr] capability probe rejected: {:?}", e);
    }
    ArAvailability::from_probe(result)
}

pub async fn request_session(init: &XrSessionInit) -> Result<JsValue, MenuError> {
    let xr = navigator_xr().ok_or(MenuError::UnsupportedEnvironment)?;
    let options = js_sys::JSON::parse(&init.to_json()?).map_err(|e| MenuError::SessionRequestDenied {
        cause: DenialCause::Other(format!("{:?}", e)),
    })?;
    let mode = JsValue::from_str(init.mode());
    let attempt = match call_method(&xr, "requestSession", &[&mode, &options]) {
        Ok(p) => JsFuture::from(p).await,
        Err(e) => Err(e),
    };
    attempt.map_err(|e| {
        let name = Reflect::get(&e, &JsValue::from_str("name"))
            .ok()
            .and_then(|n| n.as_string())
            .unwrap_or_default();
        log::error!("[xr] requestSession failed: {} {:?}", name, e);
        MenuError::SessionRequestDenied {
            cause: DenialCause::from_exception_name(&name),
        }
    })
}

/// Ask a running session to end. Already-ended sessions are ignored.
pub fn end_session(session: &JsValue) {
    match call_method(session, "end", &[]) {
        Ok(p) => spawn_local(async move {
            if let Err(e) = JsFuture::from(p).await {
                log::debug!("[xr] end() rejected: {:?}", e);
            }
        }),
        Err(e) => log::debug!("[xr] end() unavailable: {:?}", e),
    }
}
