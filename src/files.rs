//! Reads the files picked in the admin form.

use js_sys::{Array, Promise};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct UploadedAssets {
    pub model_url: String,
    pub image_url: Option<String>,
}

fn read_as_data_url(file: &web::File) -> anyhow::Result<Promise> {
    let reader = web::FileReader::new().map_err(|e| anyhow::anyhow!("FileReader: {:?}", e))?;
    let reader_for_promise = reader.clone();
    let promise = Promise::new(&mut move |resolve, reject| {
        let done = reader_for_promise.clone();
        let onload = Closure::once_into_js(move || {
            let result = done.result().unwrap_or(JsValue::NULL);
            _ = resolve.call1(&JsValue::NULL, &result);
        });
        reader_for_promise.set_onload(Some(onload.unchecked_ref()));
        let onerror = Closure::once_into_js(move || {
            _ = reject.call1(&JsValue::NULL, &JsValue::from_str("image read failed"));
        });
        reader_for_promise.set_onerror(Some(onerror.unchecked_ref()));
    });
    reader
        .read_as_data_url(file)
        .map_err(|e| anyhow::anyhow!("readAsDataURL: {:?}", e))?;
    Ok(promise)
}

/// Read the model bytes and the optional image together and wait for both.
/// The model becomes an object URL, the image a data URL.
pub async fn read_assets(
    model: &web::File,
    image: Option<&web::File>,
) -> anyhow::Result<UploadedAssets> {
    let model_read = model.array_buffer();
    let image_read = match image {
        Some(f) => read_as_data_url(f)?,
        None => Promise::resolve(&JsValue::NULL),
    };
    let joined = JsFuture::from(Promise::all(&Array::of2(&model_read, &image_read)))
        .await
        .map_err(|e| anyhow::anyhow!("file read failed: {:?}", e))?;
    let results: Array = joined
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("unexpected read result: {:?}", e))?;

    let parts = Array::of1(&results.get(0));
    let bag = web::BlobPropertyBag::new();
    bag.set_type("application/octet-stream");
    let blob = web::Blob::new_with_buffer_source_sequence_and_options(&parts, &bag)
        .map_err(|e| anyhow::anyhow!("Blob: {:?}", e))?;
    let model_url = web::Url::create_object_url_with_blob(&blob)
        .map_err(|e| anyhow::anyhow!("createObjectURL: {:?}", e))?;

    Ok(UploadedAssets {
        model_url,
        image_url: results.get(1).as_string(),
    })
}
