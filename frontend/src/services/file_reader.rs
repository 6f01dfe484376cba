//! Decode a picked file into a data URL for the thumbnail.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

use crate::types::{AppError, AppResult};

/// Read `file` with a `FileReader` and resolve to its data URL.
pub async fn read_as_data_url(file: &File) -> AppResult<String> {
    let reader = FileReader::new()
        .map_err(|e| AppError::FileRead(format!("Failed to create FileReader: {:?}", e)))?;

    let promise = Promise::new(&mut |resolve, reject| {
        let loaded = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = loaded.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        reader.set_onload(Some(onload.unchecked_ref()));

        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("read aborted"));
        });
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader
        .read_as_data_url(file)
        .map_err(|e| AppError::FileRead(format!("Failed to start read: {:?}", e)))?;

    let result = JsFuture::from(promise)
        .await
        .map_err(|e| AppError::FileRead(format!("{:?}", e)))?;

    result
        .as_string()
        .ok_or_else(|| AppError::FileRead("Reader result is not a string".to_string()))
}
