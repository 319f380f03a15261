#![recursion_limit = "256"]

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod download;
pub mod error;
pub mod presenter;
pub mod qr_generator;

pub use error::EncodingError;
pub use presenter::{present, QrRequest, RenderResult};
pub use qr_generator::{encode, QrArtifact, QrFormat};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    yew::start_app::<app::Main>();

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedQr {
    file_name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

/// Encodes `{ text, format }` without going through the form.
///
/// Returns `{ fileName, mimeType, bytes }`, or throws the error message.
#[wasm_bindgen(js_name = generateQr)]
pub fn generate_qr(request: JsValue) -> Result<JsValue, JsValue> {
    let request: QrRequest = request
        .into_serde()
        .map_err(|err| JsValue::from_str(&format!("Invalid request: {}", err)))?;

    match present(&request) {
        RenderResult::Success(artifact) => JsValue::from_serde(&GeneratedQr {
            file_name: artifact.file_name,
            mime_type: artifact.format.mime_type().to_owned(),
            bytes: artifact.bytes,
        })
        .map_err(|err| JsValue::from_str(&err.to_string())),
        RenderResult::Failed(err) => {
            web_sys::console::error_2(
                &JsValue::from_str("Failed generating QR code:"),
                &JsValue::from_str(err.message()),
            );
            Err(err.into())
        }
    }
}
