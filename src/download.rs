use crate::qr_generator::QrArtifact;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use web_sys::{console, Blob, Url};

/// Blob URL serving an artifact to the page. Revoked on drop.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
    file_name: String,
}

impl ObjectUrl {
    pub fn from_artifact(artifact: &QrArtifact) -> Result<Self, JsValue> {
        let mut options = web_sys::BlobPropertyBag::new();
        options.type_(artifact.format.mime_type());
        let blob = Blob::new_with_u8_array_sequence_and_options(
            &Array::of1(&Uint8Array::from(artifact.bytes.as_slice())),
            &options,
        )?;

        let url = Url::create_object_url_with_blob(&blob)?;

        Ok(Self {
            url,
            file_name: artifact.file_name.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(err) = Url::revoke_object_url(&self.url) {
            console::error_2(&JsValue::from_str("Failed revoking object URL:"), &err);
        }
    }
}
