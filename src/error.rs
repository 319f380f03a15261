use std::fmt::{Display, Formatter};
use wasm_bindgen::JsValue;

/// The one failure a QR request can end in. Carries a message meant for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingError {
    message: String,
}

impl EncodingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn unsupported_format(format: &str) -> Self {
        Self::new(format!("Unsupported output format: {}", format))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for EncodingError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EncodingError {}

impl From<qrcode::types::QrError> for EncodingError {
    fn from(err: qrcode::types::QrError) -> Self {
        Self::new(format!("Error generating QR code: {}", err))
    }
}

impl From<image::ImageError> for EncodingError {
    fn from(err: image::ImageError) -> Self {
        Self::new(format!("Error generating QR code: {}", err))
    }
}

impl From<EncodingError> for JsValue {
    fn from(err: EncodingError) -> Self {
        JsValue::from_str(&err.message)
    }
}
