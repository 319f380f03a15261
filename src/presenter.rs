//! Request/response layer between the form and the encoder.
//!
//! Nothing here touches the DOM, so the whole flow from a submitted form to
//! the outcome shown on screen can be exercised without a browser.

use crate::{
    error::EncodingError,
    qr_generator::{self, QrArtifact, QrFormat},
};
use serde::Deserialize;

pub const TITLE: &str = "QR Code Generator";
pub const TEXT_LABEL: &str = "Enter the text for the QR code:";
pub const FORMAT_LABEL: &str = "Select the output format:";
pub const GENERATE_LABEL: &str = "Generate QR";
pub const DOWNLOAD_LABEL: &str = "Download QR";
pub const SUCCESS_MESSAGE: &str = "QR code generated successfully!";
pub const FAILURE_MESSAGE: &str = "Could not generate the QR code";

/// One submission of the form.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct QrRequest {
    pub text: String,
    #[serde(default = "default_format")]
    pub format: String,
}

pub fn default_format() -> String {
    QrFormat::Png.label().to_owned()
}

impl QrRequest {
    pub fn new(text: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: format.into(),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum RenderResult {
    Success(QrArtifact),
    Failed(EncodingError),
}

impl RenderResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn artifact(&self) -> Option<&QrArtifact> {
        match self {
            Self::Success(artifact) => Some(artifact),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&EncodingError> {
        match self {
            Self::Success(_) => None,
            Self::Failed(err) => Some(err),
        }
    }

    pub fn status_message(&self) -> &str {
        match self {
            Self::Success(_) => SUCCESS_MESSAGE,
            Self::Failed(err) => err.message(),
        }
    }
}

impl From<Result<QrArtifact, EncodingError>> for RenderResult {
    fn from(result: Result<QrArtifact, EncodingError>) -> Self {
        match result {
            Ok(artifact) => Self::Success(artifact),
            Err(err) => Self::Failed(err),
        }
    }
}

pub fn present(request: &QrRequest) -> RenderResult {
    qr_generator::encode_with_format_name(&request.text, &request.format).into()
}

/// A finished submission: the text that was encoded, its outcome, and the
/// handle under which a successful artifact was published to the page.
#[derive(Debug)]
pub struct Submission<P> {
    pub text: String,
    pub result: RenderResult,
    pub published: Option<P>,
}

/// What the form shows. Holds at most one submission; a new one replaces
/// (and drops) the previous before it is built.
#[derive(Debug)]
pub struct FormState<P> {
    current: Option<Submission<P>>,
}

impl<P> Default for FormState<P> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<P> FormState<P> {
    pub fn current(&self) -> Option<&Submission<P>> {
        self.current.as_ref()
    }

    pub fn submit<F>(&mut self, request: QrRequest, publish: F) -> &Submission<P>
    where
        F: FnOnce(&QrArtifact) -> Result<P, String>,
    {
        self.current = None;

        let (result, published) = match present(&request) {
            RenderResult::Success(artifact) => match publish(&artifact) {
                Ok(published) => (RenderResult::Success(artifact), Some(published)),
                Err(message) => (
                    RenderResult::Failed(EncodingError::new(format!(
                        "Error generating QR code: {}",
                        message
                    ))),
                    None,
                ),
            },
            failed => (failed, None),
        };

        self.current.get_or_insert(Submission {
            text: request.text,
            result,
            published,
        })
    }
}

/// Options offered by the format selector, in display order.
pub fn format_options() -> impl Iterator<Item = &'static str> {
    QrFormat::ALL.iter().map(|format| format.label())
}
