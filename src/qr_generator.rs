use crate::error::EncodingError;
use image::{ImageFormat, Luma};
use qrcode::{render::svg, EcLevel, QrCode};
use std::{io::Cursor, str::FromStr};
use uuid::Uuid;

/// Pixels per QR module, for both PNG and SVG output.
pub const MODULE_SCALE: u32 = 8;
pub const ERROR_CORRECTION: EcLevel = EcLevel::H;

const DARK: &str = "#000000";
const LIGHT: &str = "#ffffff";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QrFormat {
    Png,
    Svg,
}

impl QrFormat {
    pub const ALL: [QrFormat; 2] = [QrFormat::Png, QrFormat::Svg];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Svg => "SVG",
        }
    }
}

impl FromStr for QrFormat {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            _ => Err(EncodingError::unsupported_format(s)),
        }
    }
}

/// A rendered QR code, held in memory.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct QrArtifact {
    pub bytes: Vec<u8>,
    pub format: QrFormat,
    pub file_name: String,
}

impl QrArtifact {
    fn new(bytes: Vec<u8>, format: QrFormat) -> Self {
        Self {
            bytes,
            format,
            file_name: format!("qr-{}.{}", Uuid::new_v4(), format.extension()),
        }
    }
}

pub fn encode(text: &str, format: QrFormat) -> Result<QrArtifact, EncodingError> {
    let qr = QrCode::with_error_correction_level(text.as_bytes(), ERROR_CORRECTION)?;
    let bytes = match format {
        QrFormat::Png => render_png(&qr)?,
        QrFormat::Svg => render_svg(&qr).into_bytes(),
    };
    Ok(QrArtifact::new(bytes, format))
}

/// Like [`encode`], but takes the format as it comes out of a form field.
pub fn encode_with_format_name(text: &str, format: &str) -> Result<QrArtifact, EncodingError> {
    encode(text, format.parse()?)
}

fn render_png(qr: &QrCode) -> Result<Vec<u8>, EncodingError> {
    let image = qr
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(MODULE_SCALE, MODULE_SCALE)
        .build();

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn render_svg(qr: &QrCode) -> String {
    qr.render::<svg::Color>()
        .quiet_zone(true)
        .module_dimensions(MODULE_SCALE, MODULE_SCALE)
        .dark_color(svg::Color(DARK))
        .light_color(svg::Color(LIGHT))
        .build()
}
