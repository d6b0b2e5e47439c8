use std::io::Cursor;

use image::imageops::overlay;
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

use crate::brcode::BrCode;
use crate::{ErrorCode, PixError};

/// Edge length in pixels used when no size is given.
pub const DEFAULT_QR_SIZE: u32 = 256;

/// Input to [`qr_code`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QrCodeOptions {
    /// Text encoded in the symbol, passed through unchanged.
    pub content: String,
    /// Edge length in pixels; `0` means [`DEFAULT_QR_SIZE`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: u32,
}

impl QrCodeOptions {
    /// Construct options for `content` at the default size.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: 0,
        }
    }

    /// The edge length actually requested from the renderer.
    #[must_use]
    pub const fn effective_size(&self) -> u32 {
        if self.size == 0 {
            DEFAULT_QR_SIZE
        } else {
            self.size
        }
    }
}

/// Render `options.content` as a PNG-encoded QR code.
///
/// The symbol uses error-correction level M. The image is exactly
/// [`QrCodeOptions::effective_size`] pixels square, with the symbol and its quiet zone centered on
/// a light background. When the symbol does not fit at one pixel per module, the image is as
/// large as that one-pixel rendering instead.
///
/// # Errors
///
/// Returns `QrDataTooLong` if the content does not fit the largest symbol, `QrEncodingFailed` for
/// other encoder failures, and `ImageEncodingFailed` if PNG encoding fails.
pub fn qr_code(options: &QrCodeOptions) -> Result<Vec<u8>, PixError> {
    let code = QrCode::with_error_correction_level(options.content.as_bytes(), EcLevel::M)
        .map_err(|err| {
            log::debug!("qr encoding failed: {err}");
            match err {
                QrError::DataTooLong => PixError::render(ErrorCode::QrDataTooLong),
                _ => PixError::render(ErrorCode::QrEncodingFailed),
            }
        })?;

    let size = options.effective_size();
    let pixels = fit_to_size(
        code.render::<Luma<u8>>()
            .max_dimensions(size, size)
            .build(),
        size,
    );

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(pixels)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|err| {
            log::debug!("png encoding failed: {err}");
            PixError::render(ErrorCode::ImageEncodingFailed)
        })?;
    Ok(png)
}

// `max_dimensions` snaps to whole modules, so the rendering is at most `size` wide unless even one
// pixel per module overflows it.
fn fit_to_size(symbol: GrayImage, size: u32) -> GrayImage {
    if symbol.width() >= size && symbol.height() >= size {
        return symbol;
    }
    let mut canvas = GrayImage::from_pixel(size, size, Luma([255]));
    let x = i64::from(size.saturating_sub(symbol.width()) / 2);
    let y = i64::from(size.saturating_sub(symbol.height()) / 2);
    overlay(&mut canvas, &symbol, x, y);
    canvas
}

impl BrCode {
    /// Render this code as a PNG QR code; `size == 0` means [`DEFAULT_QR_SIZE`].
    ///
    /// # Errors
    ///
    /// See [`qr_code`].
    #[cfg_attr(docsrs, doc(cfg(feature = "qr")))]
    pub fn to_qr_png(&self, size: u32) -> Result<Vec<u8>, PixError> {
        qr_code(&QrCodeOptions {
            content: String::from(self.as_str()),
            size,
        })
    }
}
