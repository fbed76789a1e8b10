//! Image decoding to the RGBA buffers the finder operates on.
//!
//! Raw bytes in, `RgbaImage` out. This is the only fallible boundary
//! of the crate; everything downstream works on in-memory buffers.

use image::RgbaImage;

use crate::types::FinderError;

/// Decode raw image bytes into an 8-bit RGBA buffer.
///
/// Supports PNG, JPEG, BMP, and WebP (whatever the `image` crate can
/// decode). Images without an alpha channel get a fully opaque one.
///
/// # Errors
///
/// Returns [`FinderError::EmptyInput`] if `bytes` is empty.
/// Returns [`FinderError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
#[must_use = "returns the decoded RGBA image"]
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, FinderError> {
    if bytes.is_empty() {
        return Err(FinderError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}
