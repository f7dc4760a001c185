//! ICO container encoding for the browser favicon entry.
//!
//! Browsers expect `favicon.ico` to be a real ICO container, not a renamed
//! PNG. The container format can hold several resolutions, but this encoder
//! deliberately embeds a single 32x32 image; callers wanting more sizes ship
//! separate PNG assets and reference them from the web manifest instead.

use std::io::Cursor;

use crate::decode::{resample_square, RasterImage};

use super::EncodeError;

/// Edge length of the image embedded in the ICO container.
pub const ICO_EDGE: u32 = 32;

/// Encode a raster image as a single-resolution ICO container.
///
/// The embedded image is stored PNG-compressed inside the container. A
/// raster that is not already 32x32 is resampled to 32x32 first; this is a
/// documented fallback to guarantee format compliance, not an error.
///
/// # Arguments
///
/// * `image` - The RGBA raster to encode (any size, typically 32x32)
///
/// # Returns
///
/// ICO-encoded bytes wrapping one 32x32 image, or an error if the raster
/// cannot be serialized.
pub fn encode_ico(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected_len = (image.width as usize) * (image.height as usize) * 4;
    if image.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: image.pixels.len(),
        });
    }

    // Fallback: re-resample anything that is not already 32x32
    let icon_raster;
    let icon = if image.width == ICO_EDGE && image.height == ICO_EDGE {
        image
    } else {
        icon_raster = resample_square(image, ICO_EDGE)
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        &icon_raster
    };

    let icon_image = ico::IconImage::from_rgba_data(ICO_EDGE, ICO_EDGE, icon.pixels.clone());

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    let entry = ico::IconDirEntry::encode_as_png(&icon_image)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    icon_dir.add_entry(entry);

    let mut buffer = Vec::new();
    icon_dir
        .write(&mut buffer)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// Decode the first image of an ICO container back to a raster.
///
/// Used by the browser-side preview and by tests to verify round trips.
pub fn decode_ico(ico_data: &[u8]) -> Result<RasterImage, EncodeError> {
    let icon_dir = ico::IconDir::read(&mut Cursor::new(ico_data))
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    let entry = icon_dir
        .entries()
        .first()
        .ok_or_else(|| EncodeError::EncodingFailed("Empty ICO container".to_string()))?;

    let image = entry
        .decode()
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(RasterImage::new(
        image.width(),
        image.height(),
        image.rgba_data().to_vec(),
    ))
}
