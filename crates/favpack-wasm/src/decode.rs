//! Source decoding and resampling WASM bindings.
//!
//! This module exposes the favpack-core decoding and resampling functions to
//! JavaScript.
//!
//! # Functions
//!
//! - [`decode_source`] - Decode a source image (PNG, JPEG, ...) from bytes
//! - [`resample`] - Resample an image to exact dimensions
//! - [`resample_square`] - Resample to a square edge with the pipeline filter
//!
//! # Example
//!
//! ```typescript
//! import { decode_source, resample_square } from '@favpack/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_source(bytes);
//! const preview = resample_square(image, 32);
//! console.log(`Preview: ${preview.width}x${preview.height}`);
//! ```

use crate::types::{filter_from_u8, JsRasterImage};
use favpack_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a source image from bytes.
///
/// The format (PNG, JPEG, ...) is detected from the magic bytes. JPEG
/// sources get EXIF orientation correction applied automatically, matching
/// what the browser's own decoder would do.
///
/// # Arguments
///
/// * `bytes` - The raw image file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsRasterImage` containing the decoded RGBA pixel data, or an error if
/// decoding fails.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not a recognized image format
/// - The image data is corrupted or truncated
#[wasm_bindgen]
pub fn decode_source(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_source(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resample an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - The source image to resample
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Filter type: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
///
/// # Returns
///
/// A new `JsRasterImage` with the specified dimensions, or an error if a
/// target dimension is zero.
#[wasm_bindgen]
pub fn resample(
    image: &JsRasterImage,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsRasterImage, JsValue> {
    let raster = image.to_raster();
    decode::resample(&raster, width, height, filter_from_u8(filter))
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resample to a square target edge with the pipeline's quality filter.
///
/// This is the shape the favicon pipeline uses for every target size; the
/// filter is always Lanczos3.
///
/// # Arguments
///
/// * `image` - The source image to resample
/// * `edge` - Target edge length in pixels (e.g. 16, 32, 180)
#[wasm_bindgen]
pub fn resample_square(image: &JsRasterImage, edge: u32) -> Result<JsRasterImage, JsValue> {
    let raster = image.to_raster();
    decode::resample_square(&raster, edge)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for decode bindings.
///
/// Note: Most decode tests use functions that return `Result<T, JsValue>`,
/// which only work on wasm32 targets. For comprehensive decode testing, see
/// the tests in `favpack_core::decode` which test the underlying
/// functionality.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resample_via_core() {
        let img = JsRasterImage::new(4, 4, vec![128u8; 4 * 4 * 4]);

        let raster = img.to_raster();
        let resized = favpack_core::decode::resample_square(&raster, 16).unwrap();
        assert_eq!(resized.width, 16);
        assert_eq!(resized.height, 16);
    }
}
