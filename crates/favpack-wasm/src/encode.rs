//! Asset encoding WASM bindings.
//!
//! This module exposes the favpack-core PNG and ICO encoders to JavaScript,
//! enabling the front end to encode individual assets (for previews) without
//! assembling a whole pack.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode a raster to lossless RGBA PNG bytes
//! - [`encode_ico`] - Encode a raster to a single-resolution ICO container
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, encode_ico } from '@favpack/wasm';
//!
//! const pngBytes = encode_png(image);
//! const icoBytes = encode_ico(image);
//! const blob = new Blob([icoBytes], { type: 'image/x-icon' });
//! ```

use crate::types::JsRasterImage;
use favpack_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a raster image to PNG bytes.
///
/// # Arguments
///
/// * `image` - The RGBA raster to encode
///
/// # Returns
///
/// A `Uint8Array` containing the PNG-encoded bytes, or an error if encoding
/// fails.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 4
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&image.to_raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a raster image as a single-resolution ICO container.
///
/// The container embeds one PNG-compressed 32x32 image. A raster of any
/// other size is resampled to 32x32 first.
///
/// # Arguments
///
/// * `image` - The RGBA raster to encode (typically 32x32)
///
/// # Returns
///
/// A `Uint8Array` containing the ICO-encoded bytes, or an error if the
/// raster cannot be serialized.
#[wasm_bindgen]
pub fn encode_ico(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_ico(&image.to_raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for encode bindings.
///
/// Note: Most encode tests use functions that return `Result<T, JsValue>`,
/// which only work on wasm32 targets. For comprehensive encode testing, see
/// the tests in `favpack_core::encode` which test the underlying
/// functionality.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_via_core() {
        let img = JsRasterImage::new(10, 10, vec![128u8; 10 * 10 * 4]);

        let result = favpack_core::encode::encode_png(&img.to_raster());
        assert!(result.is_ok());

        let png = result.unwrap();
        // Verify PNG magic bytes
        assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_encode_ico_via_core() {
        let img = JsRasterImage::new(32, 32, vec![128u8; 32 * 32 * 4]);

        let result = favpack_core::encode::encode_ico(&img.to_raster());
        assert!(result.is_ok());

        let ico = result.unwrap();
        // ICO header: reserved (0), type (1 = icon)
        assert_eq!(&ico[0..4], &[0x00, 0x00, 0x01, 0x00]);
    }
}

/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_png_basic() {
        let img = JsRasterImage::new(16, 16, vec![128u8; 16 * 16 * 4]);
        let result = encode_png(&img);
        assert!(result.is_ok());

        let png = result.unwrap();
        assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
    }

    #[wasm_bindgen_test]
    fn test_encode_png_invalid_pixel_data() {
        let img = JsRasterImage::new(16, 16, vec![128u8; 16]); // Wrong size
        let result = encode_png(&img);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_ico_basic() {
        let img = JsRasterImage::new(32, 32, vec![128u8; 32 * 32 * 4]);
        let result = encode_ico(&img);
        assert!(result.is_ok());
    }

    #[wasm_bindgen_test]
    fn test_encode_ico_resamples_other_sizes() {
        let img = JsRasterImage::new(64, 64, vec![128u8; 64 * 64 * 4]);
        let result = encode_ico(&img);
        assert!(result.is_ok());
    }
}
