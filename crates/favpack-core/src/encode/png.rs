//! PNG encoding for the raster pack entries.
//!
//! This module provides lossless PNG encoding using the `image` crate's
//! PNG encoder. Every raster asset in the favicon pack is stored as RGBA
//! PNG so transparency survives the round trip from source to archive.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::RasterImage;

/// Errors that can occur during asset encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Serialization to the target format failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a raster image to PNG bytes.
///
/// # Arguments
///
/// * `image` - The RGBA raster to encode
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if encoding fails.
///
/// # Example
///
/// ```
/// use favpack_core::decode::RasterImage;
/// use favpack_core::encode::encode_png;
///
/// let raster = RasterImage::new(16, 16, vec![128u8; 16 * 16 * 4]);
/// let png = encode_png(&raster).unwrap();
///
/// // Verify PNG magic bytes
/// assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
/// ```
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    // Validate dimensions
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    // Validate pixel data length
    let expected_len = (image.width as usize) * (image.height as usize) * 4;
    if image.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: image.pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder
        .write_image(
            &image.pixels,
            image.width,
            image.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
