//! Source image decoding with EXIF orientation handling.
//!
//! The source image may arrive in any common encoding (PNG from the
//! generative provider, JPEG or PNG from a user upload). Format detection
//! is done from the magic bytes, never from a file name.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, Orientation, RasterImage};

/// Decode a source image from bytes, applying EXIF orientation correction.
///
/// Browser decoders apply EXIF orientation implicitly; here it has to be
/// explicit so a sideways phone photo does not produce a sideways favicon.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes in any supported encoding
///
/// # Returns
///
/// A `RasterImage` with RGBA pixel data and correct orientation applied.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if no known format is detected.
/// Returns `DecodeError::CorruptedFile` if the data is truncated or invalid.
pub fn decode_source(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    // Extract EXIF orientation before decoding (JPEG sources only; PNG
    // sources simply have no EXIF container and fall back to Normal).
    let orientation = extract_orientation(bytes);

    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented_img = apply_orientation(img, orientation);

    // Convert to RGBA8, preserving any alpha channel the source carried
    let rgba_img = oriented_img.into_rgba8();
    Ok(RasterImage::from_rgba_image(rgba_img))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

/// Extract EXIF orientation value from image bytes (for external use).
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}
