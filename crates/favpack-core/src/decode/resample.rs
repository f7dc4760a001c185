//! Raster resampling for favicon target sizes.
//!
//! Resampling is pure over its inputs: every function returns a new
//! `RasterImage` without modifying the source. The favicon pipeline only
//! ever requests square targets, but the resampler itself stays general.

use super::{DecodeError, FilterType, RasterImage};

/// Resample an image to exact dimensions.
///
/// The alpha channel is carried through the interpolation, so transparent
/// favicon backgrounds survive resizing.
///
/// # Arguments
///
/// * `image` - The source raster to resample
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Interpolation filter to use
///
/// # Returns
///
/// A new `RasterImage` with the specified dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimension` if `width` or `height` is zero.
/// Returns `DecodeError::CorruptedFile` if the pixel buffer is inconsistent.
pub fn resample(
    image: &RasterImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RasterImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimension { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgba_image = image
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba_image, width, height, filter.to_image_filter());

    Ok(RasterImage::from_rgba_image(resized))
}

/// Resample to a square target edge with the pipeline's quality filter.
///
/// Favicon outputs are always square, so this is the shape every pipeline
/// step actually uses. Lanczos3 gives the smoothed scaling the targets
/// need at both extreme downscale (500 -> 16) and extreme upscale (1 -> 180).
pub fn resample_square(image: &RasterImage, edge: u32) -> Result<RasterImage, DecodeError> {
    resample(image, edge, edge, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> RasterImage {
        // Create a simple gradient image for testing
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
                pixels.push(255); // A
            }
        }
        RasterImage::new(width, height, pixels)
    }

    #[test]
    fn test_resample_basic() {
        let img = create_test_image(100, 50);
        let resized = resample(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resample_same_dimensions() {
        let img = create_test_image(100, 50);
        let resized = resample(&img, 100, 50, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 50);
        assert_eq!(resized.pixels, img.pixels);
    }

    #[test]
    fn test_resample_upscale() {
        let img = create_test_image(50, 25);
        let resized = resample(&img, 100, 50, FilterType::Lanczos3).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 50);
    }

    #[test]
    fn test_resample_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(matches!(
            resample(&img, 0, 50, FilterType::Bilinear),
            Err(DecodeError::InvalidDimension {
                width: 0,
                height: 50
            })
        ));
        assert!(matches!(
            resample(&img, 50, 0, FilterType::Bilinear),
            Err(DecodeError::InvalidDimension {
                width: 50,
                height: 0
            })
        ));
    }

    #[test]
    fn test_resample_non_square_source_to_square() {
        let img = create_test_image(300, 100);
        let resized = resample_square(&img, 32).unwrap();

        assert_eq!(resized.width, 32);
        assert_eq!(resized.height, 32);
        assert!(resized.is_square());
    }

    #[test]
    fn test_resample_square_targets() {
        let img = create_test_image(500, 500);

        for edge in [16, 32, 180] {
            let resized = resample_square(&img, edge).unwrap();
            assert_eq!(resized.width, edge);
            assert_eq!(resized.height, edge);
        }
    }

    #[test]
    fn test_resample_one_by_one_upscale() {
        // Extreme upscale path: a single pixel stretched to every target
        let img = RasterImage::new(1, 1, vec![255, 0, 0, 255]);

        for edge in [16, 32, 180] {
            let resized = resample_square(&img, edge).unwrap();
            assert_eq!(resized.width, edge);
            assert_eq!(resized.height, edge);
            // A constant source stays constant under interpolation
            assert_eq!(&resized.pixels[0..4], &[255, 0, 0, 255]);
        }
    }

    #[test]
    fn test_resample_preserves_alpha() {
        let img = RasterImage::new(2, 2, vec![0u8; 2 * 2 * 4]);
        let resized = resample(&img, 4, 4, FilterType::Lanczos3).unwrap();

        // Fully transparent input stays fully transparent
        for px in resized.pixels.chunks(4) {
            assert_eq!(px[3], 0);
        }
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resample(&img, 50, 25, filter).unwrap();
            assert_eq!(resized.width, 50);
            assert_eq!(resized.height, 25);
        }
    }
}
