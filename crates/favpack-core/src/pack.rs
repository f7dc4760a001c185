//! Favicon pack assembly.
//!
//! The orchestrator of the pipeline: decodes the source once, resamples to
//! the three fixed favicon sizes, encodes the ICO container, builds the web
//! manifest, and compresses everything into a single zip archive. Assembly
//! is atomic: any failing sub-step propagates its error and no partial
//! archive exists. The whole operation is stateless and idempotent, so a
//! caller may simply retry with the same bytes.

use std::io::{Cursor, Write};

use thiserror::Error;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::decode::{decode_source, resample_square, DecodeError};
use crate::encode::{encode_ico, encode_png, EncodeError};
use crate::manifest::{AssetRef, ManifestError, WebManifest};

/// Shortcut-icon size used by browser tabs and bookmarks.
pub const FAVICON_16: u32 = 16;
/// Standard shortcut-icon size, also embedded in the ICO container.
pub const FAVICON_32: u32 = 32;
/// Touch-icon size for mobile home screens.
pub const APPLE_TOUCH_ICON: u32 = 180;

/// File name of the emitted archive.
pub const ARCHIVE_FILE_NAME: &str = "favicon-pack.zip";

/// Entry names inside the archive, in assembly order.
pub const ENTRY_FAVICON_16: &str = "favicon-16x16.png";
pub const ENTRY_FAVICON_32: &str = "favicon-32x32.png";
pub const ENTRY_APPLE_TOUCH: &str = "apple-touch-icon.png";
pub const ENTRY_FAVICON_ICO: &str = "favicon.ico";
pub const ENTRY_ORIGINAL: &str = "icon-original.png";
pub const ENTRY_MANIFEST: &str = "site.webmanifest";

const MEDIA_TYPE_PNG: &str = "image/png";
const MEDIA_TYPE_ICO: &str = "image/x-icon";
const MEDIA_TYPE_MANIFEST: &str = "application/manifest+json";

/// Errors that can occur during pack assembly.
///
/// Sub-step errors propagate verbatim; only archive compression adds a
/// variant of its own.
#[derive(Debug, Error)]
pub enum PackError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Archive assembly failed: {0}")]
    Archive(String),
}

/// A named encoded asset inside the pack.
#[derive(Debug, Clone)]
pub struct PackEntry {
    /// File name inside the archive, unique within the pack.
    pub name: &'static str,
    /// Media type of the encoded bytes.
    pub media_type: &'static str,
    /// The encoded bytes.
    pub bytes: Vec<u8>,
}

/// The assembled favicon pack: six uniquely named entries, in fixed order.
#[derive(Debug, Clone)]
pub struct FaviconPack {
    entries: Vec<PackEntry>,
}

impl FaviconPack {
    /// All entries in assembly order.
    pub fn entries(&self) -> &[PackEntry] {
        &self.entries
    }

    /// Look up an entry by its archive file name.
    pub fn entry(&self, name: &str) -> Option<&PackEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Number of entries (always 6 for a successfully built pack).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compress all entries into a single zip archive.
    pub fn to_zip(&self) -> Result<Vec<u8>, PackError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for entry in &self.entries {
            writer
                .start_file(entry.name, options)
                .map_err(|e| PackError::Archive(e.to_string()))?;
            writer
                .write_all(&entry.bytes)
                .map_err(|e| PackError::Archive(e.to_string()))?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| PackError::Archive(e.to_string()))?;

        Ok(cursor.into_inner())
    }
}

/// Build the favicon pack from source image bytes.
///
/// Fixed algorithm, not configurable:
/// 1. Decode the source once.
/// 2. Resample to 16x16, 32x32 and 180x180 with smoothed scaling.
/// 3. Encode the 32x32 raster into the ICO container.
/// 4. Encode each raster as PNG.
/// 5. Carry the original source bytes verbatim as `icon-original.png`.
/// 6. Build the manifest referencing only the 32x32 and 180x180 assets.
///
/// # Errors
///
/// Propagates `DecodeError`, `EncodeError` or `ManifestError` from the
/// failing sub-step. On error no entries exist.
pub fn build_pack(source: &[u8]) -> Result<FaviconPack, PackError> {
    let decoded = decode_source(source)?;

    let raster_16 = resample_square(&decoded, FAVICON_16)?;
    let raster_32 = resample_square(&decoded, FAVICON_32)?;
    let raster_180 = resample_square(&decoded, APPLE_TOUCH_ICON)?;

    let ico_bytes = encode_ico(&raster_32)?;

    let png_16 = encode_png(&raster_16)?;
    let png_32 = encode_png(&raster_32)?;
    let png_180 = encode_png(&raster_180)?;

    let manifest_json = standard_manifest()?.to_json()?;

    let entries = vec![
        PackEntry {
            name: ENTRY_FAVICON_16,
            media_type: MEDIA_TYPE_PNG,
            bytes: png_16,
        },
        PackEntry {
            name: ENTRY_FAVICON_32,
            media_type: MEDIA_TYPE_PNG,
            bytes: png_32,
        },
        PackEntry {
            name: ENTRY_APPLE_TOUCH,
            media_type: MEDIA_TYPE_PNG,
            bytes: png_180,
        },
        PackEntry {
            name: ENTRY_FAVICON_ICO,
            media_type: MEDIA_TYPE_ICO,
            bytes: ico_bytes,
        },
        PackEntry {
            name: ENTRY_ORIGINAL,
            media_type: MEDIA_TYPE_PNG,
            bytes: source.to_vec(),
        },
        PackEntry {
            name: ENTRY_MANIFEST,
            media_type: MEDIA_TYPE_MANIFEST,
            bytes: manifest_json.into_bytes(),
        },
    ];

    Ok(FaviconPack { entries })
}

/// The manifest document every assembled pack contains.
///
/// References only the 32x32 and 180x180 raster assets: installable-app
/// icon pickers ignore the 16x16 PNG and the ICO container, so the
/// manifest never lists them.
pub fn standard_manifest() -> Result<WebManifest, ManifestError> {
    WebManifest::new(&[
        AssetRef::new(
            format!("/{ENTRY_FAVICON_32}"),
            format!("{FAVICON_32}x{FAVICON_32}"),
            MEDIA_TYPE_PNG,
        ),
        AssetRef::new(
            format!("/{ENTRY_APPLE_TOUCH}"),
            format!("{APPLE_TOUCH_ICON}x{APPLE_TOUCH_ICON}"),
            MEDIA_TYPE_PNG,
        ),
    ])
}

/// Build the pack and compress it into the downloadable zip archive.
///
/// Convenience wrapper over [`build_pack`] + [`FaviconPack::to_zip`]; the
/// caller is responsible for triggering the user-facing save of the bytes
/// under [`ARCHIVE_FILE_NAME`].
pub fn assemble_pack(source: &[u8]) -> Result<Vec<u8>, PackError> {
    build_pack(source)?.to_zip()
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use proptest::prelude::*;

    fn png_fixture(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(color));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        /// Property: Any decodable source yields exactly six entries.
        #[test]
        fn prop_valid_source_yields_six_entries(
            width in 1u32..=64,
            height in 1u32..=64,
            color in any::<[u8; 4]>(),
        ) {
            let source = png_fixture(width, height, color);
            let pack = build_pack(&source).unwrap();
            prop_assert_eq!(pack.len(), 6);
        }

        /// Property: The manifest entry is stable across rebuilds.
        #[test]
        fn prop_manifest_stable_across_rebuilds(
            width in 1u32..=32,
            height in 1u32..=32,
            color in any::<[u8; 4]>(),
        ) {
            let source = png_fixture(width, height, color);
            let a = build_pack(&source).unwrap();
            let b = build_pack(&source).unwrap();

            prop_assert_eq!(
                &a.entry(ENTRY_MANIFEST).unwrap().bytes,
                &b.entry(ENTRY_MANIFEST).unwrap().bytes
            );
        }

        /// Property: Arbitrary non-image bytes never produce a pack.
        #[test]
        fn prop_garbage_bytes_never_produce_pack(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            // A handful of random bytes cannot be a complete image file
            prop_assume!(!bytes.starts_with(&[0x89, b'P', b'N', b'G']));
            prop_assume!(!bytes.starts_with(&[0xFF, 0xD8]));

            prop_assert!(build_pack(&bytes).is_err());
        }
    }
}
