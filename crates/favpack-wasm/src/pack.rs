//! Favicon pack assembly WASM bindings.
//!
//! This module exposes the whole pipeline as a single call: source bytes in,
//! zip archive bytes out. The front end hands the returned bytes to a Blob
//! and triggers the download itself.
//!
//! # Functions
//!
//! - [`assemble_pack`] - Build the full favicon pack and return zip bytes
//! - [`pack_entry_names`] - The six entry names of a pack, in archive order
//! - [`archive_file_name`] - Suggested file name for the downloaded archive
//!
//! # Example
//!
//! ```typescript
//! import { assemble_pack, archive_file_name } from '@favpack/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const zipBytes = assemble_pack(bytes);
//! const blob = new Blob([zipBytes], { type: 'application/zip' });
//! saveAs(blob, archive_file_name());
//! ```

use favpack_core::pack;
use wasm_bindgen::prelude::*;

/// Build the full favicon pack from source bytes and return the zip archive.
///
/// Runs the fixed pipeline: decode, resample to 16/32/180, encode PNG and
/// ICO assets, build `site.webmanifest`, compress. Atomic: on any failure an
/// error is returned and no archive bytes exist.
///
/// # Arguments
///
/// * `source` - The raw source image bytes as a `Uint8Array`
///
/// # Returns
///
/// A `Uint8Array` containing the compressed archive, or an error message if
/// any pipeline step fails. The operation is stateless, so the caller may
/// retry with the same or different bytes.
#[wasm_bindgen]
pub fn assemble_pack(source: &[u8]) -> Result<Vec<u8>, JsValue> {
    pack::assemble_pack(source).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The six entry names of an assembled pack, in archive order.
#[wasm_bindgen]
pub fn pack_entry_names() -> Vec<String> {
    vec![
        pack::ENTRY_FAVICON_16.to_string(),
        pack::ENTRY_FAVICON_32.to_string(),
        pack::ENTRY_APPLE_TOUCH.to_string(),
        pack::ENTRY_FAVICON_ICO.to_string(),
        pack::ENTRY_ORIGINAL.to_string(),
        pack::ENTRY_MANIFEST.to_string(),
    ]
}

/// Suggested file name for the downloaded archive.
#[wasm_bindgen]
pub fn archive_file_name() -> String {
    pack::ARCHIVE_FILE_NAME.to_string()
}

/// The `site.webmanifest` document every pack contains, as a JS object.
///
/// Lets the front end render a manifest preview without assembling a pack.
#[wasm_bindgen]
pub fn manifest_preview() -> Result<JsValue, JsValue> {
    let manifest = pack::standard_manifest().map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&manifest).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_entry_names() {
        let names = pack_entry_names();
        assert_eq!(names.len(), 6);
        assert_eq!(names[0], "favicon-16x16.png");
        assert_eq!(names[5], "site.webmanifest");
    }

    #[test]
    fn test_archive_file_name() {
        assert_eq!(archive_file_name(), "favicon-pack.zip");
    }
}
