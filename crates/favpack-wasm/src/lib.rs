//! Favpack WASM - WebAssembly bindings for Favpack
//!
//! This crate provides WASM bindings to expose the favpack-core favicon
//! pipeline to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Source decoding and resampling bindings
//! - `encode` - PNG and ICO encoding bindings
//! - `pack` - Full pack assembly (source bytes in, zip bytes out)
//!
//! # Usage
//!
//! ```typescript
//! import init, { assemble_pack, archive_file_name } from '@favpack/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Build the pack from a user-selected file
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const zipBytes = assemble_pack(bytes);
//! saveAs(new Blob([zipBytes], { type: 'application/zip' }), archive_file_name());
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod pack;
mod types;

// Re-export public types
pub use decode::{decode_source, resample, resample_square};
pub use encode::{encode_ico, encode_png};
pub use pack::{archive_file_name, assemble_pack, manifest_preview, pack_entry_names};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
