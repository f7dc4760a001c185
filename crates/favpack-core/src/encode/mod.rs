//! Asset encoding for the favicon pipeline.
//!
//! This module provides functionality for:
//! - Encoding rasters to lossless RGBA PNG (the plain pack entries)
//! - Encoding the 32x32 raster into a single-resolution ICO container
//!
//! # Architecture
//!
//! The encoders are designed to be driven from the browser via WASM bindings.
//! All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use favpack_core::decode::RasterImage;
//! use favpack_core::encode::{encode_ico, encode_png};
//!
//! let raster = RasterImage::new(32, 32, vec![255u8; 32 * 32 * 4]);
//! let png_bytes = encode_png(&raster).unwrap();
//! let ico_bytes = encode_ico(&raster).unwrap();
//! println!("Encoded {} PNG / {} ICO bytes", png_bytes.len(), ico_bytes.len());
//! ```

mod ico;
mod png;

pub use ico::{decode_ico, encode_ico, ICO_EDGE};
pub use png::{encode_png, EncodeError};
