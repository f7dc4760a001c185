//! Source decoding and resampling for the favicon pipeline.
//!
//! This module provides functionality for:
//! - Decoding source images of any common encoding into RGBA bitmaps
//! - EXIF orientation correction for JPEG sources
//! - Exact-dimension resampling for the favicon target sizes
//!
//! # Architecture
//!
//! The pipeline is designed to be driven from the browser via WASM bindings.
//! All operations are synchronous and single-threaded within WASM; each call
//! owns its inputs and outputs exclusively, so invocations never share state.
//!
//! # Examples
//!
//! ```ignore
//! use favpack_core::decode::{decode_source, resample_square};
//!
//! let bytes = std::fs::read("logo.png").unwrap();
//! let image = decode_source(&bytes).unwrap();
//! let icon = resample_square(&image, 32).unwrap();
//! println!("Resampled to {}x{}", icon.width, icon.height);
//! ```

mod resample;
mod source;
mod types;

pub use resample::{resample, resample_square};
pub use source::{decode_source, get_orientation};
pub use types::{DecodeError, FilterType, Orientation, RasterImage};
