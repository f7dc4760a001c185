//! Favpack Core - Favicon pack generation pipeline
//!
//! This crate provides the core pipeline for turning a single source image
//! into a complete favicon pack: decoding, resampling to the standard
//! favicon sizes, PNG and ICO encoding, web-manifest construction, and
//! assembly into a downloadable zip archive.
//!
//! The pipeline is pure and deterministic: no global state, no I/O beyond
//! the bytes passed in and returned. The browser front end drives it
//! through the `favpack-wasm` bindings crate.

pub mod decode;
pub mod encode;
pub mod manifest;
pub mod pack;

pub use decode::{decode_source, resample, resample_square, DecodeError, FilterType, RasterImage};
pub use encode::{encode_ico, encode_png, EncodeError};
pub use manifest::{AssetRef, ManifestError, WebManifest};
pub use pack::{
    assemble_pack, build_pack, standard_manifest, FaviconPack, PackEntry, PackError,
    ARCHIVE_FILE_NAME,
};
