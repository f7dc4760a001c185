//! Web app manifest construction.
//!
//! Builds the `site.webmanifest` document that ships inside the favicon
//! pack. Construction is pure and deterministic: serde serializes struct
//! fields in declaration order, so two identical inputs produce
//! byte-identical JSON. Installable-app icon pickers only look at the 32
//! and 180 pixel entries, which is why the manifest never lists the 16x16
//! PNG or the ICO container.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application name used in the generated manifest.
pub const APP_NAME: &str = "App";

/// Theme and background color used in the generated manifest.
pub const APP_COLOR: &str = "#ffffff";

/// Display mode used in the generated manifest.
pub const APP_DISPLAY: &str = "standalone";

/// Errors that can occur during manifest construction.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// An asset reference has an empty path, sizes, or media type.
    #[error("Invalid asset reference: {0}")]
    InvalidAssetRef(String),

    /// JSON serialization failed.
    #[error("Manifest serialization failed: {0}")]
    Serialize(String),
}

/// A reference to a pack asset, used as manifest input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    /// Path the manifest will point at (e.g. "/favicon-32x32.png").
    pub path: String,
    /// Size string in WxH form (e.g. "32x32").
    pub sizes: String,
    /// Media type of the asset (e.g. "image/png").
    pub media_type: String,
}

impl AssetRef {
    pub fn new(
        path: impl Into<String>,
        sizes: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            sizes: sizes.into(),
            media_type: media_type.into(),
        }
    }
}

/// One icon entry of the web app manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

/// The web app manifest document.
///
/// Field declaration order is the serialized field order and must not
/// change: downstream consumers compare emitted manifests byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub icons: Vec<ManifestIcon>,
    pub theme_color: String,
    pub background_color: String,
    pub display: String,
}

impl WebManifest {
    /// Build a manifest referencing the given assets, in the given order.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::InvalidAssetRef` if any reference has an
    /// empty path, sizes, or media type.
    pub fn new(assets: &[AssetRef]) -> Result<Self, ManifestError> {
        let mut icons = Vec::with_capacity(assets.len());
        for asset in assets {
            if asset.path.is_empty() {
                return Err(ManifestError::InvalidAssetRef("empty path".to_string()));
            }
            if asset.sizes.is_empty() {
                return Err(ManifestError::InvalidAssetRef("empty sizes".to_string()));
            }
            if asset.media_type.is_empty() {
                return Err(ManifestError::InvalidAssetRef(
                    "empty media type".to_string(),
                ));
            }
            icons.push(ManifestIcon {
                src: asset.path.clone(),
                sizes: asset.sizes.clone(),
                media_type: asset.media_type.clone(),
            });
        }

        Ok(Self {
            name: APP_NAME.to_string(),
            short_name: APP_NAME.to_string(),
            icons,
            theme_color: APP_COLOR.to_string(),
            background_color: APP_COLOR.to_string(),
            display: APP_DISPLAY.to_string(),
        })
    }

    /// Serialize to pretty-printed JSON (2-space indent).
    ///
    /// Deterministic: identical manifests serialize to identical bytes.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        serde_json::to_string_pretty(self).map_err(|e| ManifestError::Serialize(e.to_string()))
    }

    /// Parse a manifest back from JSON (used by previews and tests).
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(json).map_err(|e| ManifestError::Serialize(e.to_string()))
    }
}
