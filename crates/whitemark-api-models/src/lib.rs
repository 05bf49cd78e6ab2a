#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Whitemark settings API.
//!
//! These types pin the wire contract consumed by the client: the settings
//! resource, the multipart update response, the logo upload response, and
//! the saved-profile collection. Conversions into the domain
//! [`BrandSettings`] live next to the DTOs so the mapping stays a single
//! source of truth. Color validation helpers live in [`color`].

use serde::{Deserialize, Serialize};
use whitemark_events::BrandSettings;

pub mod color;

/// Wire shape of the current-settings resource (`GET /settings/{user_id}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsDto {
    /// Brand display name; may be empty.
    #[serde(default)]
    pub brand_name: String,
    /// Logo locator; empty when no logo is set.
    #[serde(default)]
    pub logo_url: String,
    /// Accent color as stored by the backend.
    #[serde(default)]
    pub color: String,
}

impl From<SettingsDto> for BrandSettings {
    fn from(value: SettingsDto) -> Self {
        Self {
            brand_name: value.brand_name,
            logo_url: value.logo_url,
            primary_color: value.color,
        }
    }
}

/// Wire shape of the settings-update response
/// (`POST /ui_settings/update_settings`).
///
/// Every field is optional; the store merges present fields over the
/// submitted candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateSettingsResponse {
    /// Canonical brand name when echoed by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    /// Canonical logo locator when echoed by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Canonical accent color when echoed by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Wire shape of the logo upload response (`POST /upload-logo/{user_id}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoUploadResponse {
    /// Locator of the stored logo image.
    #[serde(rename = "logoUrl")]
    pub logo_url: String,
}

/// An id-tagged, immutable snapshot of branding settings owned by the
/// backend's saved-profiles collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavedProfile {
    /// Opaque identifier assigned by the backend.
    pub id: String,
    /// Snapshotted brand name.
    #[serde(default)]
    pub brand_name: String,
    /// Snapshotted logo locator.
    #[serde(default)]
    pub logo_url: String,
    /// Snapshotted accent color.
    #[serde(default)]
    pub primary_color: String,
}

impl From<&SavedProfile> for BrandSettings {
    fn from(value: &SavedProfile) -> Self {
        Self {
            brand_name: value.brand_name.clone(),
            logo_url: value.logo_url.clone(),
            primary_color: value.primary_color.clone(),
        }
    }
}

/// Editor-built payload for a settings update.
///
/// The logo locator is omitted entirely (not sent as an empty string) when
/// the editor preview is blank, preserving backend defaulting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsCandidate {
    /// Brand display name to persist.
    pub brand_name: String,
    /// Accent color as entered; normalized by the store before transport.
    pub primary_color: String,
    /// Logo locator carried for merge fallback; never sent on the wire.
    pub logo_url: Option<String>,
    /// Newly chosen logo image to upload alongside the update.
    pub logo_file: Option<LogoUpload>,
}

/// In-memory logo image payload for multipart upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogoUpload {
    /// File name reported to the backend.
    pub file_name: String,
    /// MIME type of the image when known.
    pub content_type: Option<String>,
    /// Raw image bytes.
    pub bytes: Vec<u8>,
}
