//! Transport port and error type for the backend settings API.

use async_trait::async_trait;
use thiserror::Error;
use whitemark_api_models::{
    LogoUpload, LogoUploadResponse, SavedProfile, SettingsCandidate, UpdateSettingsResponse,
};
use whitemark_events::BrandSettings;

/// Primary error type for backend operations.
///
/// Every fallible store operation surfaces this single kind to its caller
/// unchanged; no layer retries. Color validation never produces an error
/// (invalid values are substituted before transport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The API base URL could not be parsed.
    #[error("invalid API base URL")]
    InvalidUrl {
        /// Underlying parse failure.
        #[source]
        source: url::ParseError,
    },
    /// The request could not be sent or the response could not be decoded.
    #[error("request failed")]
    Request {
        /// Underlying client failure.
        #[source]
        source: reqwest::Error,
    },
    /// The backend responded with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body detail when available.
        detail: String,
    },
}

/// Convenience alias for transport operation results.
pub type TransportResult<T> = Result<T, TransportError>;

/// Backend operations required by the settings store.
///
/// The HTTP implementation lives in [`crate::http::HttpTransport`]; tests
/// substitute in-process fakes. Every request carries the acting user
/// identifier in an identifying header.
#[async_trait]
pub trait SettingsTransport: Send + Sync {
    /// Fetch the current settings for `user_id`.
    async fn fetch_settings(&self, user_id: &str) -> TransportResult<BrandSettings>;

    /// Persist a validated candidate as a multipart submission.
    async fn update_settings(
        &self,
        user_id: &str,
        candidate: &SettingsCandidate,
    ) -> TransportResult<UpdateSettingsResponse>;

    /// Upload a logo image as a multipart submission.
    async fn upload_logo(
        &self,
        user_id: &str,
        upload: LogoUpload,
    ) -> TransportResult<LogoUploadResponse>;

    /// List the saved profiles owned by `user_id`.
    async fn list_saved_profiles(&self, user_id: &str) -> TransportResult<Vec<SavedProfile>>;

    /// Fetch a single saved profile by id.
    async fn fetch_saved_profile(
        &self,
        user_id: &str,
        profile_id: &str,
    ) -> TransportResult<SavedProfile>;

    /// Persist `settings` as a new saved profile.
    async fn save_profile(
        &self,
        user_id: &str,
        settings: &BrandSettings,
    ) -> TransportResult<SavedProfile>;

    /// Delete the saved profile identified by `profile_id`.
    async fn delete_profile(&self, user_id: &str, profile_id: &str) -> TransportResult<()>;
}
