//! reqwest-backed implementation of the settings transport.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use uuid::Uuid;
use whitemark_api_models::{
    LogoUpload, LogoUploadResponse, SavedProfile, SettingsCandidate, SettingsDto,
    UpdateSettingsResponse,
};
use whitemark_events::BrandSettings;

use crate::config::ClientConfig;
use crate::transport::{SettingsTransport, TransportError, TransportResult};

/// Header carrying the acting user identifier on every request.
pub const HEADER_USER_ID: &str = "x-user-id";
/// Header carrying the per-client request correlation identifier.
pub const HEADER_REQUEST_ID: &str = "x-request-id";

/// HTTP transport over the backend settings API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Construct a transport from the client configuration.
    ///
    /// Every request carries a correlation identifier assigned at
    /// construction time.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the underlying HTTP client cannot
    /// be built.
    pub fn new(config: &ClientConfig) -> TransportResult<Self> {
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(&Uuid::new_v4().to_string())
            .expect("generated UUID is a valid header value");
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|source| TransportError::Request { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        user_id: &str,
        path: &str,
    ) -> TransportResult<T> {
        let response = self
            .client
            .get(self.endpoint(path))
            .header(HEADER_USER_ID, user_id)
            .send()
            .await
            .map_err(|source| TransportError::Request { source })?;
        decode(response).await
    }
}

#[async_trait]
impl SettingsTransport for HttpTransport {
    async fn fetch_settings(&self, user_id: &str) -> TransportResult<BrandSettings> {
        let dto: SettingsDto = self.get_json(user_id, &format!("/settings/{user_id}")).await?;
        Ok(dto.into())
    }

    async fn update_settings(
        &self,
        user_id: &str,
        candidate: &SettingsCandidate,
    ) -> TransportResult<UpdateSettingsResponse> {
        let mut form = Form::new()
            .text("brand_name", candidate.brand_name.clone())
            .text("color", candidate.primary_color.clone())
            .text("user_id", user_id.to_string());
        if let Some(upload) = &candidate.logo_file {
            form = form.part("logo_file", logo_part(upload)?);
        }

        let response = self
            .client
            .post(self.endpoint("/ui_settings/update_settings"))
            .header(HEADER_USER_ID, user_id)
            .multipart(form)
            .send()
            .await
            .map_err(|source| TransportError::Request { source })?;
        decode(response).await
    }

    async fn upload_logo(
        &self,
        user_id: &str,
        upload: LogoUpload,
    ) -> TransportResult<LogoUploadResponse> {
        let form = Form::new().part("file", logo_part(&upload)?);
        let response = self
            .client
            .post(self.endpoint(&format!("/upload-logo/{user_id}")))
            .header(HEADER_USER_ID, user_id)
            .multipart(form)
            .send()
            .await
            .map_err(|source| TransportError::Request { source })?;
        decode(response).await
    }

    async fn list_saved_profiles(&self, user_id: &str) -> TransportResult<Vec<SavedProfile>> {
        self.get_json(user_id, &format!("/saved-settings/{user_id}")).await
    }

    async fn fetch_saved_profile(
        &self,
        user_id: &str,
        profile_id: &str,
    ) -> TransportResult<SavedProfile> {
        self.get_json(user_id, &format!("/saved-settings/{user_id}/{profile_id}"))
            .await
    }

    async fn save_profile(
        &self,
        user_id: &str,
        settings: &BrandSettings,
    ) -> TransportResult<SavedProfile> {
        let response = self
            .client
            .post(self.endpoint(&format!("/saved-settings/{user_id}")))
            .header(HEADER_USER_ID, user_id)
            .json(settings)
            .send()
            .await
            .map_err(|source| TransportError::Request { source })?;
        decode(response).await
    }

    async fn delete_profile(&self, user_id: &str, profile_id: &str) -> TransportResult<()> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/saved-settings/{user_id}/{profile_id}")))
            .header(HEADER_USER_ID, user_id)
            .send()
            .await
            .map_err(|source| TransportError::Request { source })?;
        ensure_success(response).await?;
        Ok(())
    }
}

fn logo_part(upload: &LogoUpload) -> TransportResult<Part> {
    let mut part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
    if let Some(content_type) = &upload.content_type {
        part = part
            .mime_str(content_type)
            .map_err(|source| TransportError::Request { source })?;
    }
    Ok(part)
}

async fn decode<T: for<'de> serde::Deserialize<'de>>(response: Response) -> TransportResult<T> {
    let response = ensure_success(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|source| TransportError::Request { source })
}

/// Classify a non-success response into a status error with body detail.
async fn ensure_success(response: Response) -> TransportResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response.text().await.unwrap_or_default();
    Err(TransportError::Status {
        status: status.as_u16(),
        detail: detail.trim().to_string(),
    })
}
