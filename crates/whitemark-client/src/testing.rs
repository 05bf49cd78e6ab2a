//! In-process fakes and fixtures shared by the store and controller tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use whitemark_api_models::{
    LogoUpload, LogoUploadResponse, SavedProfile, SettingsCandidate, UpdateSettingsResponse,
};
use whitemark_events::BrandSettings;

use crate::toast::{ToastKind, ToastSink};
use crate::transport::{SettingsTransport, TransportError, TransportResult};

/// Error returned by failing fakes, mirroring a backend 500.
pub(crate) fn backend_error() -> TransportError {
    TransportError::Status {
        status: 500,
        detail: "backend unavailable".to_string(),
    }
}

/// Saved-profile fixture with fixed logo and color fields.
pub(crate) fn sample_profile(id: &str, brand: &str) -> SavedProfile {
    SavedProfile {
        id: id.to_string(),
        brand_name: brand.to_string(),
        logo_url: "/l.png".to_string(),
        primary_color: "#112233".to_string(),
    }
}

/// Scriptable in-memory transport recording every call it receives.
pub(crate) struct FakeTransport {
    settings: Mutex<BrandSettings>,
    profiles: Mutex<Vec<SavedProfile>>,
    candidates: Mutex<Vec<SettingsCandidate>>,
    update_response: Mutex<Option<UpdateSettingsResponse>>,
    logo_url: Mutex<String>,
    user_ids: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self {
            settings: Mutex::new(BrandSettings::default()),
            profiles: Mutex::new(Vec::new()),
            candidates: Mutex::new(Vec::new()),
            update_response: Mutex::new(None),
            logo_url: Mutex::new("/logos/uploaded.png".to_string()),
            user_ids: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }
}

impl FakeTransport {
    /// Transport whose every operation fails with a backend error.
    pub(crate) fn failing() -> Self {
        let transport = Self::default();
        transport.fail.store(true, Ordering::Relaxed);
        transport
    }

    /// Serve the given settings from `fetch_settings`.
    pub(crate) fn with_settings(self, brand: &str, logo: &str, color: &str) -> Self {
        *self.settings.lock().unwrap() = BrandSettings {
            brand_name: brand.to_string(),
            logo_url: logo.to_string(),
            primary_color: color.to_string(),
        };
        self
    }

    /// Seed a saved profile into the backend collection.
    pub(crate) fn with_profile(self, id: &str, brand: &str) -> Self {
        self.profiles.lock().unwrap().push(sample_profile(id, brand));
        self
    }

    /// Respond to `update_settings` with a fixed payload instead of echoing
    /// the candidate.
    pub(crate) fn with_update_response(self, response: UpdateSettingsResponse) -> Self {
        *self.update_response.lock().unwrap() = Some(response);
        self
    }

    /// Locator returned by `upload_logo`.
    pub(crate) fn with_logo_url(self, logo_url: &str) -> Self {
        *self.logo_url.lock().unwrap() = logo_url.to_string();
        self
    }

    /// Most recent candidate received by `update_settings`.
    pub(crate) fn last_candidate(&self) -> Option<SettingsCandidate> {
        self.candidates.lock().unwrap().last().cloned()
    }

    /// User identifiers observed across all operations, in call order.
    pub(crate) fn seen_user_ids(&self) -> Vec<String> {
        self.user_ids.lock().unwrap().clone()
    }

    fn check(&self, user_id: &str) -> TransportResult<()> {
        self.user_ids.lock().unwrap().push(user_id.to_string());
        if self.fail.load(Ordering::Relaxed) {
            Err(backend_error())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SettingsTransport for FakeTransport {
    async fn fetch_settings(&self, user_id: &str) -> TransportResult<BrandSettings> {
        self.check(user_id)?;
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn update_settings(
        &self,
        user_id: &str,
        candidate: &SettingsCandidate,
    ) -> TransportResult<UpdateSettingsResponse> {
        self.check(user_id)?;
        self.candidates.lock().unwrap().push(candidate.clone());
        if let Some(response) = self.update_response.lock().unwrap().clone() {
            return Ok(response);
        }
        // stable backend: echo the candidate fields back as canonical
        Ok(UpdateSettingsResponse {
            brand_name: Some(candidate.brand_name.clone()),
            logo_url: candidate.logo_url.clone(),
            color: Some(candidate.primary_color.clone()),
        })
    }

    async fn upload_logo(
        &self,
        user_id: &str,
        _upload: LogoUpload,
    ) -> TransportResult<LogoUploadResponse> {
        self.check(user_id)?;
        Ok(LogoUploadResponse {
            logo_url: self.logo_url.lock().unwrap().clone(),
        })
    }

    async fn list_saved_profiles(&self, user_id: &str) -> TransportResult<Vec<SavedProfile>> {
        self.check(user_id)?;
        Ok(self.profiles.lock().unwrap().clone())
    }

    async fn fetch_saved_profile(
        &self,
        user_id: &str,
        profile_id: &str,
    ) -> TransportResult<SavedProfile> {
        self.check(user_id)?;
        self.profiles
            .lock()
            .unwrap()
            .iter()
            .find(|profile| profile.id == profile_id)
            .cloned()
            .ok_or(TransportError::Status {
                status: 404,
                detail: "profile not found".to_string(),
            })
    }

    async fn save_profile(
        &self,
        user_id: &str,
        settings: &BrandSettings,
    ) -> TransportResult<SavedProfile> {
        self.check(user_id)?;
        let mut profiles = self.profiles.lock().unwrap();
        let profile = SavedProfile {
            id: format!("profile-{}", profiles.len() + 1),
            brand_name: settings.brand_name.clone(),
            logo_url: settings.logo_url.clone(),
            primary_color: settings.primary_color.clone(),
        };
        profiles.push(profile.clone());
        Ok(profile)
    }

    async fn delete_profile(&self, user_id: &str, profile_id: &str) -> TransportResult<()> {
        self.check(user_id)?;
        let mut profiles = self.profiles.lock().unwrap();
        let before = profiles.len();
        profiles.retain(|profile| profile.id != profile_id);
        if profiles.len() == before {
            return Err(TransportError::Status {
                status: 404,
                detail: "profile not found".to_string(),
            });
        }
        Ok(())
    }
}

/// Toast sink recording every notification it receives.
#[derive(Default)]
pub(crate) struct RecordingToasts {
    entries: Mutex<Vec<(ToastKind, String)>>,
}

impl RecordingToasts {
    /// Notifications received so far, in emission order.
    pub(crate) fn entries(&self) -> Vec<(ToastKind, String)> {
        self.entries.lock().unwrap().clone()
    }
}

impl ToastSink for RecordingToasts {
    fn push(&self, kind: ToastKind, message: &str) {
        self.entries.lock().unwrap().push((kind, message.to_string()));
    }
}
