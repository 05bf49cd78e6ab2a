//! Settings store: single source of truth for the current branding
//! settings and sole owner of the change-broadcast bus.

use std::sync::{Arc, Mutex};

use tracing::debug;
use whitemark_api_models::color::normalize_primary_color;
use whitemark_api_models::{LogoUpload, SavedProfile, SettingsCandidate};
use whitemark_events::{BrandSettings, SettingsBus, SettingsEvent};

use crate::transport::{SettingsTransport, TransportResult};

/// Single source of truth for the current branding settings.
///
/// Every successful persist or logo upload emits exactly one event on the
/// bus; failures and read-only operations emit none. The store keeps a
/// canonical in-memory copy overwritten only by successful operations.
#[derive(Clone)]
pub struct SettingsStore {
    transport: Arc<dyn SettingsTransport>,
    bus: SettingsBus,
    current: Arc<Mutex<Option<BrandSettings>>>,
}

impl SettingsStore {
    /// Construct a store over the given transport with a fresh bus.
    #[must_use]
    pub fn new(transport: Arc<dyn SettingsTransport>) -> Self {
        Self {
            transport,
            bus: SettingsBus::new(),
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Broadcast bus handle for subscribing to settings changes.
    #[must_use]
    pub const fn bus(&self) -> &SettingsBus {
        &self.bus
    }

    /// Canonical in-memory copy of the current settings, if any operation
    /// has succeeded yet.
    ///
    /// # Panics
    ///
    /// Panics if the canonical-copy mutex has been poisoned.
    #[must_use]
    pub fn current(&self) -> Option<BrandSettings> {
        self.current
            .lock()
            .expect("canonical settings mutex poisoned")
            .clone()
    }

    /// Fetch the current settings for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::TransportError`] when the backend is unreachable
    /// or responds with a non-success status; there is no local fallback.
    pub async fn fetch_settings(&self, user_id: &str) -> TransportResult<BrandSettings> {
        let settings = self.transport.fetch_settings(user_id).await?;
        self.replace_current(settings.clone());
        Ok(settings)
    }

    /// Validate, persist, and broadcast a candidate settings update.
    ///
    /// The candidate color is normalized before it reaches the transport:
    /// anything that misses the strict `#RRGGBB` pattern is replaced with
    /// the fixed default. The backend's returned canonical fields win over
    /// the candidate in the merged result; candidate values are the
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::TransportError`] on backend failure; no event is
    /// broadcast in that case.
    pub async fn persist_settings(
        &self,
        user_id: &str,
        candidate: SettingsCandidate,
    ) -> TransportResult<BrandSettings> {
        let mut candidate = candidate;
        candidate.primary_color = normalize_primary_color(&candidate.primary_color);

        let response = self.transport.update_settings(user_id, &candidate).await?;
        let merged = BrandSettings {
            brand_name: response
                .brand_name
                .unwrap_or_else(|| candidate.brand_name.clone()),
            logo_url: response
                .logo_url
                .or_else(|| candidate.logo_url.clone())
                .unwrap_or_default(),
            primary_color: response
                .color
                .unwrap_or_else(|| candidate.primary_color.clone()),
        };

        self.replace_current(merged.clone());
        let event_id = self.bus.publish(SettingsEvent::SettingsPersisted {
            settings: merged.clone(),
        });
        debug!(event_id, user_id, "settings persisted");
        Ok(merged)
    }

    /// Upload a logo image and broadcast the new locator.
    ///
    /// The broadcast is a deliberate partial update: brand name and color
    /// are reported empty, only the logo locator is populated.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::TransportError`] on backend failure; no event is
    /// broadcast in that case.
    pub async fn upload_logo(&self, user_id: &str, upload: LogoUpload) -> TransportResult<String> {
        let response = self.transport.upload_logo(user_id, upload).await?;
        self.patch_current_logo(&response.logo_url);
        let event_id = self.bus.publish(SettingsEvent::LogoUploaded {
            settings: BrandSettings {
                brand_name: String::new(),
                logo_url: response.logo_url.clone(),
                primary_color: String::new(),
            },
        });
        debug!(event_id, user_id, "logo uploaded");
        Ok(response.logo_url)
    }

    /// List the saved profiles owned by `user_id`, in backend order.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::TransportError`] on backend failure.
    pub async fn list_saved_profiles(&self, user_id: &str) -> TransportResult<Vec<SavedProfile>> {
        self.transport.list_saved_profiles(user_id).await
    }

    /// Fetch a single saved profile by id.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::TransportError`] on backend failure or when the
    /// id does not exist.
    pub async fn fetch_saved_profile(
        &self,
        user_id: &str,
        profile_id: &str,
    ) -> TransportResult<SavedProfile> {
        self.transport.fetch_saved_profile(user_id, profile_id).await
    }

    /// Persist `settings` as a new saved profile.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::TransportError`] on backend failure.
    pub async fn save_profile(
        &self,
        user_id: &str,
        settings: &BrandSettings,
    ) -> TransportResult<SavedProfile> {
        let profile = self.transport.save_profile(user_id, settings).await?;
        debug!(user_id, profile_id = %profile.id, "saved settings profile");
        Ok(profile)
    }

    /// Delete the saved profile identified by `profile_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::TransportError`] on backend failure or when the
    /// id does not exist.
    pub async fn delete_profile(&self, user_id: &str, profile_id: &str) -> TransportResult<()> {
        self.transport.delete_profile(user_id, profile_id).await
    }

    fn replace_current(&self, settings: BrandSettings) {
        *self
            .current
            .lock()
            .expect("canonical settings mutex poisoned") = Some(settings);
    }

    fn patch_current_logo(&self, logo_url: &str) {
        let mut current = self
            .current
            .lock()
            .expect("canonical settings mutex poisoned");
        if let Some(settings) = current.as_mut() {
            settings.logo_url = logo_url.to_string();
        }
    }
}
