//! Settings editor controller bridging user-entered fields to the store.
//!
//! The editor holds transient working copies only; the store keeps the
//! canonical settings. Transport failures are absorbed into the `error`
//! flag and never re-thrown.

use tracing::{debug, warn};
use whitemark_api_models::color::DEFAULT_PRIMARY_COLOR;
use whitemark_api_models::{LogoUpload, SavedProfile, SettingsCandidate};
use whitemark_events::{BrandSettings, SettingsEvent};

use crate::store::SettingsStore;

/// Editable working state over the current branding settings.
pub struct SettingsEditor {
    store: SettingsStore,
    user_id: String,
    /// Last settings loaded from or acknowledged by the store.
    pub settings: BrandSettings,
    /// Working brand name field.
    pub brand_name: String,
    /// Working accent color field.
    pub primary_color: String,
    /// Working logo preview locator.
    pub logo_preview: String,
    /// Whether a load or save is in flight.
    pub loading: bool,
    /// User-facing message for the last failed action.
    pub error: Option<String>,
}

impl SettingsEditor {
    /// Construct an editor for `user_id` with default working fields.
    #[must_use]
    pub fn new(store: SettingsStore, user_id: impl Into<String>) -> Self {
        Self {
            store,
            user_id: user_id.into(),
            settings: BrandSettings::default(),
            brand_name: String::new(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            logo_preview: String::new(),
            loading: false,
            error: None,
        }
    }

    /// Load the current settings into the working fields.
    ///
    /// On failure the error flag is set and the fields keep their prior
    /// values.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.store.fetch_settings(&self.user_id).await {
            Ok(settings) => {
                self.brand_name = settings.brand_name.clone();
                self.primary_color = settings.primary_color.clone();
                self.logo_preview = settings.logo_url.clone();
                self.settings = settings;
                self.loading = false;
            }
            Err(err) => {
                warn!(error = %err, "failed to load settings");
                self.error = Some("failed to load settings".to_string());
                self.loading = false;
            }
        }
    }

    /// Upload a newly selected logo and update the preview on success.
    ///
    /// On failure the error flag is set and the preview is left untouched.
    pub async fn select_logo(&mut self, upload: LogoUpload) {
        match self.store.upload_logo(&self.user_id, upload).await {
            Ok(logo_url) => {
                self.logo_preview = logo_url.clone();
                self.settings.logo_url = logo_url;
            }
            Err(err) => {
                warn!(error = %err, "logo upload failed");
                self.error = Some("logo upload failed".to_string());
            }
        }
    }

    /// Build a candidate from the working fields.
    ///
    /// The logo locator is omitted entirely when the preview is empty or
    /// whitespace-only, preserving backend defaulting.
    #[must_use]
    pub fn candidate(&self) -> SettingsCandidate {
        let logo_url = if self.logo_preview.trim().is_empty() {
            None
        } else {
            Some(self.logo_preview.clone())
        };
        SettingsCandidate {
            brand_name: self.brand_name.clone(),
            primary_color: self.primary_color.clone(),
            logo_url,
            logo_file: None,
        }
    }

    /// Persist the working fields via the store.
    ///
    /// On success the candidate is re-broadcast on the store's bus for any
    /// other open view; on failure the error flag is set. The loading flag
    /// clears either way.
    pub async fn save(&mut self) {
        self.loading = true;
        let candidate = self.candidate();
        match self
            .store
            .persist_settings(&self.user_id, candidate.clone())
            .await
        {
            Ok(_) => {
                let settings = BrandSettings {
                    brand_name: candidate.brand_name,
                    logo_url: candidate.logo_url.unwrap_or_default(),
                    primary_color: candidate.primary_color,
                };
                let event_id = self
                    .store
                    .bus()
                    .publish(SettingsEvent::SettingsPersisted { settings });
                debug!(event_id, "re-broadcast saved settings");
                self.loading = false;
            }
            Err(err) => {
                warn!(error = %err, "failed to save settings");
                self.error = Some("failed to save settings".to_string());
                self.loading = false;
            }
        }
    }

    /// Discard unsaved edits and reload from the store.
    pub async fn reset(&mut self) {
        self.load().await;
    }

    /// Copy a saved profile's fields into the working state.
    ///
    /// Purely local: no backend call is made and nothing is broadcast
    /// until the user explicitly saves.
    pub fn apply_profile(&mut self, profile: &SavedProfile) {
        self.brand_name = profile.brand_name.clone();
        self.primary_color = profile.primary_color.clone();
        self.logo_preview = profile.logo_url.clone();
        self.settings = BrandSettings::from(profile);
    }

    /// Persist the working fields as a new saved profile.
    ///
    /// Returns the created profile, or `None` when the backend call failed
    /// (the error flag is set).
    pub async fn save_as_profile(&mut self) -> Option<SavedProfile> {
        let snapshot = BrandSettings {
            brand_name: self.brand_name.clone(),
            logo_url: self.logo_preview.clone(),
            primary_color: self.primary_color.clone(),
        };
        match self.store.save_profile(&self.user_id, &snapshot).await {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!(error = %err, "failed to save settings profile");
                self.error = Some("failed to save settings profile".to_string());
                None
            }
        }
    }
}
