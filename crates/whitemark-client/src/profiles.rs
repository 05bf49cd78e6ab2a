//! Saved-profiles manager: list, apply, and delete named settings
//! profiles for a user identifier resolved from device storage.

use std::sync::Arc;

use tracing::{debug, warn};
use whitemark_api_models::SavedProfile;

use crate::storage::{APPLIED_PROFILE_KEY, ProfileStorage, USER_ID_KEY};
use crate::store::SettingsStore;
use crate::toast::{ToastKind, ToastSink};

/// Controller over the saved-profiles collection.
///
/// Transport failures surface as error toasts and never escape to the
/// caller. Applying a profile persists it to device storage without
/// touching the store or the broadcast bus; callers that need live
/// synchronization reconcile separately.
pub struct SavedProfilesManager {
    store: SettingsStore,
    storage: Arc<dyn ProfileStorage>,
    toasts: Arc<dyn ToastSink>,
    profiles: Vec<SavedProfile>,
}

impl SavedProfilesManager {
    /// Construct a manager over the given store, storage, and toast sink.
    #[must_use]
    pub fn new(
        store: SettingsStore,
        storage: Arc<dyn ProfileStorage>,
        toasts: Arc<dyn ToastSink>,
    ) -> Self {
        Self {
            store,
            storage,
            toasts,
            profiles: Vec::new(),
        }
    }

    /// Profiles currently held in memory, in backend order.
    #[must_use]
    pub fn profiles(&self) -> &[SavedProfile] {
        &self.profiles
    }

    /// User identifier resolved from device storage, empty when absent.
    #[must_use]
    pub fn user_id(&self) -> String {
        self.storage.get(USER_ID_KEY).unwrap_or_default()
    }

    /// Load the saved profiles for the resolved user identifier.
    ///
    /// On failure an error toast is emitted and the list is left empty.
    pub async fn load(&mut self) {
        let user_id = self.user_id();
        match self.store.list_saved_profiles(&user_id).await {
            Ok(profiles) => self.profiles = profiles,
            Err(err) => {
                warn!(error = %err, "failed to load saved profiles");
                self.toasts
                    .push(ToastKind::Error, "failed to load saved settings");
            }
        }
    }

    /// Delete the profile at `index`.
    ///
    /// The local entry is removed only after the backend confirms the
    /// delete, and removal is by id rather than position, so a concurrent
    /// refresh cannot drop the wrong entry. Failures surface as an error
    /// toast and leave the list unchanged.
    pub async fn delete_at(&mut self, index: usize) {
        let Some(profile) = self.profiles.get(index) else {
            debug!(index, "delete ignored for out-of-range profile index");
            return;
        };
        let profile_id = profile.id.clone();
        let user_id = self.user_id();
        match self.store.delete_profile(&user_id, &profile_id).await {
            Ok(()) => {
                self.profiles.retain(|profile| profile.id != profile_id);
                self.toasts.push(ToastKind::Success, "deleted saved setting");
            }
            Err(err) => {
                warn!(error = %err, profile_id, "failed to delete saved profile");
                self.toasts.push(ToastKind::Error, "failed to delete setting");
            }
        }
    }

    /// Apply the profile at `index`, persisting it to device storage under
    /// a fixed key.
    ///
    /// Returns the applied profile for the caller to act on (e.g. feed it
    /// into an open editor); returns `None` for an out-of-range index.
    pub fn apply_at(&self, index: usize) -> Option<SavedProfile> {
        let profile = self.profiles.get(index)?.clone();
        let serialized =
            serde_json::to_string(&profile).expect("saved profile serializes to JSON");
        self.storage.set(APPLIED_PROFILE_KEY, &serialized);
        self.toasts.push(ToastKind::Success, "applied saved setting");
        Some(profile)
    }
}
