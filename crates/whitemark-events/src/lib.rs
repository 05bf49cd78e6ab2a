//! Settings-change event bus for the Whitemark client.
//!
//! The bus is the channel through which canonical branding settings travel
//! from the store to every interested view. Internally it uses
//! `tokio::broadcast` with a bounded buffer; a subscriber only observes
//! events published after it attached, so late subscribers never see a
//! replay, and a subscriber that falls behind skips ahead to the oldest
//! retained event.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tokio::sync::broadcast::{Receiver, Sender};

/// Identifier assigned to each event published on the bus.
pub type EventId = u64;

/// Default buffer size for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// Branding configuration carried across the client.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct BrandSettings {
    /// Display name shown in the product chrome; may be empty.
    pub brand_name: String,
    /// Locator of the brand logo image; empty when no logo is set.
    pub logo_url: String,
    /// Six-digit hex accent color, `#RRGGBB`.
    pub primary_color: String,
}

/// Typed settings events surfaced to subscribers.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SettingsEvent {
    /// Full settings update emitted after a successful persist.
    SettingsPersisted {
        /// Canonical settings merged from the backend response.
        settings: BrandSettings,
    },
    /// Partial update emitted after a successful logo upload. Only the
    /// logo locator is populated; brand name and color are reported empty.
    LogoUploaded {
        /// Partial settings carrying the new logo locator.
        settings: BrandSettings,
    },
}

impl SettingsEvent {
    /// Machine-friendly discriminator for log filtering.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SettingsPersisted { .. } => "settings_persisted",
            Self::LogoUploaded { .. } => "logo_uploaded",
        }
    }

    /// Settings payload carried by the event.
    #[must_use]
    pub const fn settings(&self) -> &BrandSettings {
        match self {
            Self::SettingsPersisted { settings } | Self::LogoUploaded { settings } => settings,
        }
    }
}

/// Metadata wrapper around events. Each envelope tracks the event id and
/// emission timestamp.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct EventEnvelope {
    /// Sequential identifier assigned at publish time.
    pub id: EventId,
    /// Emission timestamp.
    pub timestamp: DateTime<Utc>,
    /// Event payload.
    pub event: SettingsEvent,
}

/// Shared settings bus built on top of `tokio::broadcast`.
///
/// The bus is owned by the settings store; consumers receive a cloned
/// handle and register explicitly via [`SettingsBus::subscribe`]. Dropping
/// the returned stream unregisters the subscriber.
#[derive(Debug, Clone)]
pub struct SettingsBus {
    sender: Sender<EventEnvelope>,
    next_id: Arc<AtomicU64>,
}

impl SettingsBus {
    /// Construct a bus with the provided channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "settings bus capacity must be positive");
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Construct a bus with the default channel capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Publish an event, assigning it a sequential identifier.
    ///
    /// Delivery is fire-and-forget: publishing with no live subscribers is
    /// not an error.
    pub fn publish(&self, event: SettingsEvent) -> EventId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let envelope = EventEnvelope {
            id,
            timestamp: Utc::now(),
            event,
        };
        let _ = self.sender.send(envelope);
        id
    }

    /// Subscribe to events published after this call.
    ///
    /// Earlier events are never replayed.
    #[must_use]
    pub fn subscribe(&self) -> EventStream {
        EventStream {
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of currently attached subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SettingsBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Stream wrapper that yields events from the live broadcast channel.
pub struct EventStream {
    receiver: Receiver<EventEnvelope>,
}

impl EventStream {
    /// Receive the next event, skipping ahead when the subscriber lagged.
    pub async fn next(&mut self) -> Option<EventEnvelope> {
        match self.receiver.recv().await {
            Ok(event) => Some(event),
            Err(broadcast::error::RecvError::Lagged(_)) => self.receiver.recv().await.ok(),
            Err(broadcast::error::RecvError::Closed) => None,
        }
    }

    /// Receive an already-buffered event without waiting.
    ///
    /// Returns `None` when no event is pending.
    pub fn try_next(&mut self) -> Option<EventEnvelope> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(_)) => {}
                Err(_) => return None,
            }
        }
    }
}
