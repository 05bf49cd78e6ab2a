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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Client-side branding settings synchronizer for the Whitemark API.
//!
//! Layout: `config.rs` (connection settings), `transport.rs` (backend port
//! and error type), `http.rs` (reqwest implementation), `store.rs`
//! (settings store and change broadcast), `editor.rs` (settings editor
//! controller), `profiles.rs` (saved-profiles manager), `storage.rs`
//! (device key-value port), `toast.rs` (transient notification port).
//!
//! The store is the single source of truth for the current settings and
//! the sole owner of the broadcast bus; the editor and the saved-profiles
//! manager are thin controllers that absorb transport failures at the
//! boundary and never re-throw.

pub mod config;
pub mod editor;
pub mod http;
pub mod profiles;
pub mod storage;
pub mod store;
pub mod toast;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ClientConfig;
pub use editor::SettingsEditor;
pub use http::HttpTransport;
pub use profiles::SavedProfilesManager;
pub use storage::{APPLIED_PROFILE_KEY, MemoryStorage, ProfileStorage, USER_ID_KEY};
pub use store::SettingsStore;
pub use toast::{ToastKind, ToastSink, TracingToasts};
pub use transport::{SettingsTransport, TransportError, TransportResult};
