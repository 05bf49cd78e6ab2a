//! Transient notification port.
//!
//! Toast *display* is out of scope for this crate; controllers emit
//! through this sink and the embedding shell decides how to render.

/// Severity classification for transient notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// Sink receiving short-lived, auto-dismissing notifications.
pub trait ToastSink: Send + Sync {
    /// Emit a notification.
    fn push(&self, kind: ToastKind, message: &str);
}

/// Sink that forwards notifications to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingToasts;

impl ToastSink for TracingToasts {
    fn push(&self, kind: ToastKind, message: &str) {
        match kind {
            ToastKind::Error => tracing::warn!(message, "toast"),
            ToastKind::Info | ToastKind::Success => tracing::info!(message, "toast"),
        }
    }
}
