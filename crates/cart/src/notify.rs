//! Collaborator contracts the cart model reports to.
//!
//! Both are fire-and-forget: the model never inspects what a sink does with
//! a message or a snapshot, and a sink has no way to veto a mutation.

use tandoor_core::NotificationLevel;

use crate::cart::CartSnapshot;

/// Displays transient messages to the visitor.
pub trait NotificationSink {
    fn notify(&self, message: &str, level: NotificationLevel);
}

/// Redraws the cart UI from a snapshot.
pub trait CartRenderer {
    fn render(&self, snapshot: &CartSnapshot);
}

/// Notification sink that forwards messages to `tracing`.
///
/// Suitable for headless hosts where nobody watches a toast area.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, message: &str, level: NotificationLevel) {
        match level {
            NotificationLevel::Error => tracing::error!(%level, "{message}"),
            NotificationLevel::Warning => tracing::warn!(%level, "{message}"),
            NotificationLevel::Success | NotificationLevel::Info => {
                tracing::info!(%level, "{message}");
            }
        }
    }
}

/// Renderer that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl CartRenderer for NoopRenderer {
    fn render(&self, _snapshot: &CartSnapshot) {}
}
