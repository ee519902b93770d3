//! User-facing notification surface.
//!
//! Fire-and-forget: the protocol reports what it did and never waits
//! on or inspects a response.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Sink for user-facing notifications (toast, banner, ...).
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// A notifier that drops everything (logs at debug).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        debug!(severity = severity.as_str(), message, "notification dropped");
    }
}
