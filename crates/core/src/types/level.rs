//! Notification severity levels.

use serde::{Deserialize, Serialize};

/// Severity of a transient user-facing notification.
///
/// Every state-changing cart outcome is reported at one of these levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    /// The requested change was applied.
    Success,
    /// The request was rejected; nothing changed.
    Error,
    /// Neutral confirmation (removals, clears).
    Info,
    /// The request was refused or only partly honoured.
    Warning,
}

impl NotificationLevel {
    /// Lowercase name used in logs and sink payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NotificationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            _ => Err(format!("invalid notification level: {s}")),
        }
    }
}
