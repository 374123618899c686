/// Icon shown on successful outcomes
pub const SUCCESS_ICON: &str = "bi bi-check-circle";

/// Icon shown on every other outcome
pub const ALERT_ICON: &str = "bi bi-exclamation-circle";

/// Severity token used when the caller passes an empty or unusable kind
pub const DEFAULT_SEVERITY: &str = "default";

/// Notification kind as requested by the caller.
///
/// The classification is two-way: `"success"` picks the
/// checkmark icon, anything else falls back to the alert icon. The original
/// string is kept so it can still be used as the severity class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Alert(String),
}

impl NotificationKind {
    /// Icon token for the renderer's icon slot
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => SUCCESS_ICON,
            Self::Alert(_) => ALERT_ICON,
        }
    }

    /// The kind as the caller wrote it, forwarded as the `type` option
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Alert(raw) => raw,
        }
    }

    /// CSS-safe severity token, substituted into `alert-{0}`
    pub fn severity(&self) -> String {
        let token: String = self
            .as_str()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();

        if token.is_empty() {
            DEFAULT_SEVERITY.to_string()
        } else {
            token
        }
    }
}

impl From<&str> for NotificationKind {
    fn from(value: &str) -> Self {
        match value {
            "success" => Self::Success,
            other => Self::Alert(other.to_string()),
        }
    }
}
