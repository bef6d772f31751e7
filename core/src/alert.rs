//! Transient notifications shown after asynchronous operations.

use crate::error::{ActionError, ApiError};

/// Message shown when the backend reports an expired session.
pub const SESSION_EXPIRED_TEXT: &str = "Your session has expired. Please sign in again.";

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
    Warning,
}

impl AlertKind {
    /// Bootstrap-style variant name, used as a CSS class suffix.
    pub fn variant(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
            AlertKind::Warning => "warning",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            AlertKind::Success => "✅",
            AlertKind::Danger => "❌",
            AlertKind::Warning => "⚠️",
        }
    }
}

/// One dismissible, one-line notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
}

impl Alert {
    pub fn new(kind: AlertKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, text)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(AlertKind::Danger, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(AlertKind::Warning, text)
    }

    /// Alert for a failed backend call. An expired session gets its own
    /// text, anything else shows `failure`.
    pub fn for_api_error(error: &ApiError, failure: &str) -> Self {
        if error.is_authentication_required() {
            Self::warning(SESSION_EXPIRED_TEXT)
        } else {
            Self::danger(failure)
        }
    }

    /// Alert for a failed action; `None` when nothing should be shown.
    pub fn for_action_error(error: &ActionError, failure: &str) -> Option<Self> {
        match error {
            ActionError::Api(e) => Some(Self::for_api_error(e, failure)),
            ActionError::Validation(e) => Some(Self::warning(e.to_string())),
            ActionError::Busy => Some(Self::warning(error.to_string())),
            ActionError::Cancelled | ActionError::Detached => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_api_error_alerts() {
        let alert = Alert::for_api_error(&ApiError::AuthenticationRequired, "Failed to sync data");
        assert_eq!(alert.kind, AlertKind::Warning);
        assert_eq!(alert.text, SESSION_EXPIRED_TEXT);

        let alert = Alert::for_api_error(
            &ApiError::Network("offline".into()),
            "Failed to sync data",
        );
        assert_eq!(alert, Alert::danger("Failed to sync data"));
    }

    #[test]
    fn test_action_error_alerts() {
        assert!(Alert::for_action_error(&ActionError::Cancelled, "x").is_none());

        let alert = Alert::for_action_error(
            &ActionError::Validation(ValidationError::NothingToSync),
            "x",
        )
        .unwrap();
        assert_eq!(alert.kind.variant(), "warning");
    }
}
