//! Error types for the portfolio client.
//!
//! - [`ApiError`] - failures talking to the backend
//! - [`ValidationError`] - local checks that abort an action before any request
//! - [`ActionError`] - top-level result of a user action
//!
//! Conversion is automatic via `From`, so `?` works across the layers.

use std::time::Duration;

use thiserror::Error;

// =============================================================================
// API Errors
// =============================================================================

/// Errors returned by [`crate::api::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend reported an expired or missing session.
    ///
    /// Local state has already been cleared and a reload requested by the
    /// time a caller sees this.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Non-success HTTP status.
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// No response within the configured timeout.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Request body could not be built.
    #[error("Failed to build request: {0}")]
    Encode(String),

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_authentication_required(&self) -> bool {
        matches!(self, ApiError::AuthenticationRequired)
    }

    /// HTTP status, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::AuthenticationRequired => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Local validation failures. None of these reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// URL has no `/d/<id>` segment.
    #[error("Invalid spreadsheet URL: {0}")]
    InvalidSpreadsheetUrl(String),

    /// A required form field is empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Upload attempted without files.
    #[error("No files selected")]
    NoFiles,

    /// Upload title does not match any known spreadsheet.
    #[error("No spreadsheet titled '{0}'")]
    NoTargetSpreadsheet(String),

    /// Sync attempted with an empty spreadsheet list.
    #[error("No spreadsheets to sync")]
    NothingToSync,
}

// =============================================================================
// Action Errors (top-level)
// =============================================================================

/// Outcome of a user-triggered workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The user declined a confirmation prompt.
    #[error("Cancelled")]
    Cancelled,

    /// Another submission is already in flight.
    #[error("Another operation is in progress")]
    Busy,

    /// The state store was dropped before the action finished.
    #[error("Application state is no longer available")]
    Detached,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for user actions.
pub type ActionResult<T> = Result<T, ActionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let api_err = ApiError::Network("connection refused".into());
        let action_err: ActionError = api_err.into();
        assert!(action_err.to_string().contains("connection refused"));

        let validation_err = ValidationError::MissingField("title");
        let action_err: ActionError = validation_err.into();
        assert!(action_err.to_string().contains("title"));
    }

    #[test]
    fn test_status_error_format() {
        let err = ApiError::Status {
            status: 404,
            message: "Spreadsheet not found".into(),
        };
        assert_eq!(err.to_string(), "Server error (404): Spreadsheet not found");
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_authentication_required());
    }

    #[test]
    fn test_timeout_format() {
        let err = ApiError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "Request timed out after 30s");
        assert_eq!(err.status(), None);
    }
}
