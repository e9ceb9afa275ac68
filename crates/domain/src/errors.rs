//! Error types for the babybet domain.
//!
//! Scoring itself never fails: malformed answers degrade to "not scored".
//! These errors cover the operations around it, such as game state changes and
//! snapshot validation.

use crate::game::GameStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Game-related errors
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    /// Validation-related errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Snapshot could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// Snapshot could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Game(GameError::QuestionNotFound(_)) => "QUESTION_NOT_FOUND",
            Self::Game(_) => "GAME_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit code used by command-line front ends
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Io(_) | Self::Serialization(_) => 3,
            _ => 1,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Game-specific errors
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Question not found
    #[error("Question not found: {0}")]
    QuestionNotFound(String),

    /// Invalid status transition
    #[error("Game status transition not allowed: {from:?} -> {to:?}")]
    InvalidStatusTransition {
        /// Current status
        from: GameStatus,
        /// Requested status
        to: GameStatus,
    },
}

/// Validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Field validation failed
    #[error("Field validation failed: {field} - {message}")]
    FieldValidation {
        /// Offending field
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// Multiple validation errors
    #[error("Multiple validation errors: {0:?}")]
    Multiple(Vec<String>),
}

/// Machine-readable error report
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

/// Detailed error information
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Report with a code and message, stamped now
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
            timestamp: Utc::now(),
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        let details = match error {
            AppError::Validation(ValidationError::Multiple(messages)) => {
                Some(serde_json::json!(messages))
            }
            _ => None,
        };

        Self {
            error: ErrorDetail {
                code: error.error_code().to_string(),
                message: error.to_string(),
                details,
            },
            timestamp: Utc::now(),
        }
    }
}

/// Application-wide result type
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::Game(GameError::QuestionNotFound("q1".to_string()));
        assert_eq!(err.error_code(), "QUESTION_NOT_FOUND");
        assert_eq!(err.exit_code(), 1);

        let err = AppError::Game(GameError::InvalidStatusTransition {
            from: GameStatus::ResultsPublished,
            to: GameStatus::ResultsPublished,
        });
        assert_eq!(err.error_code(), "GAME_ERROR");

        let err = AppError::Validation(ValidationError::Multiple(vec!["a".to_string()]));
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_error_shares_exit_code_with_decoding() {
        let err = AppError::Io("snapshot.json: No such file or directory".to_string());
        assert_eq!(err.error_code(), "IO_ERROR");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_from_serde_error() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: AppError = parse.unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_error_response_serialization() {
        let err = AppError::Validation(ValidationError::Multiple(vec![
            "questions[1].text: duplicate".to_string(),
        ]));
        let response = ErrorResponse::from(&err);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("VALIDATION_ERROR"));
        assert!(json.contains("questions[1].text"));

        let plain = ErrorResponse::new("INVALID_INPUT", "limit must be at least 1");
        let value = serde_json::to_value(&plain).unwrap();
        assert_eq!(value["error"]["code"], "INVALID_INPUT");
        assert!(value["error"].get("details").is_none());
    }
}
