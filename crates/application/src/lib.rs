//! Application layer for Babybet
//!
//! Scoring of baby-shower prediction games and the services that run it over
//! game snapshots.
//!
//! ## Modules
//!
//! - `scoring` - Distance evaluators, normalization engine, leaderboard, scrabble values
//! - `services` - Snapshot orchestration (GameScoringService)

pub mod scoring;
pub mod services;

// Re-export commonly used types
pub use scoring::{
    calculate_participant_scores, get_leaderboard, DistanceEvaluator, LeaderboardEntry,
    ScoringEngine, ScoringEngineBuilder,
};
pub use services::{GameScoreReport, GameScoringService};

use babybet_domain::{AppError, ValidationError};
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug, Clone)]
pub enum ApplicationError {
    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Get error code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::NotFound(_) => "NOT_FOUND",
            ApplicationError::InvalidInput(_) => "INVALID_INPUT",
            ApplicationError::ValidationFailed(_) => "VALIDATION_FAILED",
            ApplicationError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit code for command line callers
    pub fn exit_code(&self) -> i32 {
        match self {
            ApplicationError::InvalidInput(_) | ApplicationError::ValidationFailed(_) => 2,
            ApplicationError::NotFound(_) | ApplicationError::Internal(_) => 1,
        }
    }
}

impl From<ValidationError> for ApplicationError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Multiple(messages) => ApplicationError::ValidationFailed(messages.join("; ")),
            other => ApplicationError::ValidationFailed(other.to_string()),
        }
    }
}

impl From<AppError> for ApplicationError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(e) => e.into(),
            AppError::Game(babybet_domain::GameError::QuestionNotFound(id)) => {
                ApplicationError::NotFound(format!("question {}", id))
            }
            AppError::Game(e) => ApplicationError::InvalidInput(e.to_string()),
            AppError::Io(msg) | AppError::Serialization(msg) => ApplicationError::InvalidInput(msg),
            AppError::Internal(msg) => ApplicationError::Internal(msg),
        }
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
