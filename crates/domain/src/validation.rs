//! Validation report types for game snapshots.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// Outcome of checking a snapshot.
///
/// Errors block scoring; warnings describe data that will silently be left out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed (no errors)
    pub valid: bool,

    /// Blocking issues
    pub errors: Vec<ValidationIssue>,

    /// Non-blocking issues
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to this validation result
    pub fn add_error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationIssue::error(path, message));
    }

    /// Add a warning to this validation result
    pub fn add_warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue::warning(path, message));
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get total count of all issues
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// All issues, errors first
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }

    /// Turn blocking issues into an error, keeping the report otherwise
    pub fn into_result(self) -> Result<Self, ValidationError> {
        if self.valid {
            return Ok(self);
        }
        Err(ValidationError::Multiple(
            self.errors.iter().map(ValidationIssue::to_string).collect(),
        ))
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Individual validation issue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Location in the snapshot, e.g. `questions[2].text` or `bets[7].question`
    pub path: String,

    /// Human-readable description of the issue
    pub message: String,

    /// Severity level of this issue
    pub severity: IssueSeverity,
}

impl ValidationIssue {
    /// Create a new error-level validation issue
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: IssueSeverity::Error,
        }
    }

    /// Create a new warning-level validation issue
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: IssueSeverity::Warning,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Severity level of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Data that will be left out of scoring
    Warning,

    /// Snapshot cannot be scored unambiguously
    Error,
}

impl IssueSeverity {
    /// Check if this severity level is blocking
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Error)
    }
}
