//! Derived score records.
//!
//! These are built fresh from a game snapshot on every request and never stored.

use crate::identifiers::UserId;
use serde::{Deserialize, Serialize};

/// Raw distance between a prediction and the actual result of one question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDistance {
    /// Non-negative distance in the question's own unit
    pub value: f64,
    /// Whether the distance takes part in the normalized total
    pub is_numerical: bool,
}

impl QuestionDistance {
    /// A numerical distance. Negative input is folded to its magnitude.
    pub fn numerical(value: f64) -> Self {
        Self {
            value: value.abs(),
            is_numerical: true,
        }
    }

    /// An exact-match distance that never enters the total
    pub fn categorical(value: f64) -> Self {
        Self {
            value: value.abs(),
            is_numerical: false,
        }
    }

    /// No usable signal
    pub fn none() -> Self {
        Self {
            value: 0.0,
            is_numerical: false,
        }
    }
}

/// Score of one participant on one published question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionScore {
    /// Question text
    pub question: String,
    /// Submitted answer, `None` when missing or blank
    pub predicted: Option<String>,
    /// Actual result
    pub actual: String,
    /// Distance before normalization
    pub raw_distance: f64,
    /// Normalized contribution to the total
    pub score: f64,
    /// Whether the score counts towards the total
    pub is_numerical: bool,
}

/// Scores of one participant across all published questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantScore {
    /// Scored participant
    pub user_id: UserId,
    /// Participant's email or the placeholder
    pub user_email: String,
    /// Participant's display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Sum of normalized question scores; lower is better
    pub total_score: f64,
    /// Per-question breakdown in published order
    pub question_scores: Vec<QuestionScore>,
}

impl ParticipantScore {
    /// Whether at least one question produced a numerical distance
    pub fn has_numerical_signal(&self) -> bool {
        self.question_scores.iter().any(|qs| qs.is_numerical)
    }

    /// Name to show, falling back to the email
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(&self.user_email)
    }
}
