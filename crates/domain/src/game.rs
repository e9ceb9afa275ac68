//! Game snapshot: questions, published set, actual results and bets.
//!
//! A snapshot is a consistent point-in-time copy of one game as read from the
//! store. All scoring works on snapshots; nothing here talks to storage.

use crate::errors::GameError;
use crate::identifiers::{GameId, QuestionId, UserId};
use crate::prediction::{group_bets, Bet, Participant};
use crate::question::Question;
use crate::validation::ValidationResult;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};
use validator::Validate;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Accepting and showing predictions
    #[default]
    Active,
    /// The owner has revealed the results
    ResultsPublished,
}

impl GameStatus {
    /// Check if the transition to `target` is allowed
    pub fn can_transition_to(&self, target: GameStatus) -> bool {
        matches!((self, target), (Self::Active, Self::ResultsPublished))
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::ResultsPublished => "Results Published",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Ground truth set by the game owner, keyed by question id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActualResults(IndexMap<QuestionId, String>);

impl ActualResults {
    /// Empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from form input: values are trimmed and blank entries dropped.
    pub fn from_raw<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<QuestionId>,
        V: AsRef<str>,
    {
        let results = entries
            .into_iter()
            .filter_map(|(key, value)| {
                let trimmed = value.as_ref().trim();
                (!trimmed.is_empty()).then(|| (key.into(), trimmed.to_string()))
            })
            .collect();
        Self(results)
    }

    /// Set the actual value of a question
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: impl Into<String>) {
        self.0.insert(id.into(), value.into());
    }

    /// Actual value of a question, if revealed
    pub fn get(&self, id: &QuestionId) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Whether a result is recorded for the question
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.0.contains_key(id)
    }

    /// Results in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Number of recorded results
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no result is recorded yet
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<QuestionId>, V: Into<String>> FromIterator<(K, V)> for ActualResults {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Point-in-time copy of one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Game key
    pub id: GameId,
    /// Title shown to guests
    pub name: String,
    /// Lifecycle state
    #[serde(default)]
    pub status: GameStatus,
    /// Owner of the game
    pub created_by: UserId,
    /// Actual results keyed by question id
    #[serde(default)]
    pub actual_results: ActualResults,
    /// Texts of the questions whose results are revealed
    #[serde(default)]
    pub published_questions: Vec<String>,
    /// Questions of the game
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Every stored bet row
    #[serde(default)]
    pub bets: Vec<Bet>,
}

impl GameSnapshot {
    /// Create an empty active game
    pub fn new(name: impl Into<String>, created_by: impl Into<UserId>) -> Self {
        Self {
            id: GameId::new(),
            name: name.into(),
            status: GameStatus::Active,
            created_by: created_by.into(),
            actual_results: ActualResults::new(),
            published_questions: Vec::new(),
            questions: Vec::new(),
            bets: Vec::new(),
        }
    }

    /// Questions whose text is in the published list, in question order
    pub fn published(&self) -> Vec<Question> {
        let published: HashSet<&str> = self.published_questions.iter().map(String::as_str).collect();
        self.questions
            .iter()
            .filter(|q| published.contains(q.text.as_str()))
            .cloned()
            .collect()
    }

    /// Whether every question has been published
    pub fn is_fully_published(&self) -> bool {
        !self.questions.is_empty()
            && self
                .questions
                .iter()
                .all(|q| self.published_questions.iter().any(|p| p == &q.text))
    }

    /// Find a question by id
    pub fn question(&self, id: &QuestionId) -> Result<&Question, GameError> {
        self.questions
            .iter()
            .find(|q| &q.id == id)
            .ok_or_else(|| GameError::QuestionNotFound(id.to_string()))
    }

    /// Add question texts to the published list.
    ///
    /// Already published texts are not repeated; first occurrence order is kept.
    /// Returns the number of texts newly published.
    pub fn publish_questions<I, S>(&mut self, texts: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.published_questions.len();
        let mut merged: IndexSet<String> = self.published_questions.drain(..).collect();
        for text in texts {
            let text = text.into();
            if !self.questions.iter().any(|q| q.text == text) {
                warn!(game_id = %self.id, question = %text, "Publishing text with no matching question");
            }
            merged.insert(text);
        }
        self.published_questions = merged.into_iter().collect();

        let added = self.published_questions.len() - before;
        debug!(game_id = %self.id, added, total = self.published_questions.len(), "Published questions");
        added
    }

    /// Remove question texts from the published list. Returns the number removed.
    pub fn unpublish_questions<I, S>(&mut self, texts: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let remove: HashSet<String> = texts.into_iter().map(|t| t.as_ref().to_string()).collect();
        let before = self.published_questions.len();
        self.published_questions.retain(|q| !remove.contains(q));

        let removed = before - self.published_questions.len();
        debug!(game_id = %self.id, removed, total = self.published_questions.len(), "Unpublished questions");
        removed
    }

    /// Mark the results as revealed
    pub fn publish_results(&mut self) -> Result<(), GameError> {
        let target = GameStatus::ResultsPublished;
        if !self.status.can_transition_to(target) {
            return Err(GameError::InvalidStatusTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }

    /// Participants built from the bets, optionally without the game owner
    pub fn participants(&self, exclude_owner: bool, unknown_email: &str) -> Vec<Participant> {
        let exclude = exclude_owner.then_some(&self.created_by);
        group_bets(&self.bets, exclude, unknown_email)
    }

    /// Consistency report for this snapshot.
    ///
    /// Errors mark snapshots the prediction join cannot handle unambiguously;
    /// warnings point at data that will silently not be scored.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::success();
        let mut ids = HashSet::new();
        let mut texts = HashSet::new();

        for (i, question) in self.questions.iter().enumerate() {
            let path = format!("questions[{}]", i);
            if let Err(errors) = question.validate() {
                for (field, _) in errors.field_errors() {
                    result.add_error(format!("{}.{}", path, field), "must be 1 to 500 characters");
                }
            }
            if !ids.insert(&question.id) {
                result.add_error(format!("{}.id", path), format!("duplicate question id '{}'", question.id));
            }
            if !question.text.is_empty() && !texts.insert(question.text.as_str()) {
                result.add_error(
                    format!("{}.text", path),
                    format!("duplicate question text '{}'; predictions are matched by text", question.text),
                );
            }
        }

        for (i, text) in self.published_questions.iter().enumerate() {
            if !texts.contains(text.as_str()) {
                result.add_warning(
                    format!("published_questions[{}]", i),
                    format!("no question with text '{}'", text),
                );
            }
        }

        for (id, _) in self.actual_results.iter() {
            if !ids.contains(id) {
                result.add_warning(
                    format!("actual_results.{}", id),
                    "no question with this id; the result is ignored",
                );
            }
        }

        for (i, bet) in self.bets.iter().enumerate() {
            if !texts.contains(bet.question.as_str()) {
                result.add_warning(
                    format!("bets[{}].question", i),
                    format!("no question with text '{}'; the prediction is never scored", bet.question),
                );
            }
        }

        result
    }
}
