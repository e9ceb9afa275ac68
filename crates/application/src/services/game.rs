//! Game scoring service.

use crate::scoring::{LeaderboardEntry, ScoringEngine};
use crate::{ApplicationError, ApplicationResult};
use babybet_common::config::ScoringConfig;
use babybet_domain::{GameId, GameSnapshot, GameStatus, ParticipantScore, ValidationIssue};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Scores and leaderboard of one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScoreReport {
    pub game_id: GameId,
    pub status: GameStatus,
    pub published_question_count: usize,
    /// Every participant, in bet order (management view)
    pub scores: Vec<ParticipantScore>,
    /// Ranked participants with a numerical signal (public view)
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Non-blocking consistency issues of the snapshot
    pub warnings: Vec<ValidationIssue>,
}

impl GameScoreReport {
    fn empty(game: &GameSnapshot, published_question_count: usize, warnings: Vec<ValidationIssue>) -> Self {
        Self {
            game_id: game.id.clone(),
            status: game.status,
            published_question_count,
            scores: Vec::new(),
            leaderboard: Vec::new(),
            warnings,
        }
    }

    /// Whether any participant was scored
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Turns game snapshots into score reports
pub struct GameScoringService {
    engine: Arc<ScoringEngine>,
    config: ScoringConfig,
}

impl GameScoringService {
    /// Create a service with the default scoring engine
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_engine(Arc::new(ScoringEngine::new()), config)
    }

    /// Create a service with a custom scoring engine
    pub fn with_engine(engine: Arc<ScoringEngine>, config: ScoringConfig) -> Self {
        Self { engine, config }
    }

    /// The scoring engine used by this service
    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Validate, group and score a game snapshot.
    ///
    /// Fails with [`ApplicationError::ValidationFailed`] when the snapshot has
    /// blocking issues. A game without published questions or without actual
    /// results yields an empty report.
    #[instrument(skip_all, fields(game_id = %game.id))]
    pub fn report(&self, game: &GameSnapshot) -> ApplicationResult<GameScoreReport> {
        let validation = game.validate().into_result()?;
        for issue in &validation.warnings {
            warn!(path = %issue.path, "{}", issue.message);
        }

        let published = game.published();
        if published.is_empty() || game.actual_results.is_empty() {
            info!(
                published = published.len(),
                results = game.actual_results.len(),
                "Nothing to score yet"
            );
            return Ok(GameScoreReport::empty(game, published.len(), validation.warnings));
        }

        let participants = game.participants(
            self.config.exclude_game_creator,
            &self.config.unknown_email_placeholder,
        );
        let scores = self
            .engine
            .calculate_participant_scores(&participants, &game.actual_results, &published);
        let leaderboard = self.engine.rank(self.engine.leaderboard(&scores));

        info!(
            participants = scores.len(),
            ranked = leaderboard.len(),
            "Scored game"
        );

        Ok(GameScoreReport {
            game_id: game.id.clone(),
            status: game.status,
            published_question_count: published.len(),
            scores,
            leaderboard,
            warnings: validation.warnings,
        })
    }

    /// Leaderboard only, optionally cut to the first `limit` positions
    pub fn leaderboard(&self, game: &GameSnapshot, limit: Option<usize>) -> ApplicationResult<Vec<LeaderboardEntry>> {
        let mut leaderboard = self.report(game)?.leaderboard;
        if let Some(limit) = limit {
            if limit == 0 {
                return Err(ApplicationError::InvalidInput(
                    "leaderboard limit must be at least 1".to_string(),
                ));
            }
            leaderboard.truncate(limit);
        }
        Ok(leaderboard)
    }
}

impl Default for GameScoringService {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
