//! Scoring Engine - Normalization and ranking across all participants
//!
//! Raw distances have no common scale (grams, days, minutes, RGB units), so
//! each question is normalized by the largest distance any participant
//! produced for it. Totals are sums of these normalized scores; lower is better.

use crate::scoring::evaluators::{
    ColorDistance, DateDistance, DistanceEvaluator, NumberDistance, SelectDistance, TimeDistance,
};
use babybet_domain::{
    ActualResults, Participant, ParticipantScore, Question, QuestionDistance, QuestionScore,
    QuestionType,
};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

static DEFAULT_ENGINE: Lazy<ScoringEngine> = Lazy::new(ScoringEngine::new);

/// A leaderboard row with its display position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position; ties get consecutive positions in input order
    pub rank: usize,
    #[serde(flatten)]
    pub entry: ParticipantScore,
}

/// The main scoring engine
pub struct ScoringEngine {
    evaluators: HashMap<QuestionType, Arc<dyn DistanceEvaluator>>,
}

impl ScoringEngine {
    /// Create a new scoring engine with default evaluators
    pub fn new() -> Self {
        let mut engine = Self {
            evaluators: HashMap::new(),
        };
        engine.register_default_evaluators();
        engine
    }

    fn register_default_evaluators(&mut self) {
        self.register_evaluator(QuestionType::Number, Arc::new(NumberDistance));
        self.register_evaluator(QuestionType::Date, Arc::new(DateDistance));
        self.register_evaluator(QuestionType::Time, Arc::new(TimeDistance));
        self.register_evaluator(QuestionType::Select, Arc::new(SelectDistance));
        self.register_evaluator(QuestionType::Colorpicker, Arc::new(ColorDistance));
    }

    /// Register an evaluator for a question type, replacing any existing one
    pub fn register_evaluator(&mut self, question_type: QuestionType, evaluator: Arc<dyn DistanceEvaluator>) {
        self.evaluators.insert(question_type, evaluator);
    }

    /// Get the evaluator for a question type
    pub fn get_evaluator(&self, question_type: &QuestionType) -> Option<Arc<dyn DistanceEvaluator>> {
        self.evaluators.get(question_type).cloned()
    }

    /// Distance of one prediction.
    ///
    /// A missing or empty prediction and a type without evaluator give no signal.
    pub fn evaluate(&self, question: &Question, predicted: Option<&str>, actual: &str) -> QuestionDistance {
        let predicted = predicted.filter(|p| !p.is_empty());
        match (predicted, self.evaluators.get(&question.question_type)) {
            (Some(predicted), Some(evaluator)) => evaluator.evaluate(predicted, actual),
            _ => QuestionDistance::none(),
        }
    }

    /// Whether a missing prediction for this question counts as the worst score
    fn penalizes_missing(&self, question: &Question) -> bool {
        self.evaluators
            .get(&question.question_type)
            .is_some_and(|e| e.is_numerical())
    }

    /// Score every participant on the published questions.
    ///
    /// Predictions are matched by question text, actual results by question id.
    /// Questions without an actual result are left out of the breakdown. Output
    /// order follows `participants`.
    #[instrument(
        skip_all,
        fields(participants = participants.len(), questions = published_questions.len())
    )]
    pub fn calculate_participant_scores(
        &self,
        participants: &[Participant],
        actual_results: &ActualResults,
        published_questions: &[Question],
    ) -> Vec<ParticipantScore> {
        let mut scores: Vec<ParticipantScore> = participants
            .iter()
            .map(|participant| self.raw_scores(participant, actual_results, published_questions))
            .collect();

        let maxima = max_raw_by_question(&scores, published_questions);

        for score in &mut scores {
            let mut total = 0.0;
            for qs in &mut score.question_scores {
                let max_raw = maxima.get(qs.question.as_str()).copied().unwrap_or(0.0);
                qs.score = normalize(qs, max_raw);
                total += qs.score;
            }
            score.total_score = total;
        }

        info!(participants = scores.len(), "Calculated participant scores");
        scores
    }

    fn raw_scores(
        &self,
        participant: &Participant,
        actual_results: &ActualResults,
        published_questions: &[Question],
    ) -> ParticipantScore {
        let question_scores = published_questions
            .iter()
            .filter_map(|question| {
                let actual = actual_results.get(&question.id)?;
                let predicted = participant.prediction_for(&question.text);
                let distance = self.evaluate(question, predicted, actual);
                let is_numerical = match predicted {
                    Some(_) => distance.is_numerical,
                    None => self.penalizes_missing(question),
                };

                Some(QuestionScore {
                    question: question.text.clone(),
                    predicted: predicted.map(str::to_string),
                    actual: actual.to_string(),
                    raw_distance: distance.value,
                    score: distance.value,
                    is_numerical,
                })
            })
            .collect();

        ParticipantScore {
            user_id: participant.user_id.clone(),
            user_email: participant.user_email.clone(),
            user_name: participant.user_name.clone(),
            total_score: 0.0,
            question_scores,
        }
    }

    /// Public leaderboard: participants with any numerical signal, best first.
    ///
    /// The sort is stable, so ties keep their input order.
    #[instrument(skip_all, fields(scores = scores.len()))]
    pub fn leaderboard(&self, scores: &[ParticipantScore]) -> Vec<ParticipantScore> {
        let mut board: Vec<ParticipantScore> = scores
            .iter()
            .filter(|s| s.total_score > 0.0 || s.has_numerical_signal())
            .cloned()
            .collect();
        board.sort_by(|a, b| a.total_score.total_cmp(&b.total_score));

        debug!(kept = board.len(), dropped = scores.len() - board.len(), "Built leaderboard");
        board
    }

    /// Attach 1-based positions to an ordered leaderboard
    pub fn rank(&self, leaderboard: Vec<ParticipantScore>) -> Vec<LeaderboardEntry> {
        leaderboard
            .into_iter()
            .enumerate()
            .map(|(i, entry)| LeaderboardEntry { rank: i + 1, entry })
            .collect()
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest raw distance per published question text, never below 0.
///
/// Participants without a score for a question count as 0.
fn max_raw_by_question<'q>(
    scores: &[ParticipantScore],
    published_questions: &'q [Question],
) -> IndexMap<&'q str, f64> {
    let mut maxima = IndexMap::with_capacity(published_questions.len());
    for question in published_questions {
        let text = question.text.as_str();
        if maxima.contains_key(text) {
            continue;
        }

        let max_raw = scores
            .iter()
            .map(|s| {
                s.question_scores
                    .iter()
                    .find(|qs| qs.question == text)
                    .map_or(0.0, |qs| qs.raw_distance)
            })
            .fold(0.0_f64, f64::max);

        debug!(question = text, max_raw, "Question maximum");
        maxima.insert(text, max_raw);
    }
    maxima
}

fn normalize(qs: &QuestionScore, max_raw: f64) -> f64 {
    if !qs.is_numerical {
        0.0
    } else if qs.predicted.is_none() {
        1.0
    } else if max_raw > 0.0 {
        qs.raw_distance / max_raw
    } else {
        0.0
    }
}

/// Score participants with the default evaluators
pub fn calculate_participant_scores(
    participants: &[Participant],
    actual_results: &ActualResults,
    published_questions: &[Question],
) -> Vec<ParticipantScore> {
    DEFAULT_ENGINE.calculate_participant_scores(participants, actual_results, published_questions)
}

/// Leaderboard of already calculated scores
pub fn get_leaderboard(scores: &[ParticipantScore]) -> Vec<ParticipantScore> {
    DEFAULT_ENGINE.leaderboard(scores)
}

/// Builder for ScoringEngine
pub struct ScoringEngineBuilder {
    evaluators: Vec<(QuestionType, Option<Arc<dyn DistanceEvaluator>>)>,
}

impl ScoringEngineBuilder {
    pub fn new() -> Self {
        Self {
            evaluators: Vec::new(),
        }
    }

    /// Use `evaluator` for `question_type`
    pub fn evaluator(mut self, question_type: QuestionType, evaluator: Arc<dyn DistanceEvaluator>) -> Self {
        self.evaluators.push((question_type, Some(evaluator)));
        self
    }

    /// Stop scoring `question_type`
    pub fn without(mut self, question_type: QuestionType) -> Self {
        self.evaluators.push((question_type, None));
        self
    }

    pub fn build(self) -> ScoringEngine {
        let mut engine = ScoringEngine::new();
        for (question_type, evaluator) in self.evaluators {
            match evaluator {
                Some(evaluator) => engine.register_evaluator(question_type, evaluator),
                None => {
                    engine.evaluators.remove(&question_type);
                }
            }
        }
        engine
    }
}

impl Default for ScoringEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
