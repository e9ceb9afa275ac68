//! Babybet Domain Types
//!
//! Plain data model of a baby-shower prediction game: questions, participants
//! and their predictions, the owner's actual results, and the derived score
//! records the scoring engine produces.
//!
//! ## Architecture
//!
//! - **identifiers**: String-backed identifiers for users, games, questions and bets
//! - **question**: Question types and the stock question catalogue
//! - **prediction**: Predictions, participants and grouping of stored bets
//! - **game**: Game snapshot, publishing, actual results, consistency checks
//! - **score**: Distance and score records
//! - **errors**: Error types
//! - **validation**: Validation report types
//!
//! ## Usage
//!
//! ```rust
//! use babybet_domain::{GameSnapshot, Question, QuestionType};
//!
//! let mut game = GameSnapshot::new("Baby Shower", "owner-1");
//! game.questions.push(Question::new("Baby's Weight (in g)", QuestionType::Number));
//! game.publish_questions(["Baby's Weight (in g)"]);
//! assert_eq!(game.published().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod game;
pub mod identifiers;
pub mod prediction;
pub mod question;
pub mod score;
pub mod validation;

pub use errors::{AppError, AppResult, ErrorResponse, GameError, ValidationError};
pub use game::{ActualResults, GameSnapshot, GameStatus};
pub use identifiers::*;
pub use prediction::{group_bets, Bet, Participant, Prediction};
pub use question::{default_questions, Question, QuestionType};
pub use score::{ParticipantScore, QuestionDistance, QuestionScore};
pub use validation::{IssueSeverity, ValidationIssue, ValidationResult};
