//! Testing utilities for Babybet
//!
//! This crate provides:
//! - Test fixtures with realistic guests (names and emails from `fake`)
//! - Builder patterns for questions, participants and game snapshots
//! - `proptest` strategies for answers and participant sets
//!
//! # Examples
//!
//! ```
//! use babybet_testing::{builders::*, fixtures::*};
//! use babybet_domain::QuestionType;
//!
//! let game = GameSnapshotBuilder::new()
//!     .with_question(QuestionBuilder::number("Weight").with_id("q1").build())
//!     .with_bet("anna", "Weight", "3400")
//!     .with_actual_result("q1", "3200")
//!     .publish_all()
//!     .build();
//!
//! assert_eq!(game.published().len(), 1);
//! assert_eq!(game.published()[0].question_type, QuestionType::Number);
//!
//! let guest = create_test_participant();
//! assert!(guest.user_email.contains('@'));
//! ```

pub mod builders;
pub mod fixtures;
pub mod strategies;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
