//! Test fixtures with realistic data.
//!
//! Guests get generated names and emails; answers are fixed so that scores in
//! tests stay predictable.

use babybet_domain::{
    default_questions, ActualResults, GameSnapshot, Participant, Prediction, Question, QuestionType,
};
use fake::{
    faker::{internet::en::FreeEmail, name::en::Name},
    Fake,
};

use crate::builders::{GameSnapshotBuilder, ParticipantBuilder};

/// Create a test participant with a generated name and email and no predictions
pub fn create_test_participant() -> Participant {
    let id = babybet_domain::UserId::new();
    ParticipantBuilder::new(id)
        .with_email(FreeEmail().fake::<String>())
        .with_name(Name().fake::<String>())
        .build()
}

/// Create `count` participants with generated names
pub fn create_test_participants(count: usize) -> Vec<Participant> {
    (0..count).map(|_| create_test_participant()).collect()
}

/// Create a participant answering every given question with `answers`
pub fn create_test_participant_with(answers: &[(&str, &str)]) -> Participant {
    let mut participant = create_test_participant();
    participant.predictions = answers
        .iter()
        .map(|(question, answer)| Prediction::new(*question, *answer))
        .collect();
    participant
}

/// Actual results for the stock questions, keyed by their ids
pub fn create_test_actual_results(questions: &[Question]) -> ActualResults {
    questions
        .iter()
        .filter_map(|q| sample_answer(&q.question_type, 0).map(|a| (q.id.clone(), a)))
        .collect()
}

/// A plausible answer for a question type; `offset` moves numerical answers away
/// from the offset-0 answer.
pub fn sample_answer(question_type: &QuestionType, offset: u32) -> Option<String> {
    let answer = match question_type {
        QuestionType::Number => format!("{}", 3200 + offset * 100),
        QuestionType::Date => format!("2024-05-{:02}", 1 + offset % 28),
        QuestionType::Time => format!("{:02}:{:02}", (8 + offset) % 24, (offset * 7) % 60),
        QuestionType::Select => (if offset % 2 == 0 { "Boy" } else { "Girl" }).to_string(),
        QuestionType::Colorpicker => format!("#{:02x}{:02x}{:02x}", (offset * 40) % 256, 0x33, 0x22),
        QuestionType::Scrabble => format!("{}", 8 + offset),
        QuestionType::Text | QuestionType::Other(_) => return None,
    };
    Some(answer)
}

/// A full game: stock questions, all published, results set, and `guests`
/// participants whose answers drift further from the truth one by one.
pub fn create_test_game(guests: usize) -> GameSnapshot {
    let questions = default_questions();
    let actual = create_test_actual_results(&questions);

    let mut builder = GameSnapshotBuilder::new()
        .with_name(format!("{}'s Baby Shower", Name().fake::<String>()))
        .with_questions(questions.clone())
        .publish_all();

    for (id, value) in actual.iter() {
        builder = builder.with_actual_result(id.clone(), value);
    }

    for (i, guest) in create_test_participants(guests).into_iter().enumerate() {
        let offset = i as u32 + 1;
        let mut participant = guest;
        participant.predictions = questions
            .iter()
            .filter_map(|q| sample_answer(&q.question_type, offset).map(|a| Prediction::new(q.text.clone(), a)))
            .collect();
        builder = builder.with_participant(&participant);
    }

    builder.build()
}

/// A serialized test game, as a client would upload it
pub fn create_test_game_json(guests: usize) -> String {
    serde_json::to_string_pretty(&create_test_game(guests)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participants_are_distinct() {
        let guests = create_test_participants(5);
        let mut ids: Vec<_> = guests.iter().map(|g| g.user_id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert!(guests.iter().all(|g| g.user_name.is_some()));
    }

    #[test]
    fn test_game_is_consistent() {
        let game = create_test_game(3);
        let validation = game.validate();
        assert!(validation.valid, "{:?}", validation.errors);
        assert!(game.is_fully_published());
        assert_eq!(game.participants(true, "Unknown").len(), 3);
    }

    #[test]
    fn test_game_round_trips_as_json() {
        let json = create_test_game_json(2);
        let game: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(game.participants(true, "Unknown").len(), 2);
    }
}
