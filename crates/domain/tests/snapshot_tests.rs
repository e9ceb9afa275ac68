//! Tests for game snapshots: wire format, status transitions, publishing and
//! bet grouping.

use babybet_domain::{
    default_questions, group_bets, ActualResults, Bet, GameSnapshot, GameStatus, IssueSeverity,
    Question, QuestionType, UserId,
};
use fake::{
    faker::{internet::en::FreeEmail, name::en::Name},
    Fake,
};
use proptest::prelude::*;

// ============================================================================
// Wire format
// ============================================================================

#[test]
fn test_snapshot_reads_client_json() {
    let json = r#"{
        "id": "g1",
        "name": "Shower",
        "status": "RESULTS_PUBLISHED",
        "createdBy": "owner",
        "actualResults": {"q1": "3200", "q2": "Boy"},
        "publishedQuestions": ["Weight"],
        "questions": [
            {"id": "q1", "text": "Weight", "type": "NUMBER", "isDefault": true, "order": 1},
            {"id": "q2", "text": "Sex", "type": "SELECT", "options": ["Boy", "Girl"]},
            {"id": "q3", "text": "Mood", "type": "SLIDER"}
        ],
        "bets": [
            {"userId": "anna", "userEmail": "anna@example.com", "question": "Weight", "answer": "3400"},
            {"userId": "ben", "question": "Weight", "answer": null}
        ]
    }"#;

    let game: GameSnapshot = serde_json::from_str(json).unwrap();

    assert_eq!(game.status, GameStatus::ResultsPublished);
    assert_eq!(game.actual_results.get(&"q1".into()), Some("3200"));
    assert_eq!(game.questions[2].question_type, QuestionType::Other("SLIDER".to_string()));
    assert_eq!(game.questions[1].order, 0);
    assert_eq!(game.published().len(), 1);

    let participants = game.participants(true, "Unknown");
    assert_eq!(participants[1].user_email, "Unknown");
    assert_eq!(participants[1].prediction_for("Weight"), None);
}

#[test]
fn test_snapshot_writes_camel_case() {
    let mut game = GameSnapshot::new("Shower", "owner");
    game.questions.push(Question::new("Weight", QuestionType::Number).with_id("q1"));
    game.actual_results.insert("q1", "3200");

    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["createdBy"], "owner");
    assert_eq!(value["status"], "ACTIVE");
    assert_eq!(value["questions"][0]["type"], "NUMBER");
    assert_eq!(value["actualResults"]["q1"], "3200");
}

#[test]
fn test_actual_results_from_raw_input() {
    let results = ActualResults::from_raw([("q1", " 3200 "), ("q2", ""), ("q3", "   ")]);
    assert_eq!(results.len(), 1);
    assert_eq!(results.get(&"q1".into()), Some("3200"));
}

// ============================================================================
// Status
// ============================================================================

#[test]
fn test_game_status_transitions() {
    assert!(GameStatus::Active.can_transition_to(GameStatus::ResultsPublished));
    assert!(!GameStatus::ResultsPublished.can_transition_to(GameStatus::Active));
    assert!(!GameStatus::Active.can_transition_to(GameStatus::Active));

    let mut game = GameSnapshot::new("Shower", "owner");
    game.publish_results().unwrap();
    assert_eq!(game.status, GameStatus::ResultsPublished);
    assert!(game.publish_results().is_err());
}

// ============================================================================
// Publishing and validation
// ============================================================================

#[test]
fn test_default_game_is_valid() {
    let mut game = GameSnapshot::new("Shower", "owner");
    game.questions = default_questions();
    let texts: Vec<String> = game.questions.iter().map(|q| q.text.clone()).collect();

    assert_eq!(game.publish_questions(texts.clone()), 10);
    assert!(game.is_fully_published());
    assert_eq!(game.unpublish_questions(&texts[..2]), 2);
    assert!(!game.is_fully_published());
    assert!(game.validate().valid);
}

#[test]
fn test_validation_flags_text_id_mismatch() {
    let mut game = GameSnapshot::new("Shower", "owner");
    game.questions.push(Question::new("Weight (g)", QuestionType::Number).with_id("q1"));
    game.actual_results.insert("q-old", "3200");
    game.bets.push(Bet {
        id: Default::default(),
        user_id: "anna".into(),
        user_email: None,
        user_name: None,
        question: "Weight".to_string(),
        answer: Some("3400".to_string()),
    });

    let report = game.validate();
    assert!(report.valid);
    assert_eq!(report.warnings.len(), 2);
    assert!(report.issues().all(|i| i.severity == IssueSeverity::Warning));
}

// ============================================================================
// Bet grouping
// ============================================================================

#[test]
fn test_group_bets_with_generated_guests() {
    let guests: Vec<(UserId, String, String)> = (0..4)
        .map(|_| (UserId::new(), FreeEmail().fake(), Name().fake()))
        .collect();

    let bets: Vec<Bet> = ["Weight", "Length"]
        .iter()
        .flat_map(|question| {
            guests.iter().map(move |(id, email, name)| Bet {
                id: Default::default(),
                user_id: id.clone(),
                user_email: Some(email.clone()),
                user_name: Some(name.clone()),
                question: question.to_string(),
                answer: Some("1".to_string()),
            })
        })
        .collect();

    let owner = &guests[0].0;
    let participants = group_bets(&bets, Some(owner), "Unknown");

    assert_eq!(participants.len(), 3);
    for (participant, guest) in participants.iter().zip(&guests[1..]) {
        assert_eq!(participant.user_id, guest.0);
        assert_eq!(participant.display_name(), guest.2);
        assert_eq!(participant.predictions.len(), 2);
    }
}

proptest! {
    #[test]
    fn prop_publish_is_idempotent(picks in prop::collection::vec(0usize..10, 0..20)) {
        let mut game = GameSnapshot::new("Shower", "owner");
        game.questions = default_questions();
        let texts: Vec<String> = picks.iter().map(|&i| game.questions[i].text.clone()).collect();

        game.publish_questions(texts.clone());
        let once = game.published_questions.clone();
        prop_assert_eq!(game.publish_questions(texts), 0);
        prop_assert_eq!(&game.published_questions, &once);

        let mut unique = once.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), once.len());
    }
}
