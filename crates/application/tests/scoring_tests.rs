//! Tests for distance scoring, normalization and the leaderboard
//!
//! Scenarios run through the public engine API with testing-crate builders.

use babybet_application::scoring::{
    calculate_participant_scores, evaluate_question, get_leaderboard, ScoringEngine,
};
use babybet_domain::{ActualResults, Participant, ParticipantScore, Question};
use babybet_testing::builders::{ParticipantBuilder, QuestionBuilder};
use babybet_testing::fixtures::*;
use babybet_testing::strategies;
use proptest::prelude::*;

fn results(entries: &[(&str, &str)]) -> ActualResults {
    entries.iter().copied().collect()
}

fn weight() -> Question {
    QuestionBuilder::number("Weight").with_id("q-weight").build()
}

fn ids(scores: &[ParticipantScore]) -> Vec<&str> {
    scores.iter().map(|s| s.user_id.as_str()).collect()
}

#[test]
fn test_weight_normalized_by_max() {
    // Arrange
    let participants = vec![
        ParticipantBuilder::new("p1").predict("Weight", "3200").build(),
        ParticipantBuilder::new("p2").predict("Weight", "3400").build(),
    ];
    let actual = results(&[("q-weight", "3200")]);

    // Act
    let scores = calculate_participant_scores(&participants, &actual, &[weight()]);

    // Assert
    assert_eq!(scores[0].question_scores[0].raw_distance, 0.0);
    assert_eq!(scores[1].question_scores[0].raw_distance, 200.0);
    assert_eq!(scores[0].total_score, 0.0);
    assert_eq!(scores[1].total_score, 1.0);
    assert_eq!(ids(&get_leaderboard(&scores)), vec!["p1", "p2"]);
}

#[test]
fn test_date_scenario() {
    let question = QuestionBuilder::date("Birth Date").build();
    let distance = evaluate_question(&question, Some("2024-05-03"), "2024-05-01");
    assert_eq!(distance.value, 2.0);
    assert!(distance.is_numerical);
}

#[test]
fn test_time_scenario_has_no_wraparound() {
    let question = QuestionBuilder::time("Time of birth").build();
    let distance = evaluate_question(&question, Some("00:10"), "23:50");
    assert_eq!(distance.value, 1420.0);
    assert!(distance.is_numerical);
}

#[test]
fn test_select_never_contributes() {
    let sex = QuestionBuilder::select("Sex of the Baby", ["Boy", "Girl"])
        .with_id("q-sex")
        .build();
    let participants = vec![
        ParticipantBuilder::new("match").predict("Sex of the Baby", "boy").build(),
        ParticipantBuilder::new("miss").predict("Sex of the Baby", "Girl").build(),
    ];
    let actual = results(&[("q-sex", "Boy")]);

    let scores = calculate_participant_scores(&participants, &actual, &[sex]);

    assert_eq!(scores[0].question_scores[0].raw_distance, 0.0);
    assert_eq!(scores[1].question_scores[0].raw_distance, 1.0);
    for score in &scores {
        assert!(!score.question_scores[0].is_numerical);
        assert_eq!(score.total_score, 0.0);
    }
    // nothing numerical to rank on
    assert!(get_leaderboard(&scores).is_empty());
}

#[test]
fn test_color_scenario() {
    let question = QuestionBuilder::color("Hair color?").build();
    let distance = evaluate_question(&question, Some("#FFFFFF"), "#000000");
    assert!(distance.is_numerical);
    assert!((distance.value - 441.67).abs() < 0.01);
}

#[test]
fn test_missing_prediction_is_worst_score() {
    let participants = vec![
        ParticipantBuilder::new("near").predict("Weight", "3300").build(),
        ParticipantBuilder::new("silent").skip("Weight").build(),
        ParticipantBuilder::new("empty").predict("Weight", "").build(),
        ParticipantBuilder::new("far").predict("Weight", "3600").build(),
    ];
    let actual = results(&[("q-weight", "3200")]);

    let scores = calculate_participant_scores(&participants, &actual, &[weight()]);

    assert_eq!(scores[0].total_score, 0.25);
    assert_eq!(scores[1].total_score, 1.0);
    assert_eq!(scores[2].total_score, 1.0);
    assert_eq!(scores[2].question_scores[0].predicted, None);
    assert_eq!(scores[3].total_score, 1.0);
    assert_eq!(ids(&get_leaderboard(&scores)), vec!["near", "silent", "empty", "far"]);
}

#[test]
fn test_missing_prediction_loses_to_degenerate_tie() {
    // every answer is exact, so the question's maximum raw distance is 0
    let participants = vec![
        ParticipantBuilder::new("exact").predict("Weight", "3200").build(),
        ParticipantBuilder::new("silent").skip("Weight").build(),
    ];
    let actual = results(&[("q-weight", "3200")]);

    let scores = calculate_participant_scores(&participants, &actual, &[weight()]);

    assert_eq!(scores[0].total_score, 0.0);
    assert!(scores[1].question_scores[0].is_numerical);
    assert_eq!(scores[1].question_scores[0].score, 1.0);
    assert_eq!(scores[1].total_score, 1.0);
    assert_eq!(ids(&get_leaderboard(&scores)), vec!["exact", "silent"]);
}

#[test]
fn test_everyone_exact_ties_at_zero() {
    let participants = vec![
        ParticipantBuilder::new("a").predict("Weight", "3200").build(),
        ParticipantBuilder::new("b").predict("Weight", "3200,0").build(),
    ];
    let actual = results(&[("q-weight", "3200")]);

    let scores = calculate_participant_scores(&participants, &actual, &[weight()]);

    assert!(scores.iter().all(|s| s.total_score == 0.0));
    // perfect scores with a numerical question stay on the board
    assert_eq!(ids(&get_leaderboard(&scores)), vec!["a", "b"]);
}

#[test]
fn test_unparseable_answers_degrade() {
    let participants = vec![
        ParticipantBuilder::new("junk").predict("Weight", "heavy").build(),
        ParticipantBuilder::new("ok").predict("Weight", "3250").build(),
    ];
    let actual = results(&[("q-weight", "3200")]);

    let scores = calculate_participant_scores(&participants, &actual, &[weight()]);

    assert!(!scores[0].question_scores[0].is_numerical);
    assert_eq!(scores[0].total_score, 0.0);
    assert_eq!(scores[1].total_score, 1.0);
    assert_eq!(ids(&get_leaderboard(&scores)), vec!["ok"]);
}

#[test]
fn test_question_without_actual_result_is_omitted() {
    let length = QuestionBuilder::number("Length").with_id("q-length").build();
    let participant = ParticipantBuilder::new("a")
        .predict("Weight", "3300")
        .predict("Length", "50")
        .build();
    let actual = results(&[("q-weight", "3200")]);

    let scores = calculate_participant_scores(&[participant], &actual, &[weight(), length]);

    assert_eq!(scores[0].question_scores.len(), 1);
    assert_eq!(scores[0].question_scores[0].question, "Weight");
}

#[test]
fn test_unpublished_questions_never_contribute() {
    let length = QuestionBuilder::number("Length").with_id("q-length").build();
    let participants = vec![
        ParticipantBuilder::new("a").predict("Weight", "3200").predict("Length", "40").build(),
        ParticipantBuilder::new("b").predict("Weight", "3300").predict("Length", "50").build(),
    ];
    let actual = results(&[("q-weight", "3200"), ("q-length", "50")]);

    let published_only_weight = calculate_participant_scores(&participants, &actual, &[weight()]);
    let all = calculate_participant_scores(&participants, &actual, &[weight(), length]);

    assert_eq!(published_only_weight[0].total_score, 0.0);
    assert_eq!(all[0].total_score, 1.0);
}

#[test]
fn test_predictions_matched_by_text() {
    let renamed = QuestionBuilder::number("Weight (g)").with_id("q-weight").build();
    let participant = ParticipantBuilder::new("a").predict("Weight", "3300").build();
    let actual = results(&[("q-weight", "3200")]);

    let scores = calculate_participant_scores(&[participant], &actual, &[renamed]);

    assert_eq!(scores[0].question_scores[0].predicted, None);
    assert_eq!(scores[0].total_score, 1.0);
}

#[test]
fn test_leaderboard_is_stable_for_ties() {
    let participants: Vec<Participant> = ["first", "second", "third"]
        .iter()
        .zip(["3400", "3300", "3400"])
        .map(|(id, answer)| ParticipantBuilder::new(*id).predict("Weight", answer).build())
        .collect();
    let actual = results(&[("q-weight", "3200")]);

    let scores = calculate_participant_scores(&participants, &actual, &[weight()]);

    assert_eq!(ids(&get_leaderboard(&scores)), vec!["second", "first", "third"]);
}

#[test]
fn test_fixture_game_ranks_closest_guest_first() {
    let game = create_test_game(4);
    let participants = game.participants(true, "Unknown");

    let scores = calculate_participant_scores(&participants, &game.actual_results, &game.published());
    let board = get_leaderboard(&scores);

    assert_eq!(board.len(), 4);
    assert_eq!(board[0].user_id, participants[0].user_id);
    assert!(board.windows(2).all(|w| w[0].total_score <= w[1].total_score));
}

#[test]
fn test_scoring_is_deterministic() {
    let game = create_test_game(6);
    let participants = game.participants(true, "Unknown");
    let engine = ScoringEngine::new();

    let first = engine.calculate_participant_scores(&participants, &game.actual_results, &game.published());
    let second = engine.calculate_participant_scores(&participants, &game.actual_results, &game.published());

    assert_eq!(first, second);
    assert_eq!(engine.leaderboard(&first), engine.leaderboard(&second));
}

fn mixed_questions() -> Vec<Question> {
    vec![
        QuestionBuilder::number("Weight").with_id("q1").build(),
        QuestionBuilder::time("Time of birth").with_id("q2").build(),
        QuestionBuilder::color("Hair color?").with_id("q3").build(),
    ]
}

fn mixed_participants() -> impl Strategy<Value = Vec<Participant>> {
    strategies::participants(
        vec![
            ("Weight".to_string(), strategies::number_answer()),
            ("Time of birth".to_string(), strategies::time_answer()),
            ("Hair color?".to_string(), strategies::color_answer()),
        ],
        12,
    )
}

proptest! {
    #[test]
    fn prop_scores_are_non_negative(participants in mixed_participants()) {
        let actual = results(&[("q1", "3200"), ("q2", "08:15"), ("q3", "#6b4423")]);
        let scores = calculate_participant_scores(&participants, &actual, &mixed_questions());

        prop_assert_eq!(scores.len(), participants.len());
        for score in &scores {
            prop_assert!(score.total_score >= 0.0);
            for qs in &score.question_scores {
                prop_assert!(qs.raw_distance >= 0.0);
                prop_assert!((0.0..=1.0).contains(&qs.score));
            }
        }
    }

    #[test]
    fn prop_leaderboard_sorted_and_filtered(participants in mixed_participants()) {
        let actual = results(&[("q1", "3200"), ("q2", "08:15"), ("q3", "#6b4423")]);
        let scores = calculate_participant_scores(&participants, &actual, &mixed_questions());
        let board = get_leaderboard(&scores);

        prop_assert!(board.windows(2).all(|w| w[0].total_score <= w[1].total_score));
        for score in &scores {
            let kept = board.iter().any(|b| b.user_id == score.user_id);
            prop_assert_eq!(kept, score.total_score > 0.0 || score.has_numerical_signal());
        }
    }

    #[test]
    fn prop_exact_answers_score_zero(weight in 0u32..10_000, h in 0u32..24, m in 0u32..60) {
        let weight = weight.to_string();
        let time = format!("{:02}:{:02}", h, m);
        let actual = results(&[("q1", weight.as_str()), ("q2", time.as_str()), ("q3", "#6b4423")]);
        let exact = ParticipantBuilder::new("exact")
            .predict("Weight", weight.clone())
            .predict("Time of birth", time.clone())
            .predict("Hair color?", "#6B4423")
            .build();
        let other = ParticipantBuilder::new("other")
            .predict("Weight", "1")
            .predict("Time of birth", "00:00")
            .predict("Hair color?", "#ffffff")
            .build();

        let scores = calculate_participant_scores(&[exact, other], &actual, &mixed_questions());
        prop_assert_eq!(scores[0].total_score, 0.0);
    }
}
