//! `proptest` strategies for scoring inputs.

use babybet_domain::{Participant, Prediction};
use proptest::prelude::*;

/// Answers to a NUMBER question: mostly numbers, sometimes junk or nothing
pub fn number_answer() -> BoxedStrategy<Option<String>> {
    prop_oneof![
        6 => (0u32..10_000).prop_map(|n| Some(n.to_string())),
        2 => (0u32..100, 0u32..10).prop_map(|(i, f)| Some(format!("{},{}", i, f))),
        1 => "[a-z ]{0,8}".prop_map(Some),
        1 => Just(None),
    ]
    .boxed()
}

/// Answers to a TIME question
pub fn time_answer() -> BoxedStrategy<Option<String>> {
    prop_oneof![
        4 => (0u32..24, 0u32..60).prop_map(|(h, m)| Some(format!("{:02}:{:02}", h, m))),
        1 => Just(Some("noon".to_string())),
        1 => Just(None),
    ]
    .boxed()
}

/// Answers to a COLORPICKER question
pub fn color_answer() -> BoxedStrategy<Option<String>> {
    prop_oneof![
        4 => any::<[u8; 3]>().prop_map(|[r, g, b]| Some(format!("#{:02x}{:02x}{:02x}", r, g, b))),
        1 => Just(Some("brown".to_string())),
        1 => Just(None),
    ]
    .boxed()
}

/// Participants `p0..pN` each answering the given questions with the paired strategy
pub fn participants(
    questions: Vec<(String, BoxedStrategy<Option<String>>)>,
    max: usize,
) -> impl Strategy<Value = Vec<Participant>> {
    let answers: Vec<_> = questions
        .iter()
        .map(|(_, strategy)| strategy.clone())
        .collect();
    let texts: Vec<String> = questions.into_iter().map(|(text, _)| text).collect();

    prop::collection::vec(answers, 0..=max).prop_map(move |rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let mut participant = Participant::new(format!("p{}", i), format!("p{}@example.com", i));
                participant.predictions = texts
                    .iter()
                    .zip(row)
                    .map(|(text, answer)| Prediction {
                        question: text.clone(),
                        answer,
                    })
                    .collect();
                participant
            })
            .collect()
    })
}
