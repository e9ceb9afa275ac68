//! Participants, their predictions, and grouping of stored bets.

use crate::identifiers::{BetId, UserId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One participant's answer to one question, keyed by question text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Question text the answer was given for
    pub question: String,
    /// The submitted answer; `None` when nothing was submitted
    #[serde(default)]
    pub answer: Option<String>,
}

impl Prediction {
    /// Create a prediction with an answer
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: Some(answer.into()),
        }
    }

    /// Create a prediction without an answer
    pub fn unanswered(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: None,
        }
    }

    /// The answer, with an empty string counting as no answer
    pub fn submitted_answer(&self) -> Option<&str> {
        self.answer.as_deref().filter(|a| !a.is_empty())
    }
}

/// All predictions of one participant for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Who placed the bets
    pub user_id: UserId,
    /// Email from the bets, or the configured placeholder
    pub user_email: String,
    /// Display name, when one was stored with the bets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Answers in bet order
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

impl Participant {
    /// Create a participant without predictions
    pub fn new(user_id: impl Into<UserId>, user_email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_email: user_email.into(),
            user_name: None,
            predictions: Vec::new(),
        }
    }

    /// Answer submitted for the question with this text.
    ///
    /// The first prediction carrying the text wins; an empty answer is no answer.
    pub fn prediction_for(&self, question_text: &str) -> Option<&str> {
        self.predictions
            .iter()
            .find(|p| p.question == question_text)
            .and_then(Prediction::submitted_answer)
    }

    /// Name to show, falling back to the email
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(&self.user_email)
    }
}

/// A stored bet row: one user's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    /// Row key
    #[serde(default)]
    pub id: BetId,
    /// Who placed the bet
    pub user_id: UserId,
    /// Bettor's email, if stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    /// Bettor's display name, if stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Text of the question the bet answers
    pub question: String,
    /// Raw answer; `None` when left blank
    #[serde(default)]
    pub answer: Option<String>,
}

/// Group stored bets into participants.
///
/// Participants appear in the order their first bet was seen and keep their
/// bets in input order. Bets placed by `exclude_user` (the game owner) are
/// skipped. A missing email is replaced by `unknown_email`.
pub fn group_bets(
    bets: &[Bet],
    exclude_user: Option<&UserId>,
    unknown_email: &str,
) -> Vec<Participant> {
    let mut grouped: IndexMap<&UserId, Participant> = IndexMap::new();

    for bet in bets {
        if exclude_user == Some(&bet.user_id) {
            continue;
        }

        let participant = grouped.entry(&bet.user_id).or_insert_with(|| Participant {
            user_id: bet.user_id.clone(),
            user_email: bet
                .user_email
                .clone()
                .unwrap_or_else(|| unknown_email.to_string()),
            user_name: bet.user_name.clone(),
            predictions: Vec::new(),
        });

        participant.predictions.push(Prediction {
            question: bet.question.clone(),
            answer: bet.answer.clone(),
        });
    }

    grouped.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bet(user: &str, question: &str, answer: Option<&str>) -> Bet {
        Bet {
            id: BetId::new(),
            user_id: UserId::from(user),
            user_email: Some(format!("{user}@example.com")),
            user_name: None,
            question: question.to_string(),
            answer: answer.map(str::to_string),
        }
    }

    #[test]
    fn test_prediction_for_matches_text() {
        let mut participant = Participant::new("u1", "u1@example.com");
        participant.predictions = vec![
            Prediction::new("Weight", "3200"),
            Prediction::new("Weight", "9999"),
            Prediction::new("Length", ""),
            Prediction::unanswered("Birth Date"),
        ];

        assert_eq!(participant.prediction_for("Weight"), Some("3200"));
        assert_eq!(participant.prediction_for("Length"), None);
        assert_eq!(participant.prediction_for("Birth Date"), None);
        assert_eq!(participant.prediction_for("weight"), None);
    }

    #[test]
    fn test_group_bets_preserves_first_seen_order() {
        let bets = vec![
            bet("bob", "Weight", Some("3400")),
            bet("alice", "Weight", Some("3200")),
            bet("bob", "Length", Some("52")),
        ];

        let participants = group_bets(&bets, None, "Unknown");
        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0].user_id.as_str(), "bob");
        assert_eq!(participants[0].predictions.len(), 2);
        assert_eq!(participants[0].predictions[1].question, "Length");
        assert_eq!(participants[1].user_id.as_str(), "alice");
    }

    #[test]
    fn test_group_bets_skips_owner_and_fills_email() {
        let mut anonymous = bet("carol", "Weight", Some("3000"));
        anonymous.user_email = None;
        let bets = vec![bet("owner", "Weight", Some("3300")), anonymous];

        let owner = UserId::from("owner");
        let participants = group_bets(&bets, Some(&owner), "Unknown");
        assert_eq!(participants.len(), 1);
        assert_eq!(participants[0].user_email, "Unknown");
        assert_eq!(participants[0].display_name(), "Unknown");
    }

    #[test]
    fn test_participant_deserializes_store_shape() {
        let json = r#"{
            "userId": "u1",
            "userEmail": "anna@example.com",
            "userName": "Anna",
            "predictions": [{"question": "Weight", "answer": null}]
        }"#;
        let participant: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(participant.display_name(), "Anna");
        assert_eq!(participant.predictions[0].answer, None);
    }
}
