//! Question definitions and the stock question catalogue.

use crate::identifiers::QuestionId;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Declared input type of a question.
///
/// The wire representation is the upper-case token stored with the question.
/// Tokens this enum does not know survive in [`QuestionType::Other`] and are
/// treated as free text by scoring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    /// Decimal number (grams, centimetres, counts)
    Number,
    /// Calendar date
    Date,
    /// Clock time `HH:MM`
    Time,
    /// One of a fixed list of options
    Select,
    /// Hex colour
    Colorpicker,
    /// Scrabble value of a word
    Scrabble,
    /// Free text
    Text,
    /// Any token not listed above
    Other(String),
}

impl QuestionType {
    /// Wire token for this type
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number => "NUMBER",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Select => "SELECT",
            Self::Colorpicker => "COLORPICKER",
            Self::Scrabble => "SCRABBLE",
            Self::Text => "TEXT",
            Self::Other(token) => token,
        }
    }

    /// Whether answers of this type are compared by a numeric distance.
    ///
    /// SELECT is compared by exact match and does not count.
    pub fn is_distance_scored(&self) -> bool {
        matches!(
            self,
            Self::Number | Self::Date | Self::Time | Self::Colorpicker
        )
    }
}

impl From<&str> for QuestionType {
    fn from(token: &str) -> Self {
        match token {
            "NUMBER" => Self::Number,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "SELECT" => Self::Select,
            "COLORPICKER" => Self::Colorpicker,
            "SCRABBLE" => Self::Scrabble,
            "TEXT" => Self::Text,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for QuestionType {
    fn from(token: String) -> Self {
        Self::from(token.as_str())
    }
}

impl From<QuestionType> for String {
    fn from(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::Other(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question of a game.
///
/// `id` keys the actual results, `text` keys participants' predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Key of the actual result
    pub id: QuestionId,

    /// Wording shown to guests; key of their predictions
    #[validate(length(min = 1, max = 500))]
    pub text: String,

    /// Declared input type
    #[serde(rename = "type")]
    pub question_type: QuestionType,

    /// Choices of a SELECT question
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Input hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Whether the question comes from the stock catalogue
    #[serde(default)]
    pub is_default: bool,

    /// Display position
    #[serde(default)]
    pub order: u32,
}

impl Question {
    /// Create a custom (non-default) question
    pub fn new(text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            id: QuestionId::new(),
            text: text.into(),
            question_type,
            options: None,
            placeholder: None,
            is_default: false,
            order: 0,
        }
    }

    /// Set the identifier
    pub fn with_id(mut self, id: impl Into<QuestionId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the choices
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Set the input hint
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the display position
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }
}

struct DefaultQuestion {
    text: &'static str,
    question_type: QuestionType,
    placeholder: Option<&'static str>,
    options: Option<&'static [&'static str]>,
}

fn catalogue() -> [DefaultQuestion; 10] {
    [
        DefaultQuestion {
            text: "Baby's Weight (in g)",
            question_type: QuestionType::Number,
            placeholder: Some("e.g., 3200"),
            options: None,
        },
        DefaultQuestion {
            text: "Baby's Length (in cm)",
            question_type: QuestionType::Number,
            placeholder: Some("e.g., 50"),
            options: None,
        },
        DefaultQuestion {
            text: "Birth Date",
            question_type: QuestionType::Date,
            placeholder: None,
            options: None,
        },
        DefaultQuestion {
            text: "Sex of the Baby",
            question_type: QuestionType::Select,
            placeholder: None,
            options: Some(&["Boy", "Girl", "Diverse"]),
        },
        DefaultQuestion {
            text: "How many diapers in the first week?",
            question_type: QuestionType::Number,
            placeholder: Some("e.g., 70"),
            options: None,
        },
        DefaultQuestion {
            text: "How many photos in the first 24h?",
            question_type: QuestionType::Number,
            placeholder: Some("e.g., 150"),
            options: None,
        },
        DefaultQuestion {
            text: "The Scrabble value of the first name?",
            question_type: QuestionType::Number,
            placeholder: Some("e.g., 25"),
            options: None,
        },
        DefaultQuestion {
            text: "How many names?",
            question_type: QuestionType::Number,
            placeholder: Some("e.g., 2"),
            options: None,
        },
        DefaultQuestion {
            text: "Hair color?",
            question_type: QuestionType::Colorpicker,
            placeholder: None,
            options: None,
        },
        DefaultQuestion {
            text: "Time of birth",
            question_type: QuestionType::Time,
            placeholder: None,
            options: None,
        },
    ]
}

/// The stock questions every new game starts with, ordered from 1.
pub fn default_questions() -> Vec<Question> {
    catalogue()
        .into_iter()
        .zip(1u32..)
        .map(|(q, order)| Question {
            id: QuestionId::new(),
            text: q.text.to_string(),
            question_type: q.question_type,
            options: q
                .options
                .map(|opts| opts.iter().map(|o| o.to_string()).collect()),
            placeholder: q.placeholder.map(str::to_string),
            is_default: true,
            order,
        })
        .collect()
}
