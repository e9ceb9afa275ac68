//! Fluent builder pattern for constructing test data.
//!
//! This module provides builder structs for questions, participants and
//! whole game snapshots with a fluent API for customization.

use babybet_domain::{
    Bet, BetId, GameId, GameSnapshot, GameStatus, Participant, Prediction, Question, QuestionId,
    QuestionType, UserId,
};

/// Builder for creating Question test instances
#[derive(Clone)]
pub struct QuestionBuilder {
    question: Question,
}

impl QuestionBuilder {
    pub fn new(text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            question: Question::new(text, question_type),
        }
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::new(text, QuestionType::Number)
    }

    pub fn date(text: impl Into<String>) -> Self {
        Self::new(text, QuestionType::Date)
    }

    pub fn time(text: impl Into<String>) -> Self {
        Self::new(text, QuestionType::Time)
    }

    pub fn color(text: impl Into<String>) -> Self {
        Self::new(text, QuestionType::Colorpicker)
    }

    pub fn select<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(text, QuestionType::Select).with_options(options)
    }

    pub fn with_id(mut self, id: impl Into<QuestionId>) -> Self {
        self.question.id = id.into();
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.question = self.question.with_options(options);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.question.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.question.order = order;
        self
    }

    pub fn stock(mut self) -> Self {
        self.question.is_default = true;
        self
    }

    pub fn build(self) -> Question {
        self.question
    }
}

/// Builder for creating Participant test instances
#[derive(Clone)]
pub struct ParticipantBuilder {
    user_id: UserId,
    email: String,
    name: Option<String>,
    predictions: Vec<Prediction>,
}

impl ParticipantBuilder {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        let user_id = user_id.into();
        Self {
            email: format!("{}@example.com", user_id),
            user_id,
            name: None,
            predictions: Vec::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn predict(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.predictions.push(Prediction::new(question, answer));
        self
    }

    pub fn skip(mut self, question: impl Into<String>) -> Self {
        self.predictions.push(Prediction::unanswered(question));
        self
    }

    pub fn build(self) -> Participant {
        Participant {
            user_id: self.user_id,
            user_email: self.email,
            user_name: self.name,
            predictions: self.predictions,
        }
    }
}

/// Builder for creating GameSnapshot test instances
#[derive(Clone)]
pub struct GameSnapshotBuilder {
    game: GameSnapshot,
    publish: Vec<String>,
    publish_all: bool,
}

impl GameSnapshotBuilder {
    pub fn new() -> Self {
        Self {
            game: GameSnapshot::new("Test Baby Shower", "owner"),
            publish: Vec::new(),
            publish_all: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<GameId>) -> Self {
        self.game.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.game.name = name.into();
        self
    }

    pub fn with_owner(mut self, owner: impl Into<UserId>) -> Self {
        self.game.created_by = owner.into();
        self
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.game.status = status;
        self
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.game.questions.push(question);
        self
    }

    pub fn with_questions(mut self, questions: impl IntoIterator<Item = Question>) -> Self {
        self.game.questions.extend(questions);
        self
    }

    pub fn with_default_questions(self) -> Self {
        self.with_questions(babybet_domain::default_questions())
    }

    pub fn with_bet(
        mut self,
        user: impl Into<UserId>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        let user_id = user.into();
        self.game.bets.push(Bet {
            id: BetId::new(),
            user_email: Some(format!("{}@example.com", user_id)),
            user_id,
            user_name: None,
            question: question.into(),
            answer: Some(answer.into()),
        });
        self
    }

    /// Store every prediction of `participant` as a bet row
    pub fn with_participant(mut self, participant: &Participant) -> Self {
        for prediction in &participant.predictions {
            self.game.bets.push(Bet {
                id: BetId::new(),
                user_id: participant.user_id.clone(),
                user_email: Some(participant.user_email.clone()),
                user_name: participant.user_name.clone(),
                question: prediction.question.clone(),
                answer: prediction.answer.clone(),
            });
        }
        self
    }

    pub fn with_actual_result(mut self, question_id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.game.actual_results.insert(question_id, value);
        self
    }

    pub fn publish(mut self, text: impl Into<String>) -> Self {
        self.publish.push(text.into());
        self
    }

    pub fn publish_all(mut self) -> Self {
        self.publish_all = true;
        self
    }

    pub fn build(mut self) -> GameSnapshot {
        if self.publish_all {
            let texts: Vec<String> = self.game.questions.iter().map(|q| q.text.clone()).collect();
            self.game.publish_questions(texts);
        }
        self.game.publish_questions(self.publish);
        self.game
    }
}

impl Default for GameSnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
