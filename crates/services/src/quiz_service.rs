use chrono::{DateTime, Utc};
use std::sync::Arc;

use quiz_core::model::OptionId;
use quiz_core::quiz::{QuizResult, QuizSession};

use crate::Clock;
use crate::question_repository::QuestionRepository;

/// A user action forwarded from the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizIntent {
    Choose(OptionId),
    Submit,
    Next,
    Restart,
    /// "View detailed explanations" on the result screen. Not wired to any
    /// behavior.
    ViewExplanations,
}

/// What an intent did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Preconditions did not hold; the session is unchanged.
    Ignored,
    Selected,
    Answered { correct: bool },
    Advanced,
    Completed(QuizResult),
    Restarted,
    NotImplemented,
}

impl QuizOutcome {
    #[must_use]
    pub fn changed_state(self) -> bool {
        !matches!(self, Self::Ignored | Self::NotImplemented)
    }
}

/// Starts quiz sessions and applies user intents to them.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, questions: Arc<dyn QuestionRepository>) -> Self {
        Self { clock, questions }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Start a fresh attempt over the repository's questions.
    #[must_use]
    pub fn start_quiz(&self) -> QuizSession {
        let session = QuizSession::new(self.questions.get_questions());
        tracing::info!(questions = session.total(), "quiz started");
        session
    }

    /// Apply one intent to the session.
    pub fn handle(&self, session: &mut QuizSession, intent: QuizIntent) -> QuizOutcome {
        let outcome = match &intent {
            QuizIntent::Choose(option_id) => {
                if session.select_option(option_id) {
                    QuizOutcome::Selected
                } else {
                    QuizOutcome::Ignored
                }
            }
            QuizIntent::Submit => {
                if session.submit_answer() {
                    let correct = session.feedback().is_some_and(|feedback| feedback.correct);
                    QuizOutcome::Answered { correct }
                } else {
                    QuizOutcome::Ignored
                }
            }
            QuizIntent::Next => {
                if !session.advance() {
                    QuizOutcome::Ignored
                } else if let Some(result) = session.result() {
                    tracing::info!(
                        score = result.score,
                        total = result.total,
                        percent = result.percent,
                        tier = result.tier().as_str(),
                        "quiz completed"
                    );
                    QuizOutcome::Completed(result)
                } else {
                    QuizOutcome::Advanced
                }
            }
            QuizIntent::Restart => {
                session.restart();
                tracing::info!(questions = session.total(), "quiz restarted");
                QuizOutcome::Restarted
            }
            QuizIntent::ViewExplanations => {
                tracing::warn!("detailed explanations are not implemented");
                QuizOutcome::NotImplemented
            }
        };

        if outcome.changed_state() {
            tracing::debug!(
                ?intent,
                ?outcome,
                index = session.index(),
                score = session.score(),
                "intent applied"
            );
        } else {
            tracing::debug!(
                ?intent,
                ?outcome,
                state = ?session.state(),
                "intent left session unchanged"
            );
        }
        outcome
    }
}

impl std::fmt::Debug for QuizService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizService")
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
