use quiz_core::model::OptionId;
use quiz_core::quiz::{OptionStatus, QuizSession, QuizState};
use services::{QuizIntent, QuizOutcome, QuizService};

use crate::vm::result_vm::{ResultVm, map_result};

/// Presentation data for one option button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionCellVm {
    pub id: OptionId,
    pub text: String,
    pub status: OptionStatus,
    pub disabled: bool,
}

impl OptionCellVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.status {
            OptionStatus::Neutral => "quiz-option",
            OptionStatus::SelectedPending => "quiz-option quiz-option--selected",
            OptionStatus::Correct => "quiz-option quiz-option--correct",
            OptionStatus::IncorrectSelected => "quiz-option quiz-option--wrong",
            OptionStatus::Dimmed => "quiz-option quiz-option--dimmed",
        }
    }

    #[must_use]
    pub fn badge_class(&self) -> &'static str {
        match self.status {
            OptionStatus::Neutral | OptionStatus::Dimmed => "quiz-option__badge",
            OptionStatus::SelectedPending => "quiz-option__badge quiz-option__badge--selected",
            OptionStatus::Correct => "quiz-option__badge quiz-option__badge--correct",
            OptionStatus::IncorrectSelected => "quiz-option__badge quiz-option__badge--wrong",
        }
    }
}

/// Feedback line shown under the options once an answer is locked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub text: String,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.correct {
            "quiz-feedback quiz-feedback--correct"
        } else {
            "quiz-feedback quiz-feedback--wrong"
        }
    }
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.session.state()
    }

    pub fn dispatch(&mut self, quiz: &QuizService, intent: QuizIntent) -> QuizOutcome {
        quiz.handle(&mut self.session, intent)
    }

    #[must_use]
    pub fn counter_label(&self) -> String {
        let progress = self.session.progress();
        format!("Question {}/{}", progress.position, progress.total)
    }

    #[must_use]
    pub fn heading_label(&self) -> String {
        format!("Question {}", self.session.index() + 1)
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.session.progress().percent
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.session.current_question().prompt()
    }

    #[must_use]
    pub fn option_cells(&self) -> Vec<OptionCellVm> {
        self.session
            .current_question()
            .options()
            .iter()
            .map(|option| {
                let status = self.session.option_status(option.id());
                OptionCellVm {
                    id: option.id().clone(),
                    text: option.text().to_string(),
                    status,
                    disabled: !status.is_selectable(),
                }
            })
            .collect()
    }

    /// Option whose label matches a typed key. An exact match wins; otherwise
    /// ASCII case is ignored.
    #[must_use]
    pub fn option_for_key(&self, key: &str) -> Option<OptionId> {
        let options = self.session.current_question().options();
        options
            .iter()
            .find(|option| option.id().as_str() == key)
            .or_else(|| {
                options
                    .iter()
                    .find(|option| option.id().as_str().eq_ignore_ascii_case(key))
            })
            .map(|option| option.id().clone())
    }

    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        self.session.feedback().map(|feedback| {
            let verdict = if feedback.correct {
                "Correct!"
            } else {
                "Not quite."
            };
            let text = match feedback.explain {
                Some(explain) => format!("{verdict} {explain}"),
                None => verdict.to_string(),
            };
            FeedbackVm {
                correct: feedback.correct,
                text,
            }
        })
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state() == QuizState::Answering && self.session.selected().is_some()
    }

    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.session.is_last_question() {
            "See results"
        } else {
            "Next question"
        }
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Current score: {} / {}", self.session.score(), self.session.total())
    }

    #[must_use]
    pub fn result(&self) -> Option<ResultVm> {
        self.session.result().map(|result| map_result(&result))
    }
}
