use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{OptionId, Question, QuestionBank};

use super::progress::{QuizProgress, progress_percent};
use super::result::QuizResult;
use super::status::{OptionStatus, option_status};

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizState {
    /// Current question is open for selection.
    Answering,
    /// Current question was submitted and scored.
    Locked,
    /// The last question has been advanced past.
    Complete,
}

/// Plain record of the mutable part of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub index: usize,
    pub selected_option_id: Option<OptionId>,
    pub locked: bool,
    pub score: usize,
    pub done: bool,
}

/// What to tell the user right after submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback<'a> {
    pub correct: bool,
    pub explain: Option<&'a str>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at a quiz.
///
/// The session is mutated only through [`select_option`](Self::select_option),
/// [`submit_answer`](Self::submit_answer), [`advance`](Self::advance) and
/// [`restart`](Self::restart). Calls whose preconditions do not hold leave the
/// session untouched and return `false`.
#[derive(Clone)]
pub struct QuizSession {
    bank: QuestionBank,
    index: usize,
    selected: Option<OptionId>,
    locked: bool,
    score: usize,
    done: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            index: 0,
            selected: None,
            locked: false,
            score: 0,
            done: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        if self.done {
            QuizState::Complete
        } else if self.locked {
            QuizState::Locked
        } else {
            QuizState::Answering
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn selected(&self) -> Option<&OptionId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The question at the current index. Once complete this stays on the
    /// last question.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        // index < len is kept by `advance`; banks are never empty.
        &self.bank.questions()[self.index]
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.total()
    }

    /// Select an option of the current question.
    ///
    /// Ignored unless answering, and ignored for ids the question does not have.
    pub fn select_option(&mut self, option_id: &OptionId) -> bool {
        if self.state() != QuizState::Answering {
            return false;
        }
        if !self.current_question().has_option(option_id) {
            return false;
        }
        self.selected = Some(option_id.clone());
        true
    }

    /// Lock in the selection and score it.
    ///
    /// Refused without a selection and for an already locked question, so a
    /// question is scored at most once.
    pub fn submit_answer(&mut self) -> bool {
        if self.state() != QuizState::Answering {
            return false;
        }
        let Some(selected) = self.selected.as_ref() else {
            return false;
        };
        let correct = self.current_question().is_correct(selected);
        self.locked = true;
        if correct {
            self.score += 1;
        }
        true
    }

    /// Move past a locked question, completing the quiz after the last one.
    pub fn advance(&mut self) -> bool {
        if self.state() != QuizState::Locked {
            return false;
        }
        if self.index + 1 < self.total() {
            self.index += 1;
            self.selected = None;
            self.locked = false;
        } else {
            self.done = true;
        }
        true
    }

    /// Start over on the same questions, in the same order.
    pub fn restart(&mut self) {
        self.index = 0;
        self.selected = None;
        self.locked = false;
        self.score = 0;
        self.done = false;
    }

    //
    // ─── DERIVED ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.index, self.total(), self.locked || self.done)
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: self.index + 1,
            total: self.total(),
            percent: self.progress_percent(),
        }
    }

    /// Final result; `None` until the quiz is complete.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.done.then(|| QuizResult::new(self.score, self.total()))
    }

    /// Correctness of the submitted answer; `None` while the question is open.
    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback<'_>> {
        if !self.locked {
            return None;
        }
        let question = self.current_question();
        let correct = self
            .selected
            .as_ref()
            .is_some_and(|selected| question.is_correct(selected));
        Some(AnswerFeedback {
            correct,
            explain: question.explain(),
        })
    }

    #[must_use]
    pub fn option_status(&self, option_id: &OptionId) -> OptionStatus {
        option_status(
            option_id,
            self.selected.as_ref(),
            self.current_question().correct_id(),
            self.locked,
        )
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            index: self.index,
            selected_option_id: self.selected.clone(),
            locked: self.locked,
            score: self.score,
            done: self.done,
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.bank.len())
            .field("index", &self.index)
            .field("selected", &self.selected)
            .field("locked", &self.locked)
            .field("score", &self.score)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
