use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::{OptionId, OptionIdError, QuestionId};

/// Every question offers exactly this many options.
pub const OPTIONS_PER_QUESTION: usize = 4;

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

/// Unvalidated option as it appears in question content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDraft {
    pub id: String,
    pub text: String,
}

impl OptionDraft {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Unvalidated question, the shape question content is written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub id: u64,
    pub prompt: String,
    pub options: Vec<OptionDraft>,
    pub correct_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explain: Option<String>,
}

impl QuestionDraft {
    /// Check the draft against the question invariants.
    ///
    /// # Errors
    ///
    /// Returns the first `QuestionError` found: blank prompt, wrong option
    /// count, invalid or duplicate option ids, blank option text, or a
    /// `correct_id` that names none of the options.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let id = QuestionId::new(self.id);

        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt { id });
        }

        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(QuestionError::WrongOptionCount {
                id,
                expected: OPTIONS_PER_QUESTION,
                found: self.options.len(),
            });
        }

        let mut seen = HashSet::with_capacity(self.options.len());
        let mut options = Vec::with_capacity(self.options.len());
        for draft in self.options {
            let option_id =
                OptionId::new(draft.id).map_err(|source| QuestionError::InvalidOptionId { id, source })?;
            if !seen.insert(option_id.clone()) {
                return Err(QuestionError::DuplicateOptionId {
                    id,
                    option: option_id,
                });
            }
            let text = draft.text.trim();
            if text.is_empty() {
                return Err(QuestionError::EmptyOptionText {
                    id,
                    option: option_id,
                });
            }
            options.push(AnswerOption {
                id: option_id,
                text: text.to_string(),
            });
        }

        let correct_id = OptionId::new(self.correct_id)
            .map_err(|source| QuestionError::InvalidOptionId { id, source })?;
        if !seen.contains(&correct_id) {
            return Err(QuestionError::UnknownCorrectId {
                id,
                correct: correct_id,
            });
        }

        let explain = self
            .explain
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        Ok(Question {
            id,
            prompt: prompt.to_string(),
            options,
            correct_id,
            explain,
        })
    }
}

//
// ─── VALIDATED TYPES ───────────────────────────────────────────────────────────
//

/// One selectable choice of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    id: OptionId,
    text: String,
}

impl AnswerOption {
    #[must_use]
    pub fn id(&self) -> &OptionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A validated multiple-choice question with a single correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<AnswerOption>,
    correct_id: OptionId,
    explain: Option<String>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn correct_id(&self) -> &OptionId {
        &self.correct_id
    }

    #[must_use]
    pub fn explain(&self) -> Option<&str> {
        self.explain.as_deref()
    }

    #[must_use]
    pub fn option(&self, option_id: &OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id == *option_id)
    }

    #[must_use]
    pub fn has_option(&self, option_id: &OptionId) -> bool {
        self.option(option_id).is_some()
    }

    #[must_use]
    pub fn is_correct(&self, option_id: &OptionId) -> bool {
        self.correct_id == *option_id
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id}: prompt cannot be empty")]
    EmptyPrompt { id: QuestionId },

    #[error("question {id}: expected {expected} options, found {found}")]
    WrongOptionCount {
        id: QuestionId,
        expected: usize,
        found: usize,
    },

    #[error("question {id}: invalid option id: {source}")]
    InvalidOptionId {
        id: QuestionId,
        #[source]
        source: OptionIdError,
    },

    #[error("question {id}: option {option} appears more than once")]
    DuplicateOptionId { id: QuestionId, option: OptionId },

    #[error("question {id}: option {option} has no text")]
    EmptyOptionText { id: QuestionId, option: OptionId },

    #[error("question {id}: correct id {correct} is not one of the options")]
    UnknownCorrectId { id: QuestionId, correct: OptionId },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
