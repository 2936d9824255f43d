use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionDraft, QuestionError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,

    #[error("question id {0} appears more than once")]
    DuplicateQuestionId(QuestionId),

    #[error("question #{position} is invalid: {source}")]
    InvalidQuestion {
        position: usize,
        #[source]
        source: QuestionError,
    },
}

/// Ordered, immutable list of questions a quiz runs over.
///
/// Cloning is cheap; clones share the same questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and
    /// `BankError::DuplicateQuestionId` when two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(BankError::DuplicateQuestionId(question.id()));
            }
        }
        Ok(Self {
            questions: questions.into(),
        })
    }

    /// Validate drafts in order and build a bank from them.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidQuestion` with the 1-based position of the
    /// first bad draft, or any error from [`QuestionBank::new`].
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, BankError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(idx, draft)| {
                draft.validate().map_err(|source| BankError::InvalidQuestion {
                    position: idx + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    // A validated bank is never empty, but clippy wants the pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
