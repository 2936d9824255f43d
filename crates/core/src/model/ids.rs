use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Longest option label accepted (labels are short tags such as `A`..`D`).
pub const MAX_OPTION_ID_LEN: usize = 8;

/// Unique, stable identifier of a question within a bank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Option labels ─────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionIdError {
    #[error("option id cannot be empty")]
    Empty,

    #[error("option id {id:?} is longer than {max} characters")]
    TooLong { id: String, max: usize },
}

/// Short label identifying one answer option within a question (e.g. `"B"`).
///
/// Labels are trimmed on construction and compared exactly, so `"b"` and `"B"`
/// are different options.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionId(String);

impl OptionId {
    /// Creates a validated option label.
    ///
    /// # Errors
    ///
    /// Returns `OptionIdError::Empty` for blank input and
    /// `OptionIdError::TooLong` past `MAX_OPTION_ID_LEN` characters.
    pub fn new(raw: impl Into<String>) -> Result<Self, OptionIdError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OptionIdError::Empty);
        }
        if trimmed.chars().count() > MAX_OPTION_ID_LEN {
            return Err(OptionIdError::TooLong {
                id: trimmed.to_string(),
                max: MAX_OPTION_ID_LEN,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionId({:?})", self.0)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OptionId {
    type Error = OptionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OptionId> for String {
    fn from(value: OptionId) -> Self {
        value.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
