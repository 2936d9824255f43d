use std::path::Path;

use quiz_core::model::{QuestionBank, QuestionDraft};

use crate::error::QuestionBankError;
use crate::sample_bank::sample_drafts;

/// Read-only source of quiz questions.
///
/// Content is validated when a repository is built, so reading never fails.
pub trait QuestionRepository: Send + Sync {
    fn get_questions(&self) -> QuestionBank;
}

/// Repository over a bank held in memory for the life of the process.
#[derive(Debug, Clone)]
pub struct InMemoryQuestionRepository {
    bank: QuestionBank,
}

impl InMemoryQuestionRepository {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }

    /// The built-in three-question bank.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Invalid` if the built-in content breaks a
    /// question invariant.
    pub fn sample() -> Result<Self, QuestionBankError> {
        Ok(Self::new(QuestionBank::from_drafts(sample_drafts())?))
    }

    /// Parse a JSON array of question drafts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Parse` for malformed JSON and
    /// `QuestionBankError::Invalid` for content that fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, QuestionBankError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
        Ok(Self::new(QuestionBank::from_drafts(drafts)?))
    }

    /// Load and validate a JSON question bank from disk.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Io` if the file cannot be read, otherwise
    /// the errors of [`from_json_str`](Self::from_json_str).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QuestionBankError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| QuestionBankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let repo = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            questions = repo.bank.len(),
            "loaded question bank"
        );
        Ok(repo)
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    fn get_questions(&self) -> QuestionBank {
        self.bank.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::BankError;

    const TWO_QUESTIONS: &str = r#"[
        {
            "id": 10,
            "prompt": "2 + 2 = ?",
            "options": [
                {"id": "A", "text": "3"},
                {"id": "B", "text": "4"},
                {"id": "C", "text": "5"},
                {"id": "D", "text": "22"}
            ],
            "correctId": "B",
            "explain": "Basic addition."
        },
        {
            "id": 11,
            "prompt": "Capital of France?",
            "options": [
                {"id": "A", "text": "Paris"},
                {"id": "B", "text": "Rome"},
                {"id": "C", "text": "Berlin"},
                {"id": "D", "text": "Madrid"}
            ],
            "correctId": "A"
        }
    ]"#;

    #[test]
    fn sample_bank_is_valid_and_ordered() {
        let repo = InMemoryQuestionRepository::sample().unwrap();
        let bank = repo.get_questions();
        let ids: Vec<u64> = bank.questions().iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert!(bank.questions().iter().all(|q| q.explain().is_some()));
    }

    #[test]
    fn json_bank_parses_in_order() {
        let repo = InMemoryQuestionRepository::from_json_str(TWO_QUESTIONS).unwrap();
        let bank = repo.get_questions();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.questions()[0].correct_id().as_str(), "B");
        assert_eq!(bank.questions()[1].explain(), None);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = InMemoryQuestionRepository::from_json_str("[{").unwrap_err();
        assert!(matches!(err, QuestionBankError::Parse(_)));
    }

    #[test]
    fn invalid_content_is_rejected_at_load() {
        let json = TWO_QUESTIONS.replace("\"correctId\": \"A\"", "\"correctId\": \"E\"");
        let err = InMemoryQuestionRepository::from_json_str(&json).unwrap_err();
        assert!(matches!(
            err,
            QuestionBankError::Invalid(BankError::InvalidQuestion { position: 2, .. })
        ));
    }

    #[test]
    fn empty_json_array_is_rejected() {
        let err = InMemoryQuestionRepository::from_json_str("[]").unwrap_err();
        assert!(matches!(err, QuestionBankError::Invalid(BankError::Empty)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("quiz-bank-does-not-exist.json");
        let err = InMemoryQuestionRepository::from_path(&path).unwrap_err();
        assert!(matches!(err, QuestionBankError::Io { .. }));
    }

    #[test]
    fn bank_loads_from_file() {
        let path = std::env::temp_dir().join(format!("quiz-bank-{}.json", std::process::id()));
        std::fs::write(&path, TWO_QUESTIONS).unwrap();
        let loaded = InMemoryQuestionRepository::from_path(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap().get_questions().len(), 2);
    }
}
