#![forbid(unsafe_code)]

pub mod error;
pub mod question_repository;
pub mod quiz_service;
mod sample_bank;

pub use quiz_core::Clock;

pub use error::QuestionBankError;
pub use question_repository::{InMemoryQuestionRepository, QuestionRepository};
pub use quiz_service::{QuizIntent, QuizOutcome, QuizService};
