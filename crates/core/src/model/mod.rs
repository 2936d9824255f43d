mod bank;
mod ids;
mod question;

pub use bank::{BankError, QuestionBank};
pub use ids::{MAX_OPTION_ID_LEN, OptionId, OptionIdError, QuestionId};
pub use question::{
    AnswerOption, OPTIONS_PER_QUESTION, OptionDraft, Question, QuestionDraft, QuestionError,
};
