//! Quiz progression: the session state machine and the values derived from it.

mod progress;
mod result;
mod session;
mod status;

pub use progress::{QuizProgress, progress_percent, round_percent};
pub use result::{HIGH_TIER_MIN_PERCENT, MID_TIER_MIN_PERCENT, QuizResult, ResultTier};
pub use session::{AnswerFeedback, QuizSession, QuizState, SessionSnapshot};
pub use status::{OptionStatus, option_status};
