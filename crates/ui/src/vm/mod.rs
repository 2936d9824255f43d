mod quiz_vm;
mod result_vm;

pub use quiz_vm::{FeedbackVm, OptionCellVm, QuizVm};
pub use result_vm::{ResultVm, map_result};
