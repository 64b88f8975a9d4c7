mod board_vm;
mod labels;

pub use board_vm::{BoardVm, FeedbackVm, ModalVm, OptionState, OptionVm, RosterCellVm};
pub use labels::{
    feedback_text, progress_line, question_text, result_text, score_line, status_icon,
};
