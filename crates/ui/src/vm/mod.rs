mod dashboard_vm;
mod feedback_vm;
mod interview_vm;
mod markdown_vm;
mod settings_vm;

pub use dashboard_vm::{
    DashboardVm, PagerVm, ProgressBarVm, QuestionRowVm, difficulty_class, map_dashboard,
};
pub use feedback_vm::{FeedbackItemVm, FeedbackVm, map_feedback};
pub use interview_vm::{
    InterviewForm, InterviewSummaryVm, QuestionTabVm, create_error_message, format_created_at,
    map_interview_summaries, question_tabs, submit_error_message,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use settings_vm::{PreferencesForm, save_error_message};
