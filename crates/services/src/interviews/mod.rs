mod feedback;
mod flow;
mod service;

pub use feedback::{FeedbackReport, average_rating};
pub use flow::InterviewFlow;
pub use service::{DEFAULT_QUESTION_COUNT, InterviewService, question_count_from_env};
