mod answer;
mod ids;
mod interview;
mod preferences;
mod question;
mod solved;

pub use ids::{AnswerId, InterviewId, ParseIdError, QuestionId};

pub use answer::{
    AnswerError, AnswerRecord, MIN_ANSWER_CHARS, NewAnswer, Rating, validate_user_answer,
};
pub use interview::{
    InterviewDraft, InterviewError, InterviewQuestion, JobDetails, MAX_EXPERIENCE_YEARS,
    MockInterview,
};
pub use preferences::{PreferencesDraft, PreferencesError, UserPreferences};
pub use question::{Difficulty, LEETCODE_BASE_URL, QuestionError, QuestionRecord, QuestionRow};
pub use solved::SolvedMap;
