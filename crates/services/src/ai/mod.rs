mod client;
mod prompts;

pub use client::{AiClient, AiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, TextGenerator};
pub use prompts::{
    FeedbackReply, feedback_prompt, interview_prompt, parse_feedback, parse_questions,
    strip_code_fences,
};
