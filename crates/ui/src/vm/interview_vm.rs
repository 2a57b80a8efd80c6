use chrono::{DateTime, Utc};
use prep_core::model::{AnswerError, InterviewDraft, InterviewError, MockInterview};
use services::{AiError, InterviewFlow, InterviewServiceError};

/// Raw form fields for a new interview.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterviewForm {
    pub job_position: String,
    pub job_description: String,
    pub years_experience: String,
}

impl InterviewForm {
    /// Parses the experience field. Blank counts as zero years.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the experience is not a whole number.
    pub fn to_draft(&self) -> Result<InterviewDraft, &'static str> {
        let raw = self.years_experience.trim();
        let years_experience = if raw.is_empty() {
            0
        } else {
            raw.parse::<u32>()
                .map_err(|_| "Years of experience must be a whole number.")?
        };
        Ok(InterviewDraft {
            job_position: self.job_position.clone(),
            job_description: self.job_description.clone(),
            years_experience,
        })
    }
}

fn ai_message(err: &AiError) -> &'static str {
    match err {
        AiError::Disabled => "Add an API key in Settings to use the AI interviewer.",
        AiError::Malformed(_) | AiError::EmptyResponse => {
            "The AI reply could not be read. Please try again."
        }
        _ => "The AI service could not be reached. Please try again.",
    }
}

#[must_use]
pub fn create_error_message(err: &InterviewServiceError) -> &'static str {
    match err {
        InterviewServiceError::Interview(InterviewError::EmptyJobPosition) => {
            "Job position is required."
        }
        InterviewServiceError::Interview(InterviewError::EmptyJobDescription) => {
            "Job description is required."
        }
        InterviewServiceError::Interview(InterviewError::InvalidExperience) => {
            "Years of experience is out of range."
        }
        InterviewServiceError::Interview(_) => "The AI returned no usable questions. Please try again.",
        InterviewServiceError::Ai(ai) => ai_message(ai),
        _ => "Something went wrong. Please try again.",
    }
}

#[must_use]
pub fn submit_error_message(err: &InterviewServiceError) -> &'static str {
    match err {
        InterviewServiceError::Answer(AnswerError::TooShort) => {
            "Your answer is too short. Write at least a couple of sentences."
        }
        InterviewServiceError::Ai(ai) => ai_message(ai),
        _ => "Your answer could not be saved. Please try again.",
    }
}

#[must_use]
pub fn format_created_at(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterviewSummaryVm {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub created_label: String,
}

#[must_use]
pub fn map_interview_summaries(interviews: &[MockInterview]) -> Vec<InterviewSummaryVm> {
    interviews
        .iter()
        .map(|interview| {
            let details = interview.details();
            InterviewSummaryVm {
                id: interview.id().to_string(),
                title: details.job_position().to_string(),
                subtitle: format!(
                    "{} years of experience, {} questions",
                    details.years_experience(),
                    interview.questions().len()
                ),
                created_label: format!("Created {}", format_created_at(interview.created_at())),
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionTabVm {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

#[must_use]
pub fn question_tabs(flow: &InterviewFlow) -> Vec<QuestionTabVm> {
    (0..flow.total())
        .map(|index| QuestionTabVm {
            index,
            label: format!("Question #{}", index + 1),
            active: index == flow.index(),
        })
        .collect()
}
