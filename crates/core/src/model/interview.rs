use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::InterviewId;

/// Upper bound accepted for years of experience.
pub const MAX_EXPERIENCE_YEARS: u32 = 50;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InterviewError {
    #[error("job position cannot be empty")]
    EmptyJobPosition,

    #[error("job description cannot be empty")]
    EmptyJobDescription,

    #[error("years of experience must be at most {MAX_EXPERIENCE_YEARS}")]
    InvalidExperience,

    #[error("interview must contain at least one question")]
    NoQuestions,

    #[error("question text cannot be empty")]
    EmptyQuestion,
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// One generated interview question and its reference answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl InterviewQuestion {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// User-entered job details, before any questions exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewDraft {
    pub job_position: String,
    pub job_description: String,
    pub years_experience: u32,
}

/// Normalized job details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetails {
    job_position: String,
    job_description: String,
    years_experience: u32,
}

impl InterviewDraft {
    /// Validate and normalize the job details.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError` when a text field is blank or experience is out of range.
    pub fn validate(self) -> Result<JobDetails, InterviewError> {
        let job_position = self.job_position.trim().to_string();
        if job_position.is_empty() {
            return Err(InterviewError::EmptyJobPosition);
        }
        let job_description = self.job_description.trim().to_string();
        if job_description.is_empty() {
            return Err(InterviewError::EmptyJobDescription);
        }
        if self.years_experience > MAX_EXPERIENCE_YEARS {
            return Err(InterviewError::InvalidExperience);
        }
        Ok(JobDetails {
            job_position,
            job_description,
            years_experience: self.years_experience,
        })
    }
}

impl JobDetails {
    #[must_use]
    pub fn job_position(&self) -> &str {
        &self.job_position
    }

    #[must_use]
    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    #[must_use]
    pub fn years_experience(&self) -> u32 {
        self.years_experience
    }
}

//
// ─── INTERVIEW ─────────────────────────────────────────────────────────────────
//

/// A mock interview: job details plus a fixed, ordered question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockInterview {
    id: InterviewId,
    details: JobDetails,
    questions: Vec<InterviewQuestion>,
    created_at: DateTime<Utc>,
}

impl MockInterview {
    /// Create an interview from validated details and generated questions.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::NoQuestions` for an empty list and
    /// `InterviewError::EmptyQuestion` if any question text is blank.
    pub fn new(
        id: InterviewId,
        details: JobDetails,
        questions: Vec<InterviewQuestion>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, InterviewError> {
        if questions.is_empty() {
            return Err(InterviewError::NoQuestions);
        }
        if questions.iter().any(|q| q.question.trim().is_empty()) {
            return Err(InterviewError::EmptyQuestion);
        }
        Ok(Self {
            id,
            details,
            questions,
            created_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> InterviewId {
        self.id
    }

    #[must_use]
    pub fn details(&self) -> &JobDetails {
        &self.details
    }

    #[must_use]
    pub fn questions(&self) -> &[InterviewQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&InterviewQuestion> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
