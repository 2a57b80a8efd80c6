use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::{AnswerId, InterviewId};

/// Answers shorter than this (after trimming) are not sent for feedback.
pub const MIN_ANSWER_CHARS: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("answer must be at least {MIN_ANSWER_CHARS} characters")]
    TooShort,

    #[error("rating must be between 0 and 10")]
    InvalidRating,
}

/// Feedback score on a 0..=10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 10;

    /// # Errors
    ///
    /// Returns `AnswerError::InvalidRating` when `value > 10`.
    pub fn new(value: u8) -> Result<Self, AnswerError> {
        if value > Self::MAX {
            return Err(AnswerError::InvalidRating);
        }
        Ok(Self(value))
    }

    /// Rounds and clamps an arbitrary model-provided score into range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0);
        }
        let rounded = value.round().clamp(0.0, f64::from(Self::MAX));
        Self(rounded as u8)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

/// Validates a raw user answer.
///
/// # Errors
///
/// Returns `AnswerError::TooShort` if the trimmed answer is under
/// [`MIN_ANSWER_CHARS`] characters.
pub fn validate_user_answer(raw: &str) -> Result<String, AnswerError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_ANSWER_CHARS {
        return Err(AnswerError::TooShort);
    }
    Ok(trimmed.to_string())
}

/// Answer awaiting persistence (no row id yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub interview_id: InterviewId,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub feedback: String,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
}

/// A recorded answer with its generated feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub id: AnswerId,
    pub interview_id: InterviewId,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub feedback: String,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
}

impl AnswerRecord {
    #[must_use]
    pub fn from_new(id: AnswerId, answer: NewAnswer) -> Self {
        Self {
            id,
            interview_id: answer.interview_id,
            question: answer.question,
            user_answer: answer.user_answer,
            correct_answer: answer.correct_answer,
            feedback: answer.feedback,
            rating: answer.rating,
            created_at: answer.created_at,
        }
    }
}
