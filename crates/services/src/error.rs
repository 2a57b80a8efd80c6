//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::model::{AnswerError, InterviewError, PreferencesError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the AI text generator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AiError {
    #[error("AI generation is not configured")]
    Disabled,
    #[error("AI returned an empty response")]
    EmptyResponse,
    #[error("AI request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("AI response could not be parsed: {0}")]
    Malformed(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `InterviewService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InterviewServiceError {
    #[error(transparent)]
    Interview(#[from] InterviewError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error("question {index} does not exist in this interview")]
    QuestionOutOfRange { index: usize },
    #[error(transparent)]
    Ai(#[from] AiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `PreferencesService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PreferencesServiceError {
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
    #[error("preferences could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Rejected interview navigation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("already at the last question")]
    AtLastQuestion,
    #[error("the interview can only end from the last question")]
    NotAtLastQuestion,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
