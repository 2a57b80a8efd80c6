use std::sync::Arc;

use prep_core::model::{
    AnswerRecord, InterviewDraft, InterviewId, MockInterview, NewAnswer, Rating,
    validate_user_answer,
};
use storage::repository::{AnswerRepository, InterviewRepository};

use super::feedback::FeedbackReport;
use crate::Clock;
use crate::ai::{TextGenerator, feedback_prompt, interview_prompt, parse_feedback, parse_questions};
use crate::error::InterviewServiceError;
use crate::preferences_service::PreferencesService;

pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// Reads `PREP_QUESTION_COUNT`; unset, zero or unparsable values fall back to the default.
#[must_use]
pub fn question_count_from_env() -> usize {
    std::env::var("PREP_QUESTION_COUNT")
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|count| *count > 0)
        .unwrap_or(DEFAULT_QUESTION_COUNT)
}

/// Creates mock interviews and records graded answers.
#[derive(Clone)]
pub struct InterviewService {
    clock: Clock,
    generator: Arc<dyn TextGenerator>,
    interviews: Arc<dyn InterviewRepository>,
    answers: Arc<dyn AnswerRepository>,
    preferences: Option<Arc<PreferencesService>>,
    question_count: usize,
}

impl InterviewService {
    #[must_use]
    pub fn new(
        clock: Clock,
        generator: Arc<dyn TextGenerator>,
        interviews: Arc<dyn InterviewRepository>,
        answers: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            clock,
            generator,
            interviews,
            answers,
            preferences: None,
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }

    #[must_use]
    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count.max(1);
        self
    }

    /// Use the stored preferred language in prompts.
    #[must_use]
    pub fn with_preferences(mut self, preferences: Arc<PreferencesService>) -> Self {
        self.preferences = Some(preferences);
        self
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    async fn language(&self) -> Option<String> {
        match &self.preferences {
            Some(service) => service.load().await.language().map(ToString::to_string),
            None => None,
        }
    }

    /// Generate and persist a new interview.
    ///
    /// # Errors
    ///
    /// Returns `InterviewServiceError` for invalid job details, generation or
    /// parse failures, an empty question list, or storage failures.
    pub async fn create(&self, draft: InterviewDraft) -> Result<MockInterview, InterviewServiceError> {
        let details = draft.validate()?;
        let language = self.language().await;
        let prompt = interview_prompt(&details, self.question_count, language.as_deref());

        let reply = self.generator.generate(&prompt).await?;
        let mut questions = parse_questions(&reply)?;
        if questions.len() > self.question_count {
            log::debug!(
                "model returned {} questions, keeping {}",
                questions.len(),
                self.question_count
            );
            questions.truncate(self.question_count);
        }

        let interview =
            MockInterview::new(InterviewId::generate(), details, questions, self.clock.now())?;
        self.interviews.insert_interview(&interview).await?;
        log::info!(
            "created interview {} with {} questions",
            interview.id(),
            interview.questions().len()
        );
        Ok(interview)
    }

    /// Look up an interview.
    ///
    /// # Errors
    ///
    /// Returns `InterviewServiceError::Storage` on storage failures.
    pub async fn get(&self, id: InterviewId) -> Result<Option<MockInterview>, InterviewServiceError> {
        Ok(self.interviews.get_interview(id).await?)
    }

    /// Most recent interviews first.
    ///
    /// # Errors
    ///
    /// Returns `InterviewServiceError::Storage` on storage failures.
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<MockInterview>, InterviewServiceError> {
        Ok(self.interviews.list_interviews(limit).await?)
    }

    /// Grade and store the user's answer to question `index`.
    ///
    /// # Errors
    ///
    /// Returns `InterviewServiceError` if the answer is too short, the index is
    /// out of range, generation fails, or persistence fails.
    pub async fn submit_answer(
        &self,
        interview: &MockInterview,
        index: usize,
        user_answer: &str,
    ) -> Result<AnswerRecord, InterviewServiceError> {
        let user_answer = validate_user_answer(user_answer)?;
        let question = interview
            .question(index)
            .ok_or(InterviewServiceError::QuestionOutOfRange { index })?;

        let language = self.language().await;
        let prompt = feedback_prompt(&question.question, &user_answer, language.as_deref());
        let reply = parse_feedback(&self.generator.generate(&prompt).await?)?;

        let answer = NewAnswer {
            interview_id: interview.id(),
            question: question.question.clone(),
            user_answer,
            correct_answer: question.answer.clone(),
            feedback: reply.feedback,
            rating: Rating::clamped(reply.rating),
            created_at: self.clock.now(),
        };
        let id = self.answers.append_answer(&answer).await?;
        log::debug!("recorded answer {id} for interview {}", interview.id());
        Ok(AnswerRecord::from_new(id, answer))
    }

    /// All feedback for an interview with the rounded average rating.
    ///
    /// # Errors
    ///
    /// Returns `InterviewServiceError::Storage` on storage failures.
    pub async fn report(&self, id: InterviewId) -> Result<FeedbackReport, InterviewServiceError> {
        let answers = self.answers.list_answers(id).await?;
        Ok(FeedbackReport::new(id, answers))
    }
}
