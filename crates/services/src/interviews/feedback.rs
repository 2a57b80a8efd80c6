use prep_core::model::{AnswerRecord, InterviewId};

/// Answers recorded for one interview with the overall score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackReport {
    pub interview_id: InterviewId,
    pub answers: Vec<AnswerRecord>,
    pub average_rating: Option<u8>,
}

impl FeedbackReport {
    /// Builds the report, ordering answers by row id.
    #[must_use]
    pub fn new(interview_id: InterviewId, mut answers: Vec<AnswerRecord>) -> Self {
        answers.sort_by_key(|answer| answer.id);
        let average_rating = average_rating(&answers);
        Self {
            interview_id,
            answers,
            average_rating,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Averages below 6 are shown as weak.
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.average_rating.is_some_and(|avg| avg < 6)
    }
}

/// Mean rating rounded half away from zero; `None` without answers.
#[must_use]
pub fn average_rating(answers: &[AnswerRecord]) -> Option<u8> {
    if answers.is_empty() {
        return None;
    }
    let total: u32 = answers.iter().map(|a| u32::from(a.rating.value())).sum();
    let count = u32::try_from(answers.len()).unwrap_or(u32::MAX);
    // Integer round-half-up of total / count.
    let rounded = (2 * total + count) / (2 * count);
    u8::try_from(rounded).ok()
}
