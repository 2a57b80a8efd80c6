use prep_core::model::{
    AnswerId, AnswerRecord, InterviewDraft, InterviewId, InterviewQuestion, MockInterview, Rating,
};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

pub(crate) fn answer_id_from_i64(v: i64) -> Result<AnswerId, StorageError> {
    Ok(AnswerId::new(i64_to_u64("answer_id", v)?))
}

pub(crate) fn interview_id_from_str(raw: &str) -> Result<InterviewId, StorageError> {
    raw.parse::<InterviewId>().map_err(ser)
}

pub(crate) fn rating_from_i64(v: i64) -> Result<Rating, StorageError> {
    let value = u8::try_from(v).map_err(|_| ser(format!("invalid rating: {v}")))?;
    Rating::new(value).map_err(ser)
}

pub(crate) fn questions_to_json(questions: &[InterviewQuestion]) -> Result<String, StorageError> {
    serde_json::to_string(questions).map_err(ser)
}

pub(crate) fn map_interview_row(row: &SqliteRow) -> Result<MockInterview, StorageError> {
    let id = interview_id_from_str(row.try_get::<String, _>("id").map_err(ser)?.as_str())?;
    let years: i64 = row.try_get("years_experience").map_err(ser)?;
    let years_experience =
        u32::try_from(years).map_err(|_| ser(format!("invalid years_experience: {years}")))?;

    // Rows are re-validated on load.
    let details = InterviewDraft {
        job_position: row.try_get("job_position").map_err(ser)?,
        job_description: row.try_get("job_description").map_err(ser)?,
        years_experience,
    }
    .validate()
    .map_err(ser)?;

    let questions_json: String = row.try_get("questions_json").map_err(ser)?;
    let questions: Vec<InterviewQuestion> =
        serde_json::from_str(&questions_json).map_err(ser)?;

    MockInterview::new(
        id,
        details,
        questions,
        row.try_get("created_at").map_err(ser)?,
    )
    .map_err(ser)
}

pub(crate) fn map_answer_row(row: &SqliteRow) -> Result<AnswerRecord, StorageError> {
    Ok(AnswerRecord {
        id: answer_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?,
        interview_id: interview_id_from_str(
            row.try_get::<String, _>("interview_id").map_err(ser)?.as_str(),
        )?,
        question: row.try_get("question").map_err(ser)?,
        user_answer: row.try_get("user_answer").map_err(ser)?,
        correct_answer: row.try_get("correct_answer").map_err(ser)?,
        feedback: row.try_get("feedback").map_err(ser)?,
        rating: rating_from_i64(row.try_get::<i64, _>("rating").map_err(ser)?)?,
        created_at: row.try_get("created_at").map_err(ser)?,
    })
}
