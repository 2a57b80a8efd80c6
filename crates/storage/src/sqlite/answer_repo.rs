use async_trait::async_trait;
use prep_core::model::{AnswerId, AnswerRecord, InterviewId, NewAnswer};

use super::SqliteRepository;
use super::mapping::{answer_id_from_i64, conn, map_answer_row};
use crate::repository::{AnswerRepository, StorageError};

#[async_trait]
impl AnswerRepository for SqliteRepository {
    async fn append_answer(&self, answer: &NewAnswer) -> Result<AnswerId, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO user_answers (
                interview_id, question, user_answer, correct_answer, feedback, rating, created_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ",
        )
        .bind(answer.interview_id.to_string())
        .bind(&answer.question)
        .bind(&answer.user_answer)
        .bind(&answer.correct_answer)
        .bind(&answer.feedback)
        .bind(i64::from(answer.rating.value()))
        .bind(answer.created_at)
        .execute(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => StorageError::NotFound,
            _ => conn(err),
        })?;

        answer_id_from_i64(res.last_insert_rowid())
    }

    async fn list_answers(
        &self,
        interview_id: InterviewId,
    ) -> Result<Vec<AnswerRecord>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, interview_id, question, user_answer, correct_answer, feedback, rating, created_at
            FROM user_answers
            WHERE interview_id = ?1
            ORDER BY id ASC
            ",
        )
        .bind(interview_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        rows.iter().map(map_answer_row).collect()
    }
}
