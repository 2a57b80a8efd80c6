use async_trait::async_trait;
use prep_core::model::{InterviewId, MockInterview};

use super::SqliteRepository;
use super::mapping::{conn, map_interview_row, questions_to_json};
use crate::repository::{InterviewRepository, StorageError};

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl InterviewRepository for SqliteRepository {
    async fn insert_interview(&self, interview: &MockInterview) -> Result<(), StorageError> {
        let details = interview.details();
        sqlx::query(
            r"
            INSERT INTO mock_interviews (
                id, job_position, job_description, years_experience, questions_json, created_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ",
        )
        .bind(interview.id().to_string())
        .bind(details.job_position())
        .bind(details.job_description())
        .bind(i64::from(details.years_experience()))
        .bind(questions_to_json(interview.questions())?)
        .bind(interview.created_at())
        .execute(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                StorageError::Conflict
            } else {
                conn(err)
            }
        })?;
        Ok(())
    }

    async fn get_interview(&self, id: InterviewId) -> Result<Option<MockInterview>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, job_position, job_description, years_experience, questions_json, created_at
            FROM mock_interviews
            WHERE id = ?1
            ",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?;

        row.as_ref().map(map_interview_row).transpose()
    }

    async fn list_interviews(&self, limit: u32) -> Result<Vec<MockInterview>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, job_position, job_description, years_experience, questions_json, created_at
            FROM mock_interviews
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?1
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        rows.iter().map(map_interview_row).collect()
    }
}
