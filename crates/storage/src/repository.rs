use async_trait::async_trait;
use prep_core::model::{AnswerId, AnswerRecord, InterviewId, MockInterview, NewAnswer};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable string key/value storage.
///
/// Values are opaque strings; callers own their serialization format.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Repository contract for mock interviews.
#[async_trait]
pub trait InterviewRepository: Send + Sync {
    /// Persist a freshly generated interview.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the id already exists, or other storage errors.
    async fn insert_interview(&self, interview: &MockInterview) -> Result<(), StorageError>;

    /// Fetch an interview by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend or decoding failures.
    async fn get_interview(&self, id: InterviewId) -> Result<Option<MockInterview>, StorageError>;

    /// Most recently created interviews first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend or decoding failures.
    async fn list_interviews(&self, limit: u32) -> Result<Vec<MockInterview>, StorageError>;
}

/// Repository contract for recorded answers and their feedback.
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Append an answer and return its row id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the answer cannot be stored.
    async fn append_answer(&self, answer: &NewAnswer) -> Result<AnswerId, StorageError>;

    /// All answers for an interview, ordered by row id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend or decoding failures.
    async fn list_answers(&self, interview_id: InterviewId)
    -> Result<Vec<AnswerRecord>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    kv: Arc<Mutex<HashMap<String, String>>>,
    interviews: Arc<Mutex<Vec<MockInterview>>>,
    answers: Arc<Mutex<BTreeMap<AnswerId, AnswerRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self.kv.lock().map_err(poisoned)?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self.kv.lock().map_err(poisoned)?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[async_trait]
impl InterviewRepository for InMemoryRepository {
    async fn insert_interview(&self, interview: &MockInterview) -> Result<(), StorageError> {
        let mut guard = self.interviews.lock().map_err(poisoned)?;
        if guard.iter().any(|existing| existing.id() == interview.id()) {
            return Err(StorageError::Conflict);
        }
        guard.push(interview.clone());
        Ok(())
    }

    async fn get_interview(&self, id: InterviewId) -> Result<Option<MockInterview>, StorageError> {
        let guard = self.interviews.lock().map_err(poisoned)?;
        Ok(guard.iter().find(|interview| interview.id() == id).cloned())
    }

    async fn list_interviews(&self, limit: u32) -> Result<Vec<MockInterview>, StorageError> {
        let guard = self.interviews.lock().map_err(poisoned)?;
        let mut items = guard.clone();
        // Stable sort keeps insertion order for equal timestamps; newest insert wins.
        items.reverse();
        items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(items)
    }
}

#[async_trait]
impl AnswerRepository for InMemoryRepository {
    async fn append_answer(&self, answer: &NewAnswer) -> Result<AnswerId, StorageError> {
        let mut guard = self.answers.lock().map_err(poisoned)?;
        let next = guard.keys().next_back().map_or(1, |last| last.value() + 1);
        let id = AnswerId::new(next);
        guard.insert(id, AnswerRecord::from_new(id, answer.clone()));
        Ok(id)
    }

    async fn list_answers(
        &self,
        interview_id: InterviewId,
    ) -> Result<Vec<AnswerRecord>, StorageError> {
        let guard = self.answers.lock().map_err(poisoned)?;
        Ok(guard
            .values()
            .filter(|answer| answer.interview_id == interview_id)
            .cloned()
            .collect())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
    pub interviews: Arc<dyn InterviewRepository>,
    pub answers: Arc<dyn AnswerRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let kv: Arc<dyn KeyValueStore> = Arc::new(repo.clone());
        let interviews: Arc<dyn InterviewRepository> = Arc::new(repo.clone());
        let answers: Arc<dyn AnswerRepository> = Arc::new(repo);
        Self {
            kv,
            interviews,
            answers,
        }
    }
}
