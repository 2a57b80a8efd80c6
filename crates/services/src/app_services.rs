use std::sync::Arc;

use prep_core::model::QuestionRecord;
use storage::repository::Storage;

use crate::Clock;
use crate::ai::{AiClient, TextGenerator};
use crate::dashboard::QuestionDashboard;
use crate::display::DisplayStrings;
use crate::error::AppServicesError;
use crate::interviews::{InterviewService, question_count_from_env};
use crate::preferences_service::PreferencesService;
use crate::solved_store::SolvedStore;

/// Assembles app-facing services around one storage backend and catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Vec<QuestionRecord>>,
    solved: Arc<SolvedStore>,
    preferences: Arc<PreferencesService>,
    interviews: Arc<InterviewService>,
    display: DisplayStrings,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the env-configured AI client.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        catalog: Vec<QuestionRecord>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let preferences = Arc::new(PreferencesService::new(Arc::clone(&storage.kv)));
        let generator: Arc<dyn TextGenerator> =
            Arc::new(AiClient::from_env().with_preferences(Arc::clone(&preferences)));

        let services = Self::from_storage(&storage, clock, catalog, generator)
            .with_question_count(question_count_from_env())
            .with_display(DisplayStrings::from_env());
        Ok(services)
    }

    /// Wire services over an existing storage and generator.
    #[must_use]
    pub fn from_storage(
        storage: &Storage,
        clock: Clock,
        catalog: Vec<QuestionRecord>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let preferences = Arc::new(PreferencesService::new(Arc::clone(&storage.kv)));
        let interviews = InterviewService::new(
            clock,
            generator,
            Arc::clone(&storage.interviews),
            Arc::clone(&storage.answers),
        )
        .with_preferences(Arc::clone(&preferences));

        Self {
            catalog: Arc::new(catalog),
            solved: Arc::new(SolvedStore::new(Arc::clone(&storage.kv))),
            preferences,
            interviews: Arc::new(interviews),
            display: DisplayStrings::default(),
        }
    }

    #[must_use]
    pub fn with_question_count(mut self, count: usize) -> Self {
        let service = (*self.interviews).clone().with_question_count(count);
        self.interviews = Arc::new(service);
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: DisplayStrings) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Vec<QuestionRecord>> {
        Arc::clone(&self.catalog)
    }

    /// Fresh dashboard state over the shared catalog.
    #[must_use]
    pub fn dashboard(&self) -> QuestionDashboard {
        QuestionDashboard::new(self.catalog())
    }

    #[must_use]
    pub fn solved(&self) -> Arc<SolvedStore> {
        Arc::clone(&self.solved)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }

    #[must_use]
    pub fn interviews(&self) -> Arc<InterviewService> {
        Arc::clone(&self.interviews)
    }

    #[must_use]
    pub fn display(&self) -> &DisplayStrings {
        &self.display
    }
}
