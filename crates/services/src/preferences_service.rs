use std::sync::Arc;

use prep_core::model::{PreferencesDraft, UserPreferences};
use storage::repository::KeyValueStore;

use crate::error::PreferencesServiceError;

/// Key under which preferences are stored as JSON.
pub const PREFERENCES_KEY: &str = "interview-preferences";

#[derive(Clone)]
pub struct PreferencesService {
    kv: Arc<dyn KeyValueStore>,
}

impl PreferencesService {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load persisted preferences, falling back to defaults.
    ///
    /// Missing, malformed or unreadable values are logged and yield defaults.
    pub async fn load(&self) -> UserPreferences {
        let raw = match self.kv.get(PREFERENCES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return UserPreferences::default(),
            Err(err) => {
                log::warn!("failed to read preferences: {err}");
                return UserPreferences::default();
            }
        };

        let draft = match serde_json::from_str::<PreferencesDraft>(&raw) {
            Ok(draft) => draft,
            Err(err) => {
                log::warn!("ignoring malformed preferences: {err}");
                return UserPreferences::default();
            }
        };

        draft.validate().unwrap_or_else(|err| {
            log::warn!("ignoring invalid stored preferences: {err}");
            UserPreferences::default()
        })
    }

    /// Validate and persist new preferences.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesServiceError` if validation or persistence fails.
    pub async fn save(
        &self,
        draft: PreferencesDraft,
    ) -> Result<UserPreferences, PreferencesServiceError> {
        let preferences = draft.validate()?;
        let encoded = serde_json::to_string(&preferences.to_draft())?;
        self.kv.set(PREFERENCES_KEY, &encoded).await?;
        log::debug!("saved preferences");
        Ok(preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    fn service() -> (PreferencesService, Arc<InMemoryRepository>) {
        let repo = Arc::new(InMemoryRepository::new());
        let kv: Arc<dyn KeyValueStore> = repo.clone();
        (PreferencesService::new(kv), repo)
    }

    #[tokio::test]
    async fn missing_preferences_load_as_defaults() {
        let (service, _) = service();
        assert_eq!(service.load().await, UserPreferences::default());
    }

    #[tokio::test]
    async fn save_normalizes_and_round_trips() {
        let (service, _) = service();
        let saved = service
            .save(PreferencesDraft {
                api_key: Some("  sk-test ".into()),
                api_model: Some("   ".into()),
                api_base_url: None,
                language: Some("English".into()),
            })
            .await
            .unwrap();
        assert_eq!(saved.api_key(), Some("sk-test"));
        assert_eq!(saved.api_model(), None);

        assert_eq!(service.load().await, saved);
    }

    #[tokio::test]
    async fn invalid_base_url_is_rejected_and_not_stored() {
        let (service, repo) = service();
        let err = service
            .save(PreferencesDraft {
                api_base_url: Some("not a url".into()),
                ..PreferencesDraft::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PreferencesServiceError::Preferences(_)));
        assert_eq!(repo.get(PREFERENCES_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_json_loads_as_defaults() {
        let (service, repo) = service();
        repo.set(PREFERENCES_KEY, "{not json").await.unwrap();
        assert_eq!(service.load().await, UserPreferences::default());
    }
}
