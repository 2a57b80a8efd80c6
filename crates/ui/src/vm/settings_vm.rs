use prep_core::model::{PreferencesDraft, PreferencesError, UserPreferences};
use services::PreferencesServiceError;

/// Editable preference fields. Blank fields mean "use the environment default".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreferencesForm {
    pub api_key: String,
    pub api_model: String,
    pub api_base_url: String,
    pub language: String,
}

impl PreferencesForm {
    #[must_use]
    pub fn from_preferences(preferences: &UserPreferences) -> Self {
        let field = |value: Option<&str>| value.unwrap_or_default().to_string();
        Self {
            api_key: field(preferences.api_key()),
            api_model: field(preferences.api_model()),
            api_base_url: field(preferences.api_base_url()),
            language: field(preferences.language()),
        }
    }

    #[must_use]
    pub fn to_draft(&self) -> PreferencesDraft {
        PreferencesDraft {
            api_key: Some(self.api_key.clone()),
            api_model: Some(self.api_model.clone()),
            api_base_url: Some(self.api_base_url.clone()),
            language: Some(self.language.clone()),
        }
    }
}

#[must_use]
pub fn save_error_message(err: &PreferencesServiceError) -> &'static str {
    match err {
        PreferencesServiceError::Preferences(PreferencesError::InvalidBaseUrl) => {
            "Base URL is not a valid URL."
        }
        _ => "Settings could not be saved. Please try again.",
    }
}
