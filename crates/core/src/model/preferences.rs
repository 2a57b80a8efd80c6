use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// User preferences persisted in the key/value store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPreferences {
    api_key: Option<String>,
    api_model: Option<String>,
    api_base_url: Option<String>,
    language: Option<String>,
}

/// Unvalidated preferences, also the persisted JSON shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesDraft {
    pub api_key: Option<String>,
    pub api_model: Option<String>,
    pub api_base_url: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PreferencesError {
    #[error("invalid base URL")]
    InvalidBaseUrl,
}

impl PreferencesDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft into persisted preferences.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` if the base URL is present but invalid.
    pub fn validate(self) -> Result<UserPreferences, PreferencesError> {
        let api_key = normalize_optional(self.api_key);
        let api_model = normalize_optional(self.api_model);
        let api_base_url = normalize_optional(self.api_base_url);
        let language = normalize_optional(self.language);

        if let Some(url) = api_base_url.as_ref() {
            if Url::parse(url).is_err() {
                return Err(PreferencesError::InvalidBaseUrl);
            }
        }

        Ok(UserPreferences {
            api_key,
            api_model,
            api_base_url,
            language,
        })
    }
}

impl UserPreferences {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub fn api_model(&self) -> Option<&str> {
        self.api_model.as_deref()
    }

    #[must_use]
    pub fn api_base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Back to the persisted shape.
    #[must_use]
    pub fn to_draft(&self) -> PreferencesDraft {
        PreferencesDraft {
            api_key: self.api_key.clone(),
            api_model: self.api_model.clone(),
            api_base_url: self.api_base_url.clone(),
            language: self.language.clone(),
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
