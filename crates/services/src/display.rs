use std::env;

pub const DEFAULT_INFORMATION: &str = "Answer each generated question in writing. When you \
end the interview you get a report with a rating and feedback for every answer.";

pub const DEFAULT_QUESTION_NOTE: &str = "Submit an answer to get feedback on it. The report at \
the end shows the reference answer next to yours.";

/// Banner texts shown on the interview screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStrings {
    pub information: String,
    pub question_note: String,
}

impl Default for DisplayStrings {
    fn default() -> Self {
        Self {
            information: DEFAULT_INFORMATION.to_string(),
            question_note: DEFAULT_QUESTION_NOTE.to_string(),
        }
    }
}

impl DisplayStrings {
    /// Reads `PREP_INFORMATION` and `PREP_QUESTION_NOTE`, falling back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("PREP_INFORMATION").ok(),
            env::var("PREP_QUESTION_NOTE").ok(),
        )
    }

    #[must_use]
    pub fn from_values(information: Option<String>, question_note: Option<String>) -> Self {
        let defaults = Self::default();
        let pick = |value: Option<String>, fallback: String| {
            value.filter(|v| !v.trim().is_empty()).unwrap_or(fallback)
        };
        Self {
            information: pick(information, defaults.information),
            question_note: pick(question_note, defaults.question_note),
        }
    }
}
