use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::QuestionId;

/// Base URL that question slugs are appended to.
pub const LEETCODE_BASE_URL: &str = "https://leetcode.com";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question title cannot be empty")]
    EmptyTitle,

    #[error("unknown difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("invalid percentage for {field}: {raw}")]
    InvalidPercentage { field: &'static str, raw: String },

    #[error("invalid premium flag: {0}")]
    InvalidPremiumFlag(String),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Easy" | "easy" | "EASY" => Ok(Difficulty::Easy),
            "Medium" | "medium" | "MEDIUM" => Ok(Difficulty::Medium),
            "Hard" | "hard" | "HARD" => Ok(Difficulty::Hard),
            other => Err(QuestionError::InvalidDifficulty(other.to_string())),
        }
    }
}

//
// ─── DATASET ROW ───────────────────────────────────────────────────────────────
//

/// Raw dataset row, one per (question, company) pair.
///
/// Column names follow the published company-wise question dumps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "company")]
    pub company: String,
    #[serde(rename = "Difficulty")]
    pub difficulty: String,
    #[serde(rename = "Acceptance %")]
    pub acceptance: String,
    #[serde(rename = "Frequency %")]
    pub frequency: String,
    #[serde(rename = "Is Premium")]
    pub is_premium: String,
    #[serde(rename = "Topics", default)]
    pub topics: String,
}

impl QuestionRow {
    /// Validate the row into an immutable `QuestionRecord`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the id/title are blank, the difficulty is
    /// unknown, a percentage is not numeric or the premium flag is not `Y`/`N`.
    pub fn validate(self) -> Result<QuestionRecord, QuestionError> {
        if self.id.trim().is_empty() {
            return Err(QuestionError::EmptyId);
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(QuestionError::EmptyTitle);
        }

        Ok(QuestionRecord {
            id: QuestionId::new(self.id),
            title: title.to_string(),
            url: self.url.trim().to_string(),
            company: self.company.trim().to_string(),
            difficulty: self.difficulty.parse()?,
            acceptance: parse_percentage("acceptance", &self.acceptance)?,
            frequency: parse_percentage("frequency", &self.frequency)?,
            is_premium: parse_premium_flag(&self.is_premium)?,
            topics: split_topics(&self.topics),
        })
    }
}

//
// ─── RECORD ────────────────────────────────────────────────────────────────────
//

/// Immutable catalog question, tagged with the company that asks it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionRecord {
    id: QuestionId,
    title: String,
    url: String,
    company: String,
    difficulty: Difficulty,
    acceptance: f64,
    frequency: f64,
    is_premium: bool,
    topics: Vec<String>,
}

impl QuestionRecord {
    /// Builds a record directly, mostly useful for fixtures.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: QuestionId,
        title: impl Into<String>,
        url: impl Into<String>,
        company: impl Into<String>,
        difficulty: Difficulty,
        acceptance: f64,
        frequency: f64,
        is_premium: bool,
        topics: &str,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            company: company.into(),
            difficulty,
            acceptance,
            frequency,
            is_premium,
            topics: split_topics(topics),
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Path suffix relative to [`LEETCODE_BASE_URL`].
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn problem_url(&self) -> String {
        if self.url.starts_with("http://") || self.url.starts_with("https://") {
            return self.url.clone();
        }
        format!("{LEETCODE_BASE_URL}{}", self.url)
    }

    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn acceptance(&self) -> f64 {
        self.acceptance
    }

    #[must_use]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    /// Trimmed, non-empty topics in dataset order.
    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    #[must_use]
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }
}

fn split_topics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_percentage(field: &'static str, raw: &str) -> Result<f64, QuestionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    number
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| QuestionError::InvalidPercentage {
            field,
            raw: raw.to_string(),
        })
}

fn parse_premium_flag(raw: &str) -> Result<bool, QuestionError> {
    match raw.trim() {
        "Y" | "y" | "true" => Ok(true),
        "N" | "n" | "false" | "" => Ok(false),
        other => Err(QuestionError::InvalidPremiumFlag(other.to_string())),
    }
}
