use std::collections::BTreeSet;

use crate::model::{Difficulty, QuestionRecord};

/// Premium tier selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PremiumFilter {
    #[default]
    All,
    Free,
    Premium,
}

impl PremiumFilter {
    #[must_use]
    pub fn matches(self, is_premium: bool) -> bool {
        match self {
            PremiumFilter::All => true,
            PremiumFilter::Free => !is_premium,
            PremiumFilter::Premium => is_premium,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PremiumFilter::All => "all",
            PremiumFilter::Free => "free",
            PremiumFilter::Premium => "premium",
        }
    }

    /// Parses a select-box value; anything unknown falls back to `All`.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "free" => PremiumFilter::Free,
            "premium" => PremiumFilter::Premium,
            _ => PremiumFilter::All,
        }
    }
}

/// Current filter selection for the question table.
///
/// `difficulty` and `company` are wildcards when `None`. Topics are
/// conjunctive: a record must carry every selected topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub difficulty: Option<Difficulty>,
    pub premium: PremiumFilter,
    pub company: Option<String>,
    pub topics: BTreeSet<String>,
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    #[must_use]
    pub fn with_premium(mut self, premium: PremiumFilter) -> Self {
        self.premium = premium;
        self
    }

    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topics.insert(topic.into());
        self
    }

    /// Lower-cased whitespace-separated search terms.
    #[must_use]
    pub fn search_terms(&self) -> Vec<String> {
        self.query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    fn matches_with_terms(&self, record: &QuestionRecord, terms: &[String]) -> bool {
        if let Some(difficulty) = self.difficulty {
            if record.difficulty() != difficulty {
                return false;
            }
        }
        if !self.premium.matches(record.is_premium()) {
            return false;
        }
        if let Some(company) = self.company.as_deref() {
            if record.company() != company {
                return false;
            }
        }
        if !self.topics.iter().all(|topic| record.has_topic(topic)) {
            return false;
        }
        terms.iter().all(|term| term_matches(record, term))
    }
}

fn term_matches(record: &QuestionRecord, term: &str) -> bool {
    record.title().to_lowercase().contains(term)
        || record.company().to_lowercase().contains(term)
        || record
            .topics()
            .iter()
            .any(|topic| topic.to_lowercase().contains(term))
}

/// Returns the records matching `criteria`, preserving catalog order.
#[must_use]
pub fn filter_questions<'a>(
    records: &'a [QuestionRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a QuestionRecord> {
    let terms = criteria.search_terms();
    records
        .iter()
        .filter(|record| criteria.matches_with_terms(record, &terms))
        .collect()
}
