use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::ids::QuestionId;

/// Per-question solved flags, as toggled by the user.
///
/// Serialized as a flat JSON object (`{"1": true, "15": false}`). Entries are
/// never removed, only flipped, so an explicit `false` survives a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolvedMap(HashMap<QuestionId, bool>);

impl SolvedMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_solved(&self, id: &QuestionId) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Returns the stored flag, or `None` when the id was never toggled.
    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<bool> {
        self.0.get(id).copied()
    }

    /// Merges a single flag, leaving every other entry untouched.
    pub fn set(&mut self, id: QuestionId, solved: bool) {
        self.0.insert(id, solved);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, bool)> {
        self.0.iter().map(|(id, solved)| (id, *solved))
    }
}

impl FromIterator<(QuestionId, bool)> for SolvedMap {
    fn from_iter<T: IntoIterator<Item = (QuestionId, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
