use std::collections::{HashMap, HashSet};

use crate::model::QuestionRecord;

/// Number of catalog rows tagged with a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCount {
    pub name: String,
    pub count: usize,
}

/// Row counts per company, most frequent first; ties broken by name.
#[must_use]
pub fn company_counts(records: &[QuestionRecord]) -> Vec<CompanyCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.company()).or_default() += 1;
    }

    let mut out: Vec<CompanyCount> = counts
        .into_iter()
        .map(|(name, count)| CompanyCount {
            name: name.to_string(),
            count,
        })
        .collect();
    out.sort_by(|left, right| {
        right
            .count
            .cmp(&left.count)
            .then_with(|| left.name.cmp(&right.name))
    });
    out
}

/// Distinct topics in first-seen order.
#[must_use]
pub fn unique_topics(records: &[QuestionRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for topic in records.iter().flat_map(QuestionRecord::topics) {
        if seen.insert(topic.as_str()) {
            out.push(topic.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, QuestionId};

    fn record(id: &str, company: &str, topics: &str) -> QuestionRecord {
        QuestionRecord::new(
            QuestionId::new(id),
            "t",
            "",
            company,
            Difficulty::Easy,
            0.0,
            0.0,
            false,
            topics,
        )
    }

    #[test]
    fn companies_sorted_by_count_then_name() {
        let records = [
            record("1", "meta", ""),
            record("2", "amazon", ""),
            record("3", "meta", ""),
            record("4", "apple", ""),
        ];
        let counts = company_counts(&records);
        let names: Vec<_> = counts.iter().map(|c| (c.name.as_str(), c.count)).collect();
        assert_eq!(names, vec![("meta", 2), ("amazon", 1), ("apple", 1)]);
    }

    #[test]
    fn topics_are_deduplicated_in_first_seen_order() {
        let records = [
            record("1", "a", "Array, Hash Table"),
            record("2", "a", " Hash Table ,Graph,"),
        ];
        assert_eq!(unique_topics(&records), vec!["Array", "Hash Table", "Graph"]);
    }
}
