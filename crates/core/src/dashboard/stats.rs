use std::collections::HashSet;

use crate::model::{Difficulty, QuestionId, QuestionRecord, SolvedMap};

/// Solved/total counts for one bucket of questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub solved: usize,
    pub total: usize,
}

impl Progress {
    /// Solved fraction in `[0, 1]`. An empty bucket is `0.0`, never NaN.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total as f64
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }
}

/// Progress over the filtered view, overall and per difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub overall: Progress,
    pub easy: Progress,
    pub medium: Progress,
    pub hard: Progress,
}

impl ProgressStats {
    #[must_use]
    pub fn for_difficulty(&self, difficulty: Difficulty) -> Progress {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

#[derive(Default)]
struct Bucket<'a> {
    all: HashSet<&'a QuestionId>,
    solved: HashSet<&'a QuestionId>,
}

impl Bucket<'_> {
    fn progress(&self) -> Progress {
        Progress {
            solved: self.solved.len(),
            total: self.all.len(),
        }
    }
}

/// Counts distinct question ids in `filtered`, overall and per difficulty.
///
/// A question listed under several companies is counted once.
#[must_use]
pub fn compute_stats(filtered: &[&QuestionRecord], solved: &SolvedMap) -> ProgressStats {
    let mut overall = Bucket::default();
    let mut easy = Bucket::default();
    let mut medium = Bucket::default();
    let mut hard = Bucket::default();

    for record in filtered {
        let id = record.id();
        let bucket = match record.difficulty() {
            Difficulty::Easy => &mut easy,
            Difficulty::Medium => &mut medium,
            Difficulty::Hard => &mut hard,
        };
        overall.all.insert(id);
        bucket.all.insert(id);
        if solved.is_solved(id) {
            overall.solved.insert(id);
            bucket.solved.insert(id);
        }
    }

    ProgressStats {
        overall: overall.progress(),
        easy: easy.progress(),
        medium: medium.progress(),
        hard: hard.progress(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, company: &str, difficulty: Difficulty) -> QuestionRecord {
        QuestionRecord::new(
            QuestionId::new(id),
            format!("Question {id}"),
            "",
            company,
            difficulty,
            0.0,
            0.0,
            false,
            "",
        )
    }

    #[test]
    fn duplicated_ids_count_once() {
        let records = [
            record("1", "google", Difficulty::Easy),
            record("1", "amazon", Difficulty::Easy),
            record("2", "google", Difficulty::Hard),
        ];
        let filtered: Vec<_> = records.iter().collect();
        let solved: SolvedMap = [(QuestionId::new("1"), true)].into_iter().collect();

        let stats = compute_stats(&filtered, &solved);
        assert_eq!(stats.overall, Progress { solved: 1, total: 2 });
        assert_eq!(stats.easy, Progress { solved: 1, total: 1 });
        assert_eq!(stats.hard, Progress { solved: 0, total: 1 });
        assert_eq!(stats.medium, Progress::default());
    }

    #[test]
    fn empty_bucket_ratio_is_zero() {
        let stats = compute_stats(&[], &SolvedMap::new());
        assert_eq!(stats.medium.ratio(), 0.0);
        assert!(!stats.overall.percent().is_nan());
    }

    #[test]
    fn solved_never_exceeds_total() {
        let records = [
            record("1", "a", Difficulty::Easy),
            record("2", "a", Difficulty::Medium),
            record("3", "a", Difficulty::Medium),
        ];
        let filtered: Vec<_> = records.iter().collect();
        // Solved entries outside the filtered view must not leak into counts.
        let solved: SolvedMap = [
            (QuestionId::new("2"), true),
            (QuestionId::new("3"), false),
            (QuestionId::new("99"), true),
        ]
        .into_iter()
        .collect();

        let stats = compute_stats(&filtered, &solved);
        for difficulty in Difficulty::ALL {
            let bucket = stats.for_difficulty(difficulty);
            assert!(bucket.solved <= bucket.total);
        }
        assert_eq!(stats.overall, Progress { solved: 1, total: 3 });
        assert!((stats.medium.percent() - 50.0).abs() < f64::EPSILON);
    }
}
