//! Derived state for the question dashboard.
//!
//! Everything here is a pure function of the catalog, the current criteria,
//! the solved map and the pagination state. The pipeline runs
//! filter → stats → page slice over a single filtered set, so the progress
//! counters always describe exactly the rows the table can page through.

mod facets;
mod filter;
mod pagination;
mod stats;

pub use facets::{CompanyCount, company_counts, unique_topics};
pub use filter::{FilterCriteria, PremiumFilter, filter_questions};
pub use pagination::{PageSize, PageWindow, Pagination, total_pages};
pub use stats::{Progress, ProgressStats, compute_stats};

use crate::model::{QuestionRecord, SolvedMap};

/// A row of the visible page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRow {
    pub record: QuestionRecord,
    pub solved: bool,
}

/// Everything the dashboard renders for one set of inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: ProgressStats,
    pub filtered_count: usize,
    pub window: PageWindow,
    pub rows: Vec<DashboardRow>,
}

impl DashboardView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

/// Runs the full pipeline. The page is clamped, never rejected.
#[must_use]
pub fn build_view(
    records: &[QuestionRecord],
    criteria: &FilterCriteria,
    solved: &SolvedMap,
    pagination: &Pagination,
) -> DashboardView {
    let filtered = filter_questions(records, criteria);
    let stats = compute_stats(&filtered, solved);
    let window = pagination.window(filtered.len());
    let rows = filtered[window.start..window.end]
        .iter()
        .map(|record| DashboardRow {
            record: (*record).clone(),
            solved: solved.is_solved(record.id()),
        })
        .collect();

    DashboardView {
        stats,
        filtered_count: filtered.len(),
        window,
        rows,
    }
}
