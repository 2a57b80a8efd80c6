use std::sync::Arc;

use prep_core::dashboard::{
    CompanyCount, DashboardView, FilterCriteria, PageSize, Pagination, PremiumFilter, build_view,
    company_counts, filter_questions, unique_topics,
};
use prep_core::model::{Difficulty, QuestionRecord, SolvedMap};

/// Dashboard state: the catalog plus the user's criteria and paging.
///
/// Criteria changes and page-size changes return to page 1. Navigation is
/// bounded by the current filtered count.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDashboard {
    records: Arc<Vec<QuestionRecord>>,
    criteria: FilterCriteria,
    pagination: Pagination,
}

impl QuestionDashboard {
    #[must_use]
    pub fn new(records: Arc<Vec<QuestionRecord>>) -> Self {
        Self {
            records,
            criteria: FilterCriteria::new(),
            pagination: Pagination::default(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    fn filtered_len(&self) -> usize {
        filter_questions(&self.records, &self.criteria).len()
    }

    fn update_criteria(&mut self, update: impl FnOnce(&mut FilterCriteria)) {
        update(&mut self.criteria);
        self.pagination.reset();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.update_criteria(|c| c.query = query);
    }

    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.update_criteria(|c| c.difficulty = difficulty);
    }

    pub fn set_premium(&mut self, premium: PremiumFilter) {
        self.update_criteria(|c| c.premium = premium);
    }

    pub fn set_company(&mut self, company: Option<String>) {
        let company = company.filter(|name| !name.trim().is_empty());
        self.update_criteria(|c| c.company = company);
    }

    /// Adds the topic if absent, removes it otherwise.
    pub fn toggle_topic(&mut self, topic: &str) {
        let topic = topic.trim().to_string();
        if topic.is_empty() {
            return;
        }
        self.update_criteria(|c| {
            if !c.topics.remove(&topic) {
                c.topics.insert(topic);
            }
        });
    }

    pub fn clear_topics(&mut self) {
        self.update_criteria(|c| c.topics.clear());
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.pagination.set_page_size(page_size);
    }

    pub fn first_page(&mut self) {
        self.pagination.first();
    }

    pub fn previous_page(&mut self) {
        let len = self.filtered_len();
        self.pagination.clamp(len);
        self.pagination.previous();
    }

    pub fn next_page(&mut self) {
        let len = self.filtered_len();
        self.pagination.clamp(len);
        self.pagination.next(len);
    }

    pub fn last_page(&mut self) {
        let len = self.filtered_len();
        self.pagination.last(len);
    }

    pub fn set_jump_input(&mut self, input: impl Into<String>) {
        self.pagination.set_jump_input(input);
    }

    /// Commits the pending page jump. Returns whether it was accepted.
    pub fn confirm_jump(&mut self) -> bool {
        let len = self.filtered_len();
        self.pagination.confirm_jump(len)
    }

    /// Filtered stats and the current page.
    #[must_use]
    pub fn view(&self, solved: &SolvedMap) -> DashboardView {
        build_view(&self.records, &self.criteria, solved, &self.pagination)
    }

    #[must_use]
    pub fn companies(&self) -> Vec<CompanyCount> {
        company_counts(&self.records)
    }

    #[must_use]
    pub fn topics(&self) -> Vec<String> {
        unique_topics(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::QuestionId;

    fn catalog(n: usize) -> Arc<Vec<QuestionRecord>> {
        Arc::new(
            (1..=n)
                .map(|i| {
                    QuestionRecord::new(
                        QuestionId::new(i.to_string()),
                        format!("Question {i}"),
                        format!("/problems/q{i}"),
                        if i <= 3 { "google" } else { "meta" },
                        if i % 2 == 0 {
                            Difficulty::Medium
                        } else {
                            Difficulty::Easy
                        },
                        50.0,
                        10.0,
                        i % 5 == 0,
                        if i % 2 == 0 { "Array, Graph" } else { "Array" },
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn filter_change_resets_page() {
        let mut dashboard = QuestionDashboard::new(catalog(25));
        dashboard.next_page();
        dashboard.next_page();
        assert_eq!(dashboard.pagination().page(), 3);

        dashboard.set_difficulty(Some(Difficulty::Easy));
        assert_eq!(dashboard.pagination().page(), 1);

        dashboard.last_page();
        dashboard.toggle_topic("Array");
        assert_eq!(dashboard.pagination().page(), 1);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut dashboard = QuestionDashboard::new(catalog(25));
        dashboard.last_page();
        dashboard.set_page_size(PageSize::Five);
        assert_eq!(dashboard.pagination().page(), 1);
        assert_eq!(dashboard.view(&SolvedMap::new()).window.total_pages, 5);
    }

    #[test]
    fn jump_respects_filtered_page_count() {
        let mut dashboard = QuestionDashboard::new(catalog(25));
        dashboard.set_jump_input("4");
        assert!(!dashboard.confirm_jump());
        assert_eq!(dashboard.pagination().page(), 1);
        assert_eq!(dashboard.pagination().jump_input(), "4");

        dashboard.set_jump_input("3");
        assert!(dashboard.confirm_jump());
        assert_eq!(dashboard.view(&SolvedMap::new()).rows.len(), 5);
    }

    #[test]
    fn next_page_saturates_at_filtered_bound() {
        let mut dashboard = QuestionDashboard::new(catalog(25));
        dashboard.set_company(Some("google".into()));
        dashboard.next_page();
        assert_eq!(dashboard.pagination().page(), 1);
    }

    #[test]
    fn topic_toggle_is_conjunctive_and_reversible() {
        let mut dashboard = QuestionDashboard::new(catalog(10));
        dashboard.toggle_topic("Graph");
        assert_eq!(dashboard.view(&SolvedMap::new()).filtered_count, 5);
        dashboard.toggle_topic("Array");
        assert_eq!(dashboard.view(&SolvedMap::new()).filtered_count, 5);
        dashboard.toggle_topic("Graph");
        assert_eq!(dashboard.view(&SolvedMap::new()).filtered_count, 10);
        dashboard.clear_topics();
        assert!(dashboard.criteria().topics.is_empty());
    }

    #[test]
    fn facets_cover_full_catalog() {
        let dashboard = QuestionDashboard::new(catalog(10));
        let companies = dashboard.companies();
        assert_eq!(companies[0].name, "meta");
        assert_eq!(companies[0].count, 7);
        assert_eq!(dashboard.topics(), vec!["Array", "Graph"]);
    }
}
