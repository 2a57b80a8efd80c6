use prep_core::dashboard::{DashboardView, PageWindow, Progress};
use prep_core::model::{Difficulty, QuestionId};

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressBarVm {
    pub label: &'static str,
    pub class: &'static str,
    pub count_label: String,
    pub percent_label: String,
    pub width_style: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionRowVm {
    pub id: QuestionId,
    pub title: String,
    pub href: String,
    pub company: String,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub acceptance_label: String,
    pub frequency_label: String,
    pub premium: bool,
    pub topics_label: String,
    pub solved: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerVm {
    pub page: usize,
    pub total_pages: usize,
    pub page_label: String,
    pub range_label: String,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    pub bars: Vec<ProgressBarVm>,
    pub rows: Vec<QuestionRowVm>,
    pub pager: PagerVm,
    pub is_empty: bool,
}

#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "difficulty-easy",
        Difficulty::Medium => "difficulty-medium",
        Difficulty::Hard => "difficulty-hard",
    }
}

fn map_bar(label: &'static str, class: &'static str, progress: Progress) -> ProgressBarVm {
    let percent = progress.percent();
    ProgressBarVm {
        label,
        class,
        count_label: format!("{} / {}", progress.solved, progress.total),
        percent_label: format!("{percent:.0}%"),
        width_style: format!("width: {percent:.1}%;"),
    }
}

fn map_pager(window: PageWindow, filtered_count: usize) -> PagerVm {
    let range_label = if filtered_count == 0 {
        "No matching questions".to_string()
    } else {
        format!(
            "Showing {}-{} of {filtered_count}",
            window.start + 1,
            window.end
        )
    };
    PagerVm {
        page: window.page,
        total_pages: window.total_pages,
        page_label: format!("Page {} of {}", window.page, window.total_pages),
        range_label,
        has_previous: window.has_previous(),
        has_next: window.has_next(),
    }
}

#[must_use]
pub fn map_dashboard(view: &DashboardView) -> DashboardVm {
    let stats = view.stats;
    let bars = vec![
        map_bar("Solved", "bar-overall", stats.overall),
        map_bar("Easy", "bar-easy", stats.easy),
        map_bar("Medium", "bar-medium", stats.medium),
        map_bar("Hard", "bar-hard", stats.hard),
    ];

    let rows = view
        .rows
        .iter()
        .map(|row| {
            let record = &row.record;
            QuestionRowVm {
                id: record.id().clone(),
                title: record.title().to_string(),
                href: record.problem_url(),
                company: record.company().to_string(),
                difficulty_label: record.difficulty().as_str(),
                difficulty_class: difficulty_class(record.difficulty()),
                acceptance_label: format!("{:.1}%", record.acceptance()),
                frequency_label: format!("{:.1}%", record.frequency()),
                premium: record.is_premium(),
                topics_label: record.topics().join(", "),
                solved: row.solved,
            }
        })
        .collect();

    DashboardVm {
        bars,
        rows,
        pager: map_pager(view.window, view.filtered_count),
        is_empty: view.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::dashboard::{FilterCriteria, Pagination, build_view};
    use prep_core::model::{QuestionRecord, SolvedMap};

    fn catalog() -> Vec<QuestionRecord> {
        (1..=12)
            .map(|i| {
                QuestionRecord::new(
                    QuestionId::new(i.to_string()),
                    format!("Question {i}"),
                    format!("/problems/q{i}"),
                    "google",
                    if i <= 4 { Difficulty::Easy } else { Difficulty::Hard },
                    45.3,
                    12.0,
                    i == 3,
                    "Array, Hash Table",
                )
            })
            .collect()
    }

    #[test]
    fn maps_rows_bars_and_pager() {
        let mut solved = SolvedMap::new();
        solved.set(QuestionId::new("1"), true);
        solved.set(QuestionId::new("2"), false);
        let view = build_view(
            &catalog(),
            &FilterCriteria::new(),
            &solved,
            &Pagination::default(),
        );

        let vm = map_dashboard(&view);
        assert_eq!(vm.bars[0].count_label, "1 / 12");
        assert_eq!(vm.bars[1].count_label, "1 / 4");
        assert_eq!(vm.bars[1].percent_label, "25%");
        assert_eq!(vm.bars[2].count_label, "0 / 0");
        assert_eq!(vm.bars[2].width_style, "width: 0.0%;");

        assert_eq!(vm.rows.len(), 10);
        assert!(vm.rows[0].solved);
        assert!(!vm.rows[1].solved);
        assert!(vm.rows[2].premium);
        assert_eq!(vm.rows[0].acceptance_label, "45.3%");
        assert_eq!(vm.rows[0].topics_label, "Array, Hash Table");
        assert_eq!(vm.rows[0].difficulty_class, "difficulty-easy");
        assert!(vm.rows[0].href.ends_with("/problems/q1"));

        assert_eq!(vm.pager.page_label, "Page 1 of 2");
        assert_eq!(vm.pager.range_label, "Showing 1-10 of 12");
        assert!(!vm.pager.has_previous);
        assert!(vm.pager.has_next);
    }

    #[test]
    fn empty_filter_result_keeps_one_page() {
        let view = build_view(
            &catalog(),
            &FilterCriteria::new().with_query("zzz"),
            &SolvedMap::new(),
            &Pagination::default(),
        );
        let vm = map_dashboard(&view);
        assert!(vm.is_empty);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.pager.page_label, "Page 1 of 1");
        assert_eq!(vm.pager.range_label, "No matching questions");
        assert!(!vm.pager.has_next);
    }
}
