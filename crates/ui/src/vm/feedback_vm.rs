use services::FeedbackReport;

use super::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackItemVm {
    pub question: String,
    pub rating_label: String,
    pub rating_class: &'static str,
    pub user_answer: String,
    pub correct_answer: String,
    pub feedback_html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub headline: &'static str,
    pub average_label: String,
    pub average_class: &'static str,
    pub items: Vec<FeedbackItemVm>,
}

const LOW_RATING: u8 = 6;

fn rating_class(low: bool) -> &'static str {
    if low { "rating-low" } else { "rating-good" }
}

#[must_use]
pub fn map_feedback(report: &FeedbackReport) -> FeedbackVm {
    let items = report
        .answers
        .iter()
        .map(|answer| {
            let rating = answer.rating.value();
            FeedbackItemVm {
                question: answer.question.clone(),
                rating_label: format!("Rating: {rating}/10"),
                rating_class: rating_class(rating < LOW_RATING),
                user_answer: answer.user_answer.clone(),
                correct_answer: answer.correct_answer.clone(),
                feedback_html: markdown_to_html(&answer.feedback),
            }
        })
        .collect();

    let (headline, average_label) = match report.average_rating {
        Some(avg) => (
            "Here is your interview feedback",
            format!("Your overall interview rating: {avg}/10"),
        ),
        None => (
            "No answers recorded",
            "Answer at least one question to get a rating.".to_string(),
        ),
    };

    FeedbackVm {
        headline,
        average_label,
        average_class: rating_class(report.is_low()),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::{AnswerId, AnswerRecord, InterviewId, Rating};
    use prep_core::time::fixed_now;

    fn answer(id: u64, rating: u8) -> AnswerRecord {
        AnswerRecord {
            id: AnswerId::new(id),
            interview_id: InterviewId::generate(),
            question: format!("Q{id}"),
            user_answer: "my answer".into(),
            correct_answer: "reference".into(),
            feedback: "Be more *specific*.".into(),
            rating: Rating::new(rating).unwrap(),
            created_at: fixed_now(),
        }
    }

    #[test]
    fn maps_average_and_items_in_order() {
        let report = FeedbackReport::new(
            InterviewId::generate(),
            vec![answer(2, 8), answer(1, 7), answer(3, 8)],
        );
        let vm = map_feedback(&report);
        assert_eq!(vm.average_label, "Your overall interview rating: 8/10");
        assert_eq!(vm.average_class, "rating-good");
        let questions: Vec<_> = vm.items.iter().map(|i| i.question.as_str()).collect();
        assert_eq!(questions, vec!["Q1", "Q2", "Q3"]);
        assert_eq!(vm.items[0].rating_label, "Rating: 7/10");
        assert!(vm.items[0].feedback_html.contains("<em>specific</em>"));
    }

    #[test]
    fn low_ratings_are_flagged() {
        let report = FeedbackReport::new(InterviewId::generate(), vec![answer(1, 3)]);
        let vm = map_feedback(&report);
        assert_eq!(vm.average_class, "rating-low");
        assert_eq!(vm.items[0].rating_class, "rating-low");
    }

    #[test]
    fn empty_report_has_no_rating() {
        let vm = map_feedback(&FeedbackReport::new(InterviewId::generate(), Vec::new()));
        assert_eq!(vm.headline, "No answers recorded");
        assert!(vm.items.is_empty());
    }
}
