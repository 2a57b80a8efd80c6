use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use prep_core::model::{Difficulty, InterviewDraft, QuestionId, QuestionRecord};
use prep_core::time::fixed_now;
use services::{AiError, AppServices, Clock, InterviewFlow, TextGenerator};
use storage::repository::Storage;

struct QueueGenerator {
    replies: Mutex<Vec<String>>,
}

impl QueueGenerator {
    fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().rev().map(ToString::to_string).collect()),
        }
    }
}

#[async_trait]
impl TextGenerator for QueueGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
        self.replies
            .lock()
            .unwrap()
            .pop()
            .ok_or(AiError::EmptyResponse)
    }
}

fn catalog() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new(
            QuestionId::new("1"),
            "Two Sum",
            "/problems/two-sum",
            "google",
            Difficulty::Easy,
            49.0,
            100.0,
            false,
            "Array, Hash Table",
        ),
        QuestionRecord::new(
            QuestionId::new("1"),
            "Two Sum",
            "/problems/two-sum",
            "amazon",
            Difficulty::Easy,
            49.0,
            80.0,
            false,
            "Array, Hash Table",
        ),
        QuestionRecord::new(
            QuestionId::new("4"),
            "Median of Two Sorted Arrays",
            "/problems/median-of-two-sorted-arrays",
            "google",
            Difficulty::Hard,
            38.0,
            60.0,
            false,
            "Array, Binary Search",
        ),
    ]
}

const QUESTIONS: &str = r#"```json
[
  {"question": "What is a goroutine?", "answer": "A lightweight thread managed by the Go runtime."},
  {"question": "How do channels synchronize?", "answer": "Unbuffered sends block until received."},
  {"question": "Explain context cancellation.", "answer": "Contexts propagate deadlines and cancel signals."}
]
```"#;

#[tokio::test]
async fn interview_end_to_end_over_sqlite() {
    let storage = Storage::sqlite("sqlite:file:memdb_services_interview?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");
    let generator = Arc::new(QueueGenerator::new(&[
        QUESTIONS,
        r#"{"rating": 7, "feedback": "Mention the scheduler."}"#,
        r#"{"rating": 8, "feedback": "Good."}"#,
        r#"{"rating": "8", "feedback": "Solid."}"#,
    ]));
    let services = AppServices::from_storage(&storage, Clock::fixed(fixed_now()), catalog(), generator)
        .with_question_count(3);
    let interviews = services.interviews();

    let interview = interviews
        .create(InterviewDraft {
            job_position: "Go Developer".into(),
            job_description: "Microservices in Go".into(),
            years_experience: 3,
        })
        .await
        .expect("create interview");

    let reopened = interviews
        .get(interview.id())
        .await
        .expect("get")
        .expect("interview exists");
    let mut flow = InterviewFlow::new(reopened);

    loop {
        let index = flow.index();
        interviews
            .submit_answer(flow.interview(), index, "This is my considered answer.")
            .await
            .expect("submit answer");
        if flow.can_end() {
            break;
        }
        flow.next().expect("advance");
    }
    let finished = flow.end().expect("end at last question");
    assert_eq!(finished, interview.id());

    let report = interviews.report(finished).await.expect("report");
    assert_eq!(report.answers.len(), 3);
    assert_eq!(report.answers[0].question, "What is a goroutine?");
    assert_eq!(report.average_rating, Some(8));
}

#[tokio::test]
async fn solved_state_survives_reopening_storage() {
    let url = "sqlite:file:memdb_services_solved?mode=memory&cache=shared";
    let storage = Storage::sqlite(url).await.expect("connect sqlite");
    let generator = Arc::new(QueueGenerator::new(&[]));
    let services = AppServices::from_storage(&storage, Clock::fixed(fixed_now()), catalog(), generator);

    let solved = services.solved();
    solved.load().await;
    let map = solved.toggle(&QuestionId::new("1")).await;

    let dashboard = services.dashboard();
    let view = dashboard.view(&map);
    // Question 1 appears twice in the catalog but counts once.
    assert_eq!(view.stats.overall.total, 2);
    assert_eq!(view.stats.overall.solved, 1);
    assert_eq!(view.stats.easy.solved, 1);
    assert_eq!(view.stats.hard.total, 1);

    let again = Storage::sqlite(url).await.expect("reconnect");
    let services = AppServices::from_storage(
        &again,
        Clock::fixed(fixed_now()),
        catalog(),
        Arc::new(QueueGenerator::new(&[])),
    );
    let restored = services.solved().load().await;
    assert!(restored.is_solved(&QuestionId::new("1")));
    assert!(!restored.is_solved(&QuestionId::new("4")));
}
