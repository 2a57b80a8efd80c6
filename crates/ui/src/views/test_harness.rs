use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use prep_core::model::{Difficulty, InterviewDraft, MockInterview, QuestionId, QuestionRecord};
use prep_core::time::fixed_clock;
use services::{AiError, AppServices, TextGenerator};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{
    FeedbackView, InterviewIntroView, InterviewRunView, NewInterviewView, QuestionsView,
    SettingsView,
};

/// Replies with queued strings in order, then fails.
struct QueuedGenerator {
    replies: Mutex<Vec<String>>,
}

#[async_trait]
impl TextGenerator for QueuedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
        self.replies
            .lock()
            .unwrap()
            .pop()
            .ok_or(AiError::EmptyResponse)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Questions,
    NewInterview,
    Intro(String),
    Run(String),
    Feedback(String),
    Settings,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Questions => rsx! { QuestionsView {} },
        ViewKind::NewInterview => rsx! { NewInterviewView {} },
        ViewKind::Intro(id) => rsx! { InterviewIntroView { id } },
        ViewKind::Run(id) => rsx! { InterviewRunView { id } },
        ViewKind::Feedback(id) => rsx! { FeedbackView { id } },
        ViewKind::Settings => rsx! { SettingsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Catalog of `n` questions: ids 1..=n, the first four easy, the rest hard.
pub fn sample_catalog(n: usize) -> Vec<QuestionRecord> {
    (1..=n)
        .map(|i| {
            QuestionRecord::new(
                QuestionId::new(i.to_string()),
                format!("Question {i}"),
                format!("/problems/question-{i}"),
                if i % 3 == 0 { "amazon" } else { "google" },
                if i <= 4 {
                    Difficulty::Easy
                } else {
                    Difficulty::Hard
                },
                52.5,
                30.0,
                false,
                if i % 2 == 0 { "Array, Graph" } else { "Array" },
            )
        })
        .collect()
}

pub const TWO_QUESTIONS: &str = r#"[
    {"question": "What is ownership?", "answer": "Each value has a single owner."},
    {"question": "Explain lifetimes.", "answer": "They bound how long references live."}
]"#;

pub fn job_draft() -> InterviewDraft {
    InterviewDraft {
        job_position: "Backend Engineer".into(),
        job_description: "Rust, PostgreSQL".into(),
        years_experience: 4,
    }
}

/// Services over in-memory storage with a scripted AI.
pub fn test_services(catalog: Vec<QuestionRecord>, replies: &[&str]) -> (Storage, Arc<AppServices>) {
    let storage = Storage::in_memory();
    let generator = Arc::new(QueuedGenerator {
        replies: Mutex::new(replies.iter().rev().map(ToString::to_string).collect()),
    });
    let services = AppServices::from_storage(&storage, fixed_clock(), catalog, generator)
        .with_question_count(2);
    (storage, Arc::new(services))
}

/// Creates an interview through the services, consuming one queued reply.
pub async fn create_interview(services: &AppServices) -> MockInterview {
    services
        .interviews()
        .create(job_draft())
        .await
        .expect("create interview")
}

pub fn mount(view: ViewKind, services: Arc<AppServices>) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: services,
            view,
        },
    );
    ViewHarness { dom }
}
