use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use prep_core::model::MockInterview;
use services::{InterviewFlow, RequestGuard};

use super::load_interview;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{question_tabs, submit_error_message};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Grading,
    Recorded(u8),
    Failed(&'static str),
}

#[component]
pub fn InterviewRunView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let interviews = ctx.interviews();

    let resource = use_resource(move || {
        let interviews = interviews.clone();
        let raw_id = id.clone();
        async move { load_interview(&interviews, &raw_id).await }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page interview-run",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(interview) => rsx! {
                    InterviewRunner { interview }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    Link { to: Route::NewInterview {}, "Back to interviews" }
                },
            }
        }
    }
}

#[component]
fn InterviewRunner(interview: MockInterview) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut flow = use_signal(|| InterviewFlow::new(interview.clone()));
    let mut answer = use_signal(String::new);
    let mut submit_state = use_signal(|| SubmitState::Idle);
    let guard = use_hook(RequestGuard::new);
    let question_note = ctx.display().question_note.clone();

    // Moving to another question drops any grading still in flight.
    let mut reset_answer = {
        let guard = guard.clone();
        move || {
            guard.invalidate();
            answer.set(String::new());
            submit_state.set(SubmitState::Idle);
        }
    };
    let mut reset_after_next = reset_answer.clone();

    let service = ctx.interviews();
    let submit_guard = guard.clone();
    let on_submit = move |_: MouseEvent| {
        let text = answer.peek().clone();
        let (interview, index) = {
            let flow = flow.peek();
            (flow.interview().clone(), flow.index())
        };
        let interviews = service.clone();
        let guard = submit_guard.clone();
        let token = guard.begin();
        submit_state.set(SubmitState::Grading);
        spawn(async move {
            let result = interviews.submit_answer(&interview, index, &text).await;
            let Some(result) = guard.accept(token, result) else {
                return;
            };
            match result {
                Ok(record) => {
                    answer.set(String::new());
                    submit_state.set(SubmitState::Recorded(record.rating.value()));
                }
                Err(err) => {
                    log::warn!("answer submission failed: {err}");
                    submit_state.set(SubmitState::Failed(submit_error_message(&err)));
                }
            }
        });
    };

    let current_flow = flow();
    let tabs = question_tabs(&current_flow);
    let current = current_flow.current().clone();
    let can_go_previous = current_flow.can_go_previous();
    let can_go_next = current_flow.can_go_next();
    let can_end = current_flow.can_end();
    let grading = submit_state() == SubmitState::Grading;

    rsx! {
        div { class: "question-tabs",
            for tab in tabs {
                span {
                    key: "{tab.index}",
                    class: if tab.active { "tab active" } else { "tab" },
                    "{tab.label}"
                }
            }
        }

        section { class: "question",
            p { class: "question-text", "{current.question}" }
            div { class: "banner note",
                strong { "Note: " }
                "{question_note}"
            }
        }

        section { class: "answer",
            textarea {
                placeholder: "Type your answer here...",
                value: "{answer}",
                disabled: grading,
                oninput: move |evt| answer.set(evt.value()),
            }
            match submit_state() {
                SubmitState::Idle => rsx! {},
                SubmitState::Grading => rsx! {
                    p { class: "status", "Grading your answer..." }
                },
                SubmitState::Recorded(rating) => rsx! {
                    p { class: "status success", "Answer recorded. Rating: {rating}/10" }
                },
                SubmitState::Failed(message) => rsx! {
                    p { class: "status error", "{message}" }
                },
            }
            button {
                class: "button primary",
                disabled: grading,
                onclick: on_submit,
                "Submit answer"
            }
        }

        div { class: "actions",
            button {
                disabled: !can_go_previous,
                onclick: move |_| {
                    if flow.write().previous().is_ok() {
                        reset_answer();
                    }
                },
                "Previous question"
            }
            button {
                disabled: !can_go_next,
                onclick: move |_| {
                    if flow.write().next().is_ok() {
                        reset_after_next();
                    }
                },
                "Next question"
            }
            button {
                class: "button danger",
                disabled: !can_end,
                onclick: move |_| {
                    if let Ok(id) = flow.peek().end() {
                        navigator.push(Route::Feedback { id: id.to_string() });
                    }
                },
                "End interview"
            }
        }
    }
}
