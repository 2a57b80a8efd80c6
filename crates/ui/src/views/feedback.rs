use dioxus::prelude::*;
use dioxus_router::Link;
use prep_core::model::InterviewId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{FeedbackItemVm, map_feedback};

#[component]
pub fn FeedbackView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let interviews = ctx.interviews();

    let resource = use_resource(move || {
        let interviews = interviews.clone();
        let raw_id = id.clone();
        async move {
            let id: InterviewId = raw_id.parse().map_err(|_| ViewError::NotFound)?;
            let report = interviews.report(id).await.map_err(|err| {
                log::warn!("failed to load feedback for {id}: {err}");
                ViewError::Unknown
            })?;
            Ok::<_, ViewError>(map_feedback(&report))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page feedback",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    h2 { class: "feedback-title", "{vm.headline}" }
                    p { class: "average {vm.average_class}", "{vm.average_label}" }
                    if !vm.items.is_empty() {
                        p { class: "hint",
                            "Below are the interview questions with the reference answer, your answer and feedback for improvement."
                        }
                    }
                    for item in vm.items.iter() {
                        FeedbackItem { item: item.clone() }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
            div { class: "actions",
                Link { class: "button", to: Route::Questions {}, "Go home" }
                Link { class: "button primary", to: Route::NewInterview {}, "New interview" }
            }
        }
    }
}

#[component]
fn FeedbackItem(item: FeedbackItemVm) -> Element {
    rsx! {
        details { class: "feedback-item",
            summary { "{item.question}" }
            p { class: "rating {item.rating_class}", "{item.rating_label}" }
            div { class: "answer user",
                strong { "Your answer: " }
                "{item.user_answer}"
            }
            div { class: "answer reference",
                strong { "Correct answer: " }
                "{item.correct_answer}"
            }
            div { class: "feedback-body",
                strong { "Feedback: " }
                div { dangerous_inner_html: "{item.feedback_html}" }
            }
        }
    }
}
