use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{InterviewForm, create_error_message, map_interview_summaries};

const RECENT_LIMIT: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CreateState {
    Idle,
    Generating,
    Failed(&'static str),
}

#[component]
pub fn NewInterviewView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut form = use_signal(InterviewForm::default);
    let mut create_state = use_signal(|| CreateState::Idle);

    let recent_service = ctx.interviews();
    let mut recent = use_resource(move || {
        let interviews = recent_service.clone();
        async move {
            let items = interviews
                .list_recent(RECENT_LIMIT)
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_interview_summaries(&items))
        }
    });
    let recent_state = view_state_from_resource(&recent);

    let create_service = ctx.interviews();
    let on_generate = move |_: MouseEvent| {
        if create_state() == CreateState::Generating {
            return;
        }
        let draft = match form.peek().to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                create_state.set(CreateState::Failed(message));
                return;
            }
        };
        let interviews = create_service.clone();
        create_state.set(CreateState::Generating);
        spawn(async move {
            match interviews.create(draft).await {
                Ok(interview) => {
                    create_state.set(CreateState::Idle);
                    navigator.push(Route::InterviewIntro {
                        id: interview.id().to_string(),
                    });
                }
                Err(err) => {
                    log::warn!("interview generation failed: {err}");
                    create_state.set(CreateState::Failed(create_error_message(&err)));
                }
            }
        });
    };

    let generating = create_state() == CreateState::Generating;
    let current = form();

    rsx! {
        div { class: "page new-interview",
            h2 { "Create a new mock interview" }
            p { class: "hint",
                "Tell us about the job you are interviewing for and we will generate questions for it."
            }

            div { class: "form",
                label { class: "field",
                    span { "Job role / position" }
                    input {
                        placeholder: "Ex. Full Stack Developer",
                        value: "{current.job_position}",
                        oninput: move |evt| {
                            let mut next = form();
                            next.job_position = evt.value();
                            form.set(next);
                        },
                    }
                }
                label { class: "field",
                    span { "Job description / tech stack" }
                    textarea {
                        placeholder: "Ex. React, Angular, Node.js, MySQL",
                        value: "{current.job_description}",
                        oninput: move |evt| {
                            let mut next = form();
                            next.job_description = evt.value();
                            form.set(next);
                        },
                    }
                }
                label { class: "field",
                    span { "Years of experience" }
                    input {
                        r#type: "number",
                        min: "0",
                        max: "50",
                        placeholder: "Ex. 5",
                        value: "{current.years_experience}",
                        oninput: move |evt| {
                            let mut next = form();
                            next.years_experience = evt.value();
                            form.set(next);
                        },
                    }
                }

                if let CreateState::Failed(message) = create_state() {
                    p { class: "form-error", "{message}" }
                }

                div { class: "actions",
                    button {
                        class: "button primary",
                        disabled: generating,
                        onclick: on_generate,
                        if generating { "Generating questions..." } else { "Start interview" }
                    }
                }
            }

            section { class: "recent",
                h3 { "Previous mock interviews" }
                match recent_state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Ready(items) => rsx! {
                        if items.is_empty() {
                            p { class: "empty", "No interviews yet." }
                        } else {
                            ul { class: "interview-list",
                                for item in items {
                                    li { key: "{item.id}", class: "interview-card",
                                        h4 { "{item.title}" }
                                        p { "{item.subtitle}" }
                                        p { class: "muted", "{item.created_label}" }
                                        div { class: "actions",
                                            Link { to: Route::Feedback { id: item.id.clone() }, "Feedback" }
                                            Link { to: Route::InterviewIntro { id: item.id.clone() }, "Start again" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                        button { onclick: move |_| recent.restart(), "Retry" }
                    },
                }
            }
        }
    }
}
