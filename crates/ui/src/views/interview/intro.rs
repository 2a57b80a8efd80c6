use dioxus::prelude::*;
use dioxus_router::Link;

use super::load_interview;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, view_state_from_resource};

#[component]
pub fn InterviewIntroView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let interviews = ctx.interviews();
    let information = ctx.display().information.clone();

    let raw_id = id.clone();
    let resource = use_resource(move || {
        let interviews = interviews.clone();
        let raw_id = raw_id.clone();
        async move { load_interview(&interviews, &raw_id).await }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page interview-intro",
            h2 { "Let's get started" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(interview) => rsx! {
                    div { class: "job-details",
                        p { strong { "Job role / position: " } "{interview.details().job_position()}" }
                        p { strong { "Job description / tech stack: " } "{interview.details().job_description()}" }
                        p { strong { "Years of experience: " } "{interview.details().years_experience()}" }
                        p { strong { "Questions: " } "{interview.questions().len()}" }
                    }
                    div { class: "banner info",
                        h3 { "Information" }
                        p { "{information}" }
                    }
                    div { class: "actions",
                        Link { class: "button primary", to: Route::InterviewRun { id: id.clone() }, "Start interview" }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    Link { to: Route::NewInterview {}, "Back to interviews" }
                },
            }
        }
    }
}
