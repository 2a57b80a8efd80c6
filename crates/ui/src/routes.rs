use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    FeedbackView, InterviewIntroView, InterviewRunView, NewInterviewView, QuestionsView,
    SettingsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuestionsView)] Questions {},
        #[route("/interview", NewInterviewView)] NewInterview {},
        #[route("/interview/:id", InterviewIntroView)] InterviewIntro { id: String },
        #[route("/interview/:id/start", InterviewRunView)] InterviewRun { id: String },
        #[route("/interview/:id/feedback", FeedbackView)] Feedback { id: String },
        #[route("/settings", SettingsView)] Settings {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "PrepDeck" }
            ul {
                li { Link { to: Route::Questions {}, "Questions" } }
                li { Link { to: Route::NewInterview {}, "Mock interview" } }
                li { Link { to: Route::Settings {}, "Settings" } }
            }
        }
    }
}
