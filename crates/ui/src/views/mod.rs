mod feedback;
mod interview;
mod questions;
mod settings;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use feedback::FeedbackView;
pub use interview::{InterviewIntroView, InterviewRunView, NewInterviewView};
pub use questions::QuestionsView;
pub use settings::SettingsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
