#![forbid(unsafe_code)]

pub mod ai;
pub mod app_services;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod interviews;
pub mod preferences_service;
pub mod request_guard;
pub mod solved_store;

pub use prep_core::Clock;

pub use ai::{AiClient, AiConfig, TextGenerator};
pub use app_services::AppServices;
pub use dashboard::QuestionDashboard;
pub use display::DisplayStrings;
pub use error::{
    AiError, AppServicesError, FlowError, InterviewServiceError, PreferencesServiceError,
};
pub use interviews::{FeedbackReport, InterviewFlow, InterviewService};
pub use preferences_service::PreferencesService;
pub use request_guard::{RequestGuard, RequestToken};
pub use solved_store::SolvedStore;
