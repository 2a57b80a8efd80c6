use std::sync::Arc;

use services::{
    AppServices, DisplayStrings, InterviewService, PreferencesService, QuestionDashboard,
    SolvedStore,
};

/// What the views need from the composition root.
pub trait UiApp: Send + Sync {
    /// Fresh dashboard state over the loaded catalog.
    fn dashboard(&self) -> QuestionDashboard;

    fn solved(&self) -> Arc<SolvedStore>;
    fn preferences(&self) -> Arc<PreferencesService>;
    fn interviews(&self) -> Arc<InterviewService>;
    fn display(&self) -> DisplayStrings;
}

impl UiApp for AppServices {
    fn dashboard(&self) -> QuestionDashboard {
        AppServices::dashboard(self)
    }

    fn solved(&self) -> Arc<SolvedStore> {
        AppServices::solved(self)
    }

    fn preferences(&self) -> Arc<PreferencesService> {
        AppServices::preferences(self)
    }

    fn interviews(&self) -> Arc<InterviewService> {
        AppServices::interviews(self)
    }

    fn display(&self) -> DisplayStrings {
        AppServices::display(self).clone()
    }
}

#[derive(Clone)]
pub struct AppContext {
    dashboard: QuestionDashboard,
    solved: Arc<SolvedStore>,
    preferences: Arc<PreferencesService>,
    interviews: Arc<InterviewService>,
    display: DisplayStrings,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            dashboard: app.dashboard(),
            solved: app.solved(),
            preferences: app.preferences(),
            interviews: app.interviews(),
            display: app.display(),
        }
    }

    /// Dashboard state as of launch; views own their working copy.
    #[must_use]
    pub fn dashboard(&self) -> QuestionDashboard {
        self.dashboard.clone()
    }

    #[must_use]
    pub fn solved(&self) -> Arc<SolvedStore> {
        Arc::clone(&self.solved)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }

    #[must_use]
    pub fn interviews(&self) -> Arc<InterviewService> {
        Arc::clone(&self.interviews)
    }

    #[must_use]
    pub fn display(&self) -> &DisplayStrings {
        &self.display
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
