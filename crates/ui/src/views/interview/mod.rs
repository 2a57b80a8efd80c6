mod create;
mod intro;
mod run;

pub use create::NewInterviewView;
pub use intro::InterviewIntroView;
pub use run::InterviewRunView;

use prep_core::model::{InterviewId, MockInterview};
use services::InterviewService;

use crate::views::ViewError;

/// Resolves a route id to a stored interview.
async fn load_interview(
    service: &InterviewService,
    raw_id: &str,
) -> Result<MockInterview, ViewError> {
    let id: InterviewId = raw_id.parse().map_err(|_| ViewError::NotFound)?;
    service
        .get(id)
        .await
        .map_err(|err| {
            log::warn!("failed to load interview {id}: {err}");
            ViewError::Unknown
        })?
        .ok_or(ViewError::NotFound)
}
