use prep_core::model::{InterviewId, InterviewQuestion, MockInterview};

use crate::error::FlowError;

/// Position within an interview's fixed question list.
///
/// Progress is not persisted; reopening an interview starts at question 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewFlow {
    interview: MockInterview,
    index: usize,
}

impl InterviewFlow {
    /// `MockInterview` always has at least one question, so a flow can never
    /// be empty.
    #[must_use]
    pub fn new(interview: MockInterview) -> Self {
        Self {
            interview,
            index: 0,
        }
    }

    #[must_use]
    pub fn interview(&self) -> &MockInterview {
        &self.interview
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.interview.questions().len()
    }

    #[must_use]
    pub fn current(&self) -> &InterviewQuestion {
        &self.interview.questions()[self.index]
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.total()
    }

    #[must_use]
    pub fn can_end(&self) -> bool {
        self.index + 1 == self.total()
    }

    /// # Errors
    ///
    /// Returns `FlowError::AtFirstQuestion` at index 0.
    pub fn previous(&mut self) -> Result<usize, FlowError> {
        if !self.can_go_previous() {
            return Err(FlowError::AtFirstQuestion);
        }
        self.index -= 1;
        Ok(self.index)
    }

    /// # Errors
    ///
    /// Returns `FlowError::AtLastQuestion` at the last index.
    pub fn next(&mut self) -> Result<usize, FlowError> {
        if !self.can_go_next() {
            return Err(FlowError::AtLastQuestion);
        }
        self.index += 1;
        Ok(self.index)
    }

    /// Finish the interview and hand back the id to open its feedback.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotAtLastQuestion` before the last question.
    pub fn end(&self) -> Result<InterviewId, FlowError> {
        if !self.can_end() {
            return Err(FlowError::NotAtLastQuestion);
        }
        Ok(self.interview.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::InterviewDraft;
    use prep_core::time::fixed_now;

    fn interview(n: usize) -> MockInterview {
        let details = InterviewDraft {
            job_position: "SRE".into(),
            job_description: "Kubernetes".into(),
            years_experience: 5,
        }
        .validate()
        .unwrap();
        let questions = (0..n)
            .map(|i| InterviewQuestion::new(format!("Q{i}"), format!("A{i}")))
            .collect();
        MockInterview::new(InterviewId::generate(), details, questions, fixed_now()).unwrap()
    }

    #[test]
    fn five_question_transitions() {
        let mut flow = InterviewFlow::new(interview(5));
        assert!(!flow.can_go_previous());
        assert_eq!(flow.previous(), Err(FlowError::AtFirstQuestion));
        assert_eq!(flow.end(), Err(FlowError::NotAtLastQuestion));

        for expected in 1..=4 {
            assert_eq!(flow.next(), Ok(expected));
        }
        assert!(!flow.can_go_next());
        assert_eq!(flow.next(), Err(FlowError::AtLastQuestion));
        assert_eq!(flow.index(), 4);
        assert!(flow.can_end());
        assert_eq!(flow.end(), Ok(flow.interview().id()));

        assert_eq!(flow.previous(), Ok(3));
        assert!(!flow.can_end());
        assert_eq!(flow.current().question, "Q3");
    }

    #[test]
    fn single_question_can_end_immediately() {
        let flow = InterviewFlow::new(interview(1));
        assert!(!flow.can_go_previous());
        assert!(!flow.can_go_next());
        assert!(flow.can_end());
    }
}
