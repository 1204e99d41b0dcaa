use super::domain::{AnswerError, AnswerSheet};
use super::engine::compute;
use super::views::Assessment;
use std::fmt;

/// Where a questionnaire session currently stands. The engine itself has no
/// lifecycle; this models the collaborator's view flow as an explicit,
/// externally-owned value instead of process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    CollectingInput,
    Submitted,
    DisplayingResult,
}

impl SessionState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::CollectingInput => "Collecting input",
            Self::Submitted => "Submitted",
            Self::DisplayingResult => "Displaying result",
        }
    }
}

/// One questionnaire round: collect answers, score them exactly once, show
/// the result, reset. A fresh assessment replaces nothing; submitting twice
/// without a reset is an invalid transition.
#[derive(Debug)]
pub struct AssessmentSession {
    state: SessionState,
    result: Option<Assessment>,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            result: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Idle -> CollectingInput.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        match self.state() {
            SessionState::Idle => {
                self.state = SessionState::CollectingInput;
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: "begin",
            }),
        }
    }

    /// CollectingInput -> Submitted. Validates the sheet at the boundary and
    /// invokes the engine exactly once; the result is stored, never
    /// recomputed.
    pub fn submit(&mut self, sheet: AnswerSheet) -> Result<(), SessionError> {
        match self.state() {
            SessionState::CollectingInput => {
                let answers = sheet.validate()?;
                self.result = Some(compute(&answers));
                self.state = SessionState::Submitted;
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: "submit",
            }),
        }
    }

    /// Submitted -> DisplayingResult, handing the stored assessment to the
    /// renderer.
    pub fn present(&mut self) -> Result<&Assessment, SessionError> {
        match self.state() {
            SessionState::Submitted | SessionState::DisplayingResult => {
                self.state = SessionState::DisplayingResult;
                Ok(self
                    .result
                    .as_ref()
                    .expect("submitted session always holds a result"))
            }
            from => Err(SessionError::InvalidTransition {
                from,
                action: "present",
            }),
        }
    }

    /// Any state -> Idle, discarding the previous result.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.result = None;
    }
}

#[derive(Debug, PartialEq)]
pub enum SessionError {
    InvalidTransition {
        from: SessionState,
        action: &'static str,
    },
    Answer(AnswerError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidTransition { from, action } => {
                write!(f, "cannot {} while the session is {}", action, from.label())
            }
            SessionError::Answer(err) => write!(f, "invalid answers: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidTransition { .. } => None,
            SessionError::Answer(err) => Some(err),
        }
    }
}

impl From<AnswerError> for SessionError {
    fn from(value: AnswerError) -> Self {
        Self::Answer(value)
    }
}
