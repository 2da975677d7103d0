//! Engine error taxonomy

use crate::core::WordError;
use crate::engine::EngineState;
use std::fmt;

/// Errors raised at the engine's call boundary
///
/// An empty candidate set is not an error: it is reported as [`EngineState::Exhausted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A row was submitted while the cell at `position` had no letter
    IncompleteRow { position: usize },
    /// Malformed input from the integration layer (bad length, status or letter)
    InvalidInput(String),
    /// A row was submitted after the session reached a terminal state
    SessionFinished(EngineState),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteRow { position } => {
                write!(f, "Please complete all letters (cell {} is empty)", position + 1)
            }
            Self::InvalidInput(reason) => write!(f, "Invalid input: {reason}"),
            Self::SessionFinished(state) => {
                write!(f, "Session is {state}; reset before submitting another row")
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl From<WordError> for EngineError {
    fn from(err: WordError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_row_message_is_one_based() {
        let err = EngineError::IncompleteRow { position: 0 };
        assert_eq!(err.to_string(), "Please complete all letters (cell 1 is empty)");
    }

    #[test]
    fn word_error_becomes_invalid_input() {
        let err: EngineError = WordError::InvalidLength(3).into();
        assert!(matches!(err, EngineError::InvalidInput(ref msg) if msg.contains("got 3")));
    }

    #[test]
    fn session_finished_names_state() {
        let err = EngineError::SessionFinished(EngineState::Solved);
        assert!(err.to_string().contains("solved"));
    }
}
