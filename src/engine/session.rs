//! Hint session: the engine's call boundary
//!
//! A session owns the history for one puzzle and recomputes the candidate set from
//! scratch on every change. Scoring is pure and done on demand.

use super::elimination::rank_probes;
use super::filter::filter_candidates;
use super::frequency::rank_by_frequency;
use super::history::{History, PartialSolution};
use crate::core::{GuessRow, LetterCell, Word};
use crate::error::EngineError;
use crate::wordlists::Dictionary;
use rustc_hash::FxHashSet;
use std::fmt;

/// Fewer candidates than this and probe words are not worth computing
pub const ELIMINATION_THRESHOLD: usize = 3;

/// Where the session stands after the latest submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineState {
    /// Still narrowing down
    #[default]
    Collecting,
    /// The latest row was all green
    Solved,
    /// No dictionary word satisfies the accumulated feedback
    Exhausted,
}

impl EngineState {
    /// True for states that only a reset (or undo) can leave
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Collecting => "collecting",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// One puzzle's worth of feedback over a fixed dictionary
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    history: History,
    candidates: Vec<&'a Word>,
    state: EngineState,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            history: History::new(),
            candidates: dictionary.words().iter().collect(),
            state: EngineState::Collecting,
        }
    }

    /// Submit five cells as the next row
    ///
    /// # Errors
    /// - `IncompleteRow` if a cell is empty
    /// - `InvalidInput` for malformed cells
    /// - `SessionFinished` if the session is already solved or exhausted
    pub fn submit_row(&mut self, cells: &[LetterCell]) -> Result<EngineState, EngineError> {
        let row = GuessRow::from_cells(cells)?;
        self.submit(row)
    }

    /// Submit an already built row
    ///
    /// # Errors
    /// Returns `SessionFinished` if the session is already solved or exhausted.
    pub fn submit(&mut self, row: GuessRow) -> Result<EngineState, EngineError> {
        if self.state.is_terminal() {
            return Err(EngineError::SessionFinished(self.state));
        }

        let before = self.candidates.len();
        log::debug!("row {}: {row}", self.history.len() + 1);
        self.history.submit(row);
        self.recompute();
        log::debug!(
            "candidates {before} -> {} ({})",
            self.candidates.len(),
            self.state
        );

        Ok(self.state)
    }

    /// Drop the latest row and return it, reopening a finished session
    pub fn undo(&mut self) -> Option<GuessRow> {
        let row = self.history.undo()?;
        self.recompute();
        log::debug!("undid {row}; {} candidates", self.candidates.len());
        Some(row)
    }

    /// Clear the history and return to `Collecting`
    pub fn reset(&mut self) {
        self.history.reset();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.candidates = filter_candidates(self.dictionary.words(), &self.history);
        self.state = if self.history.last().is_some_and(GuessRow::is_all_green) {
            EngineState::Solved
        } else if self.candidates.is_empty() {
            EngineState::Exhausted
        } else {
            EngineState::Collecting
        };
    }

    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Words still consistent with every row, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// Candidate set keyed by text, for membership tests
    #[must_use]
    pub fn candidate_set(&self) -> FxHashSet<&'a str> {
        self.candidates.iter().map(|w| w.text()).collect()
    }

    /// Best-known partial solution from the history
    #[must_use]
    pub fn partial_solution(&self) -> PartialSolution {
        self.history.partial_solution()
    }

    /// Candidates ranked by frequency score, best first
    #[must_use]
    pub fn best_suggestions(&self) -> Vec<&'a Word> {
        rank_by_frequency(&self.candidates)
    }

    /// Dictionary words ranked by how well they split the candidates
    ///
    /// Empty before the first row, once the session is finished, and when fewer than
    /// [`ELIMINATION_THRESHOLD`] candidates remain.
    #[must_use]
    pub fn elimination_suggestions(&self) -> Vec<&'a Word> {
        if self.history.is_empty()
            || self.state != EngineState::Collecting
            || self.candidates.len() < ELIMINATION_THRESHOLD
        {
            return Vec::new();
        }

        rank_probes(
            self.dictionary.words(),
            &self.candidates,
            &self.partial_solution(),
        )
    }
}
