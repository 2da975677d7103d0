//! Guess rows: letters with their feedback statuses
//!
//! [`DraftRow`] is the row a UI edits cell by cell through [`CellEvents`]; once every
//! cell has a letter it is frozen into an immutable [`GuessRow`] for submission.

use super::pattern::{Pattern, Status};
use super::word::{WORD_LENGTH, Word};
use crate::error::EngineError;
use std::fmt;

/// One cell of a guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCell {
    letter: Option<char>,
    status: Status,
    position: usize,
}

impl LetterCell {
    /// An unsubmitted cell with no letter
    #[must_use]
    pub const fn empty(position: usize) -> Self {
        Self {
            letter: None,
            status: Status::Gray,
            position,
        }
    }

    /// A cell holding `letter` with the given status
    #[must_use]
    pub const fn new(position: usize, letter: char, status: Status) -> Self {
        Self {
            letter: Some(letter),
            status,
            position,
        }
    }

    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// A complete, immutable row of five graded letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    letters: [u8; WORD_LENGTH],
    statuses: [Status; WORD_LENGTH],
}

impl GuessRow {
    /// Build a row from five cells, copying them
    ///
    /// # Errors
    /// - `InvalidInput` if there are not exactly five cells, a cell's position does not match
    ///   its index, or a letter is outside `a`-`z`
    /// - `IncompleteRow` if any cell has no letter
    pub fn from_cells(cells: &[LetterCell]) -> Result<Self, EngineError> {
        if cells.len() != WORD_LENGTH {
            return Err(EngineError::InvalidInput(format!(
                "a row needs {WORD_LENGTH} cells, got {}",
                cells.len()
            )));
        }

        let mut letters = [0u8; WORD_LENGTH];
        let mut statuses = [Status::Gray; WORD_LENGTH];

        for (i, cell) in cells.iter().enumerate() {
            if cell.position != i {
                return Err(EngineError::InvalidInput(format!(
                    "cell at index {i} claims position {}",
                    cell.position
                )));
            }
            let letter = cell
                .letter
                .ok_or(EngineError::IncompleteRow { position: i })?;
            if !letter.is_ascii_lowercase() {
                return Err(EngineError::InvalidInput(format!(
                    "letter {letter:?} at position {} is outside a-z",
                    i + 1
                )));
            }
            letters[i] = letter as u8;
            statuses[i] = cell.status;
        }

        Ok(Self { letters, statuses })
    }

    /// Parse a row from the guessed word and its feedback, e.g. `("crane", "G----")`
    ///
    /// Letters are lowercased; `_`, `.` or a space in the word mark an empty cell.
    ///
    /// # Errors
    /// Returns `InvalidInput` for malformed text and `IncompleteRow` for empty cells.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::GuessRow;
    ///
    /// let row = GuessRow::parse("CRANE", "G----").unwrap();
    /// assert_eq!(row.word(), "crane");
    /// assert!(GuessRow::parse("cr_ne", "G----").is_err());
    /// ```
    pub fn parse(word: &str, feedback: &str) -> Result<Self, EngineError> {
        let pattern: Pattern = feedback.parse()?;
        let letters: Vec<char> = word.trim().chars().collect();

        if letters.len() != WORD_LENGTH {
            return Err(EngineError::InvalidInput(format!(
                "guess must have {WORD_LENGTH} letters, got {}",
                letters.len()
            )));
        }

        let cells: Vec<LetterCell> = letters
            .iter()
            .zip(pattern.statuses())
            .enumerate()
            .map(|(i, (&ch, &status))| match ch {
                '_' | '.' | ' ' => Ok(LetterCell::empty(i)),
                c if c.is_ascii_alphabetic() => {
                    Ok(LetterCell::new(i, c.to_ascii_lowercase(), status))
                }
                c => Err(EngineError::InvalidInput(format!(
                    "letter '{c}' at position {} is outside a-z",
                    i + 1
                ))),
            })
            .collect::<Result<_, _>>()?;

        Self::from_cells(&cells)
    }

    /// Row for `word` graded with `pattern`
    #[must_use]
    pub fn from_pattern(word: &Word, pattern: Pattern) -> Self {
        Self {
            letters: *word.chars(),
            statuses: *pattern.statuses(),
        }
    }

    /// The guessed letters as a string
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }

    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        Pattern::new(self.statuses)
    }

    /// The row as cells, with positions
    pub fn cells(&self) -> impl Iterator<Item = LetterCell> + '_ {
        self.letters
            .iter()
            .zip(self.statuses)
            .enumerate()
            .map(|(position, (&letter, status))| LetterCell {
                letter: Some(char::from(letter)),
                status,
                position,
            })
    }

    /// Iterate `(position, letter, status)` triples
    pub fn graded(&self) -> impl Iterator<Item = (usize, u8, Status)> + '_ {
        self.letters
            .iter()
            .zip(self.statuses)
            .enumerate()
            .map(|(i, (&letter, status))| (i, letter, status))
    }

    #[must_use]
    pub fn is_all_green(&self) -> bool {
        self.pattern().is_perfect()
    }
}

impl fmt::Display for GuessRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word(), self.pattern())
    }
}

/// Cell-level editing events a UI raises while the player fills in a row
///
/// The engine never calls these; a UI drives them and submits the finished row.
pub trait CellEvents {
    /// A letter was typed into (`Some`) or erased from (`None`) the cell at `position`
    fn on_cell_edited(&mut self, position: usize, letter: Option<char>);

    /// The player cycled the status of the cell at `position`
    fn on_cell_status_cycled(&mut self, position: usize);
}

/// The editable row a player is currently filling in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRow {
    cells: [LetterCell; WORD_LENGTH],
}

impl Default for DraftRow {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftRow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(LetterCell::empty),
        }
    }

    #[must_use]
    pub const fn cells(&self) -> &[LetterCell; WORD_LENGTH] {
        &self.cells
    }

    /// True when every cell holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.letter.is_some())
    }

    /// Position of the first empty cell, if any
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(|c| c.letter.is_none())
    }

    /// Freeze the draft into a submitted row; the draft itself is left untouched
    ///
    /// # Errors
    /// Returns `IncompleteRow` naming the first empty cell.
    pub fn to_row(&self) -> Result<GuessRow, EngineError> {
        GuessRow::from_cells(&self.cells)
    }

    /// Empty every cell and reset statuses to gray
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl CellEvents for DraftRow {
    fn on_cell_edited(&mut self, position: usize, letter: Option<char>) {
        let Some(cell) = self.cells.get_mut(position) else {
            log::warn!("ignoring edit of cell {position}: out of range");
            return;
        };

        match letter.map(|c| c.to_ascii_lowercase()) {
            Some(c) if c.is_ascii_lowercase() => cell.letter = Some(c),
            Some(c) => log::debug!("ignoring non-letter input {c:?} in cell {position}"),
            None => *cell = LetterCell::empty(position),
        }
    }

    fn on_cell_status_cycled(&mut self, position: usize) {
        if let Some(cell) = self.cells.get_mut(position)
            && cell.letter.is_some()
        {
            cell.status = cell.status.next();
        }
    }
}
