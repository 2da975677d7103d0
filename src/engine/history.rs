//! Accumulated guess rows and what they reveal about the solution

use crate::core::{GuessRow, LetterSet, Status, WORD_LENGTH};
use std::fmt;

/// Ordered sequence of submitted rows
///
/// Rows are complete by construction (see [`GuessRow::from_cells`]), so nothing here
/// can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    rows: Vec<GuessRow>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a row as the latest evidence
    pub fn submit(&mut self, row: GuessRow) {
        self.rows.push(row);
    }

    /// Rows in submission order
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Forget every row
    pub fn reset(&mut self) {
        self.rows.clear();
    }

    /// Remove and return the latest row
    pub fn undo(&mut self) -> Option<GuessRow> {
        self.rows.pop()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GuessRow> {
        self.rows.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Best-known partial solution across all rows
    #[must_use]
    pub fn partial_solution(&self) -> PartialSolution {
        PartialSolution::from_rows(&self.rows)
    }
}

/// Confirmed green letters per position, plus letters known to be wrong at each position
///
/// Later rows overwrite earlier greens at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialSolution {
    greens: [Option<u8>; WORD_LENGTH],
    wrong: [LetterSet; WORD_LENGTH],
}

impl PartialSolution {
    /// Placeholder shown for unsolved positions
    pub const PLACEHOLDER: char = '_';

    #[must_use]
    pub fn from_rows(rows: &[GuessRow]) -> Self {
        let mut partial = Self::default();

        for row in rows {
            for (i, letter, status) in row.graded() {
                match status {
                    Status::Green => partial.greens[i] = Some(letter),
                    Status::Yellow | Status::Gray => partial.wrong[i].insert(letter),
                }
            }
        }

        partial
    }

    /// Confirmed letter at `position`, if any
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Option<u8> {
        self.greens[position]
    }

    /// Positions without a confirmed letter
    pub fn placeholders(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WORD_LENGTH).filter(|&i| self.greens[i].is_none())
    }

    /// Positions with a confirmed letter, paired with that letter
    pub fn confirmed(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.greens
            .iter()
            .enumerate()
            .filter_map(|(i, letter)| letter.map(|l| (i, l)))
    }

    /// Number of positions confirmed as `letter`
    #[must_use]
    pub fn green_count(&self, letter: u8) -> usize {
        self.greens.iter().filter(|&&g| g == Some(letter)).count()
    }

    /// Distinct confirmed letters
    #[must_use]
    pub fn green_letters(&self) -> LetterSet {
        self.greens.iter().flatten().copied().collect()
    }

    /// True if `letter` was graded yellow or gray at `position` in some row
    #[must_use]
    pub const fn is_known_wrong(&self, position: usize, letter: u8) -> bool {
        self.wrong[position].contains(letter)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.greens.iter().all(Option::is_some)
    }
}

impl fmt::Display for PartialSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.greens {
            let ch = slot.map_or(Self::PLACEHOLDER, char::from);
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
