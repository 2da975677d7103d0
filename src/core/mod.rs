//! Core domain types for the puzzle
//!
//! Words, feedback statuses and guess rows. Everything here is pure data with
//! validation at construction time.

mod feedback;
mod letter_set;
mod pattern;
mod word;

pub use feedback::{CellEvents, DraftRow, GuessRow, LetterCell};
pub use letter_set::LetterSet;
pub use pattern::{Pattern, Status};
pub use word::{WORD_LENGTH, Word, WordError};
pub(crate) use word::letter_index;
