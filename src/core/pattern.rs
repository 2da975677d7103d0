//! Feedback statuses and full-row feedback patterns
//!
//! A [`Pattern`] is the five statuses the puzzle reports for one guess. Besides parsing
//! player-entered feedback, [`Pattern::calculate`] reproduces the puzzle's grading so that
//! games can be simulated against a known answer.

use super::word::{WORD_LENGTH, Word, letter_index};
use crate::error::EngineError;
use std::fmt;

/// Feedback for a single letter cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Letter absent at this multiplicity
    #[default]
    Gray,
    /// Letter present elsewhere
    Yellow,
    /// Letter in the correct position
    Green,
}

impl Status {
    /// Next status in the click cycle: gray → yellow → green → gray
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Gray => Self::Yellow,
            Self::Yellow => Self::Green,
            Self::Green => Self::Gray,
        }
    }

    /// Parse a status character
    ///
    /// Accepts 'G'/'g'/🟩 for green, 'Y'/'y'/🟨 for yellow and '-'/'_'/'.'/⬜/⬛ for gray.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Gray),
            _ => None,
        }
    }

    /// Emoji square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Gray => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }

    /// Single ASCII character for this status
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Gray => '-',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gray => "gray",
            Self::Yellow => "yellow",
            Self::Green => "green",
        };
        f.write_str(name)
    }
}

/// Feedback pattern for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Status; WORD_LENGTH]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Status::Green; WORD_LENGTH]);

    /// Create a pattern from per-position statuses
    #[must_use]
    pub const fn new(statuses: [Status; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Per-position statuses
    #[must_use]
    pub const fn statuses(&self) -> &[Status; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the feedback the puzzle gives when `guess` is played against `answer`
    ///
    /// Greens are assigned first and consume their letters; yellows are then handed out
    /// left to right while unmatched copies of the letter remain in the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Status::Gray; WORD_LENGTH];
        let mut available = [0u8; 26];

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Status::Green;
            } else {
                available[letter_index(a)] += 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Status::Green {
                continue;
            }
            let slot = &mut available[letter_index(g)];
            if *slot > 0 {
                result[i] = Status::Yellow;
                *slot -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of green cells
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.0.iter().filter(|&&s| s == Status::Green).count()
    }

    /// Count the number of yellow cells
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.0.iter().filter(|&&s| s == Status::Yellow).count()
    }

    /// Convert pattern to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = EngineError;

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LENGTH {
            return Err(EngineError::InvalidInput(format!(
                "feedback must have {WORD_LENGTH} statuses, got {}",
                chars.len()
            )));
        }

        let mut statuses = [Status::Gray; WORD_LENGTH];
        for (slot, ch) in statuses.iter_mut().zip(chars) {
            *slot = Status::from_char(ch).ok_or_else(|| {
                EngineError::InvalidInput(format!("unknown feedback status '{ch}'"))
            })?;
        }

        Ok(Self(statuses))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.to_char())?;
        }
        Ok(())
    }
}
