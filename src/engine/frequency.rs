//! Frequency scorer: rank remaining candidates by positional letter frequency
//!
//! A word earns, for each distinct letter it contains, the number of candidates that
//! share that letter at one of the word's positions. Repeated letters count once so
//! that words with doubled common letters are not favoured over words that test
//! more distinct letters.

use crate::core::{WORD_LENGTH, Word, letter_index};

/// Count of candidates having each letter at each position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [[usize; WORD_LENGTH]; 26],
}

impl FrequencyTable {
    #[must_use]
    pub fn from_words(words: &[&Word]) -> Self {
        let mut counts = [[0; WORD_LENGTH]; 26];
        for word in words {
            for (i, &letter) in word.chars().iter().enumerate() {
                counts[letter_index(letter)][i] += 1;
            }
        }
        Self { counts }
    }

    /// Number of words with `letter` at `position`
    #[must_use]
    pub const fn count(&self, letter: u8, position: usize) -> usize {
        self.counts[letter_index(letter)][position]
    }

    /// Score of `word`: one term per distinct letter, taken at the letter's best position
    #[must_use]
    pub fn score(&self, word: &Word) -> usize {
        word.distinct_letters()
            .into_iter()
            .map(|letter| {
                word.chars()
                    .iter()
                    .enumerate()
                    .filter(|&(_, &l)| l == letter)
                    .map(|(i, _)| self.count(letter, i))
                    .max()
                    .unwrap_or(0)
            })
            .sum()
    }
}

/// Rank `candidates` by descending frequency score
///
/// Ties keep their input order (dictionary order).
#[must_use]
pub fn rank_by_frequency<'a>(candidates: &[&'a Word]) -> Vec<&'a Word> {
    let table = FrequencyTable::from_words(candidates);

    let mut scored: Vec<(&'a Word, usize)> = candidates
        .iter()
        .map(|&word| (word, table.score(word)))
        .collect();

    // Stable sort keeps dictionary order among equal scores
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored.into_iter().map(|(word, _)| word).collect()
}
