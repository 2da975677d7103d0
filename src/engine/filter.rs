//! Constraint filter: which dictionary words are consistent with the history
//!
//! Row-local checks (green, yellow, gray at a position) are combined with a letter-count
//! rule built from the whole history. A gray in a row means the answer holds exactly as
//! many copies of that letter as the same row graded green or yellow, so each such row
//! bounds the count and the tightest bound wins. A bound of zero excludes the letter.

use super::history::History;
use crate::core::{LetterSet, Status, WORD_LENGTH, Word, letter_index};
use rayon::prelude::*;
use std::fmt;

/// Evidence about one letter gathered over every row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LetterEvidence {
    ever_green: bool,
    /// Smallest green + yellow count among rows that also graded the letter gray
    row_cap: Option<usize>,
}

/// How many copies of a letter a surviving word may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LetterLimit {
    Unbounded,
    Excluded,
    AtMost(usize),
}

/// Why a word was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    GreenMismatch { position: usize, letter: u8 },
    YellowMissing { letter: u8 },
    YellowInPlace { position: usize, letter: u8 },
    GrayInPlace { position: usize, letter: u8 },
    ExcludedLetter { letter: u8 },
    TooManyCopies { letter: u8, cap: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::GreenMismatch { position, letter } => write!(
                f,
                "green '{}' not at position {}",
                char::from(letter),
                position + 1
            ),
            Self::YellowMissing { letter } => {
                write!(f, "yellow '{}' missing", char::from(letter))
            }
            Self::YellowInPlace { position, letter } => write!(
                f,
                "yellow '{}' still at position {}",
                char::from(letter),
                position + 1
            ),
            Self::GrayInPlace { position, letter } => write!(
                f,
                "gray '{}' at forbidden position {}",
                char::from(letter),
                position + 1
            ),
            Self::ExcludedLetter { letter } => {
                write!(f, "contains excluded letter '{}'", char::from(letter))
            }
            Self::TooManyCopies { letter, cap } => {
                write!(f, "more than {cap} copies of '{}'", char::from(letter))
            }
        }
    }
}

/// Constraints derived from a history, ready to test words against
#[derive(Debug, Clone)]
pub struct Constraints {
    greens: Vec<(usize, u8)>,
    yellows: Vec<(usize, u8)>,
    grays: Vec<(usize, u8)>,
    limits: [LetterLimit; 26],
}

impl Constraints {
    #[must_use]
    pub fn from_history(history: &History) -> Self {
        let mut greens = Vec::new();
        let mut yellows = Vec::new();
        let mut grays = Vec::new();
        let mut evidence = [LetterEvidence::default(); 26];

        for row in history.rows() {
            let mut marked = [0usize; 26];
            let mut grayed = [false; 26];

            for (i, letter, status) in row.graded() {
                let idx = letter_index(letter);
                match status {
                    Status::Green => {
                        evidence[idx].ever_green = true;
                        marked[idx] += 1;
                        greens.push((i, letter));
                    }
                    Status::Yellow => {
                        marked[idx] += 1;
                        yellows.push((i, letter));
                    }
                    Status::Gray => {
                        grayed[idx] = true;
                        grays.push((i, letter));
                    }
                }
            }

            for (entry, (&count, &gray)) in evidence.iter_mut().zip(marked.iter().zip(&grayed)) {
                if gray {
                    entry.row_cap = Some(entry.row_cap.map_or(count, |cap| cap.min(count)));
                }
            }
        }

        let limits = evidence.map(|e| match e.row_cap {
            None => LetterLimit::Unbounded,
            Some(0) => LetterLimit::Excluded,
            Some(_) if !e.ever_green => LetterLimit::Unbounded,
            Some(cap) => LetterLimit::AtMost(cap),
        });

        Self {
            greens,
            yellows,
            grays,
            limits,
        }
    }

    /// Letters no surviving word may contain
    #[must_use]
    pub fn excluded_letters(&self) -> LetterSet {
        (b'a'..=b'z')
            .filter(|&l| self.limits[letter_index(l)] == LetterLimit::Excluded)
            .collect()
    }

    /// First rule `word` breaks, or `None` if it is consistent with the history
    #[must_use]
    pub fn rejection(&self, word: &Word) -> Option<Rejection> {
        let chars = word.chars();

        for &(position, letter) in &self.greens {
            if chars[position] != letter {
                return Some(Rejection::GreenMismatch { position, letter });
            }
        }

        for &(position, letter) in &self.yellows {
            if !word.has_letter(letter) {
                return Some(Rejection::YellowMissing { letter });
            }
            if chars[position] == letter {
                return Some(Rejection::YellowInPlace { position, letter });
            }
        }

        for &(position, letter) in &self.grays {
            if chars[position] == letter {
                return Some(Rejection::GrayInPlace { position, letter });
            }
        }

        for letter in word.distinct_letters() {
            match self.limits[letter_index(letter)] {
                LetterLimit::Unbounded => {}
                LetterLimit::Excluded => return Some(Rejection::ExcludedLetter { letter }),
                LetterLimit::AtMost(cap) => {
                    if word.count_of(letter) > cap {
                        return Some(Rejection::TooManyCopies { letter, cap });
                    }
                }
            }
        }

        None
    }

    /// True if `word` is consistent with every row
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.rejection(word).is_none()
    }
}

/// Reduce `dictionary` to the words consistent with every row of `history`
///
/// Output keeps dictionary order. An empty history admits every word.
#[must_use]
pub fn filter_candidates<'a>(dictionary: &'a [Word], history: &History) -> Vec<&'a Word> {
    if history.is_empty() {
        return dictionary.iter().collect();
    }

    let constraints = Constraints::from_history(history);

    dictionary
        .par_iter()
        .filter(|word| match constraints.rejection(word) {
            Some(reason) => {
                log::trace!("excluding {word}: {reason}");
                false
            }
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessRow;
    use crate::wordlists::loader::words_from_slice;

    fn history(rows: &[(&str, &str)]) -> History {
        let mut history = History::new();
        for (word, feedback) in rows {
            history.submit(GuessRow::parse(word, feedback).unwrap());
        }
        history
    }

    fn surviving(words: &[&str], rows: &[(&str, &str)]) -> Vec<String> {
        let dictionary = words_from_slice(words);
        filter_candidates(&dictionary, &history(rows))
            .into_iter()
            .map(|w| w.text().to_string())
            .collect()
    }

    #[test]
    fn empty_history_keeps_everything() {
        let words = ["crane", "trace", "react", "slate"];
        assert_eq!(surviving(&words, &[]), words);
    }

    #[test]
    fn green_then_grays_leaves_nothing_from_toy_dictionary() {
        // Every other toy word contains one of r, a, n, e
        let words = ["crane", "trace", "react", "slate"];
        assert!(surviving(&words, &[("crane", "G----")]).is_empty());
    }

    #[test]
    fn green_and_gray_select_matching_words() {
        let words = ["crane", "chose", "clout", "comic", "trace"];
        assert_eq!(
            surviving(&words, &[("crane", "G----")]),
            vec!["clout", "comic"]
        );
    }

    #[test]
    fn yellow_requires_letter_elsewhere() {
        let words = ["crane", "react", "trace", "slate", "about"];
        // 'r' yellow at position 1; 'c', 'a', 'n', 'e' gray
        assert_eq!(surviving(&words, &[("crane", "-Y---")]), Vec::<String>::new());
        // 'a' yellow at 2, 'e' green at 4
        assert_eq!(
            surviving(&["slate", "crane", "abide", "arise"], &[("glaze", "--Y-G")]),
            vec!["abide", "arise"]
        );
    }

    #[test]
    fn gray_duplicate_caps_count_instead_of_excluding() {
        // One 'e' green, the other two gray: exactly one 'e', at position 0
        let words = ["eerie", "elder", "ethos", "enemy", "epoch", "exert"];
        assert_eq!(
            surviving(&words, &[("eerie", "G----")]),
            vec!["ethos", "epoch"]
        );
    }

    #[test]
    fn gray_letter_graded_yellow_elsewhere_is_not_excluded() {
        let words = ["posit", "music", "moist"];
        // 's' green once and gray twice in the second row: exactly one 's', at position 3
        assert_eq!(
            surviving(&words, &[("shark", "Y----"), ("sassy", "---G-")]),
            vec!["moist"]
        );
        // 's' yellow twice and gray once, never green: count is unbounded
        assert_eq!(
            surviving(&words, &[("shark", "Y----"), ("glass", "----Y")]),
            vec!["posit", "music"]
        );
    }

    #[test]
    fn yellow_in_later_row_does_not_raise_earlier_cap() {
        // Truthful rows for "guest": the yellow 's' is the same copy as the green one
        let words = ["bless", "guest"];
        let capped = surviving(&words, &[("sassy", "---G-")]);
        assert_eq!(capped, vec!["guest"]);
        assert_eq!(
            surviving(&words, &[("sassy", "---G-"), ("shark", "Y----")]),
            capped
        );
    }

    #[test]
    fn tightest_row_cap_wins() {
        let constraints =
            Constraints::from_history(&history(&[("sassy", "Y--G-"), ("sassy", "---G-")]));
        let word = |w: &str| Word::new(w).unwrap();

        assert_eq!(
            constraints.rejection(&word("bless")),
            Some(Rejection::TooManyCopies { letter: b's', cap: 1 })
        );
        assert!(constraints.admits(&word("guest")));
    }

    #[test]
    fn green_yellow_and_gray_in_one_row_keep_the_answer() {
        // geese against "sheep": e green at 2, yellow at 1, gray at 4
        let words = ["sheep", "cheek", "steep", "sleep", "eerie"];
        assert_eq!(
            surviving(&words, &[("geese", "-YGY-")]),
            vec!["sheep", "steep", "sleep"]
        );
    }

    #[test]
    fn gray_forbids_exact_position_even_when_letter_allowed() {
        // 'e' green at 4, gray at 0 and 1: words with 'e' up front are out
        let words = ["eagle", "abode", "shone"];
        assert_eq!(
            surviving(&words, &[("eerie", "----G")]),
            vec!["abode", "shone"]
        );
    }

    #[test]
    fn rejection_reasons() {
        let constraints = Constraints::from_history(&history(&[("eerie", "G-Y--")]));
        let word = |w: &str| Word::new(w).unwrap();

        assert_eq!(
            constraints.rejection(&word("crane")),
            Some(Rejection::GreenMismatch {
                position: 0,
                letter: b'e'
            })
        );
        assert_eq!(
            constraints.rejection(&word("ethos")),
            Some(Rejection::YellowMissing { letter: b'r' })
        );
        assert_eq!(
            constraints.rejection(&word("error")),
            Some(Rejection::YellowInPlace {
                position: 2,
                letter: b'r'
            })
        );
        assert_eq!(
            constraints.rejection(&word("emery")),
            Some(Rejection::TooManyCopies { letter: b'e', cap: 1 })
        );
        assert!(constraints.admits(&word("extra")));
        assert_eq!(constraints.excluded_letters().to_string(), "i");
    }
}
