//! Elimination scorer: probe words that split the remaining candidates
//!
//! Probe words come from the whole dictionary and need not be possible answers. A word
//! scores by how many still-undecided letters it tests and where it tests them.

use super::history::PartialSolution;
use crate::core::{LetterSet, WORD_LENGTH, Word};
use rayon::prelude::*;

/// Contains a probe letter anywhere
const CONTAINS_PROBE: usize = 2;
/// Probe letter at an unsolved position
const PROBE_AT_PLACEHOLDER: usize = 3;
/// Probe letter at an already solved position
const PROBE_AT_GREEN: usize = 1;
/// Tests one more copy of a green letter than currently confirmed
const EXTRA_GREEN_COPY: usize = 4;

/// Letters that could still resolve an unsolved position
///
/// Every letter found at a placeholder position in some candidate, minus letters that
/// occupy the same position in every candidate (those do not discriminate).
#[must_use]
pub fn probe_letters(partial: &PartialSolution, candidates: &[&Word]) -> LetterSet {
    let mut probes = LetterSet::EMPTY;

    for position in partial.placeholders() {
        for word in candidates {
            probes.insert(word.char_at(position));
        }
    }

    if let Some((first, rest)) = candidates.split_first() {
        for position in 0..WORD_LENGTH {
            let letter = first.char_at(position);
            if rest.iter().all(|w| w.char_at(position) == letter) {
                probes.remove(letter);
            }
        }
    }

    probes
}

/// Elimination score of `word`, or `None` when the word is discarded
///
/// A word is discarded when it scores nothing, or when it puts a confirmed green letter
/// at an unsolved position where that letter is already known to be wrong.
#[must_use]
pub fn score_probe(word: &Word, partial: &PartialSolution, probes: LetterSet) -> Option<usize> {
    let greens = partial.green_letters();

    let misplaces_green = partial.placeholders().any(|i| {
        let letter = word.char_at(i);
        greens.contains(letter) && partial.is_known_wrong(i, letter)
    });
    if misplaces_green {
        return None;
    }

    let mut score = probes.iter().filter(|&l| word.has_letter(l)).count() * CONTAINS_PROBE;

    score += partial
        .placeholders()
        .filter(|&i| probes.contains(word.char_at(i)))
        .count()
        * PROBE_AT_PLACEHOLDER;

    score += partial
        .confirmed()
        .filter(|&(i, _)| probes.contains(word.char_at(i)))
        .count()
        * PROBE_AT_GREEN;

    score += greens
        .iter()
        .filter(|&l| probes.contains(l) && word.count_of(l) > partial.green_count(l))
        .count()
        * EXTRA_GREEN_COPY;

    (score > 0).then_some(score)
}

/// Rank every dictionary word by elimination score, best first
///
/// Scoring runs in parallel over a read-only dictionary; results are gathered in
/// dictionary order and then stably sorted, so equal scores keep dictionary order.
#[must_use]
pub fn rank_probes<'a>(
    dictionary: &'a [Word],
    candidates: &[&Word],
    partial: &PartialSolution,
) -> Vec<&'a Word> {
    let probes = probe_letters(partial, candidates);
    if probes.is_empty() {
        return Vec::new();
    }
    log::debug!("probing letters {probes} against partial solution {partial}");

    let mut scored: Vec<(&'a Word, usize)> = dictionary
        .par_iter()
        .filter_map(|word| score_probe(word, partial, probes).map(|score| (word, score)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored.into_iter().map(|(word, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessRow;
    use crate::engine::history::History;
    use crate::wordlists::loader::words_from_slice;

    fn partial(rows: &[(&str, &str)]) -> PartialSolution {
        let mut history = History::new();
        for (word, feedback) in rows {
            history.submit(GuessRow::parse(word, feedback).unwrap());
        }
        history.partial_solution()
    }

    #[test]
    fn probe_letters_skip_shared_positions() {
        let candidates = words_from_slice(&["batch", "catch", "match", "watch"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let partial = partial(&[("latch", "-GGGG")]);

        // b, c, m, w vary at position 0, but 'c' sits at position 3 in every candidate
        assert_eq!(probe_letters(&partial, &refs).to_string(), "bmw");
    }

    #[test]
    fn probe_letters_empty_when_solved() {
        let candidates = words_from_slice(&["latch"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let partial = partial(&[("latch", "GGGGG")]);

        assert!(probe_letters(&partial, &refs).is_empty());
    }

    #[test]
    fn score_rewards_probe_letters_and_placement() {
        let partial = partial(&[("latch", "-GGGG")]);
        let probes: LetterSet = b"bmw".iter().copied().collect();
        let word = |w: &str| Word::new(w).unwrap();

        // 'm' and 'b' contained (+2 each), 'm' at the open position (+3),
        // 'm' and 'b' at solved positions (+1 each)
        assert_eq!(
            score_probe(&word("mambo"), &partial, probes),
            Some(2 + 2 + 3 + 1 + 1)
        );
        // 'w' contained (+2) and at a solved position (+1)
        assert_eq!(score_probe(&word("sowed"), &partial, probes), Some(2 + 1));
        // Nothing to test
        assert_eq!(score_probe(&word("latch"), &partial, probes), None);
    }

    #[test]
    fn score_rewards_extra_green_copy_and_probe_on_green() {
        // 'e' green at 0, open positions 1..4
        let partial = partial(&[("eerie", "G----")]);
        let probes: LetterSet = b"ex".iter().copied().collect();

        // e contained (+2), x contained (+2), x at open 1 (+3), e at open 2 (+3),
        // e at green 0 (+1), two e's > one green e (+4)
        let exert = Word::new("exert").unwrap();
        assert_eq!(score_probe(&exert, &partial, probes), Some(2 + 2 + 3 + 3 + 1 + 4));
    }

    #[test]
    fn discards_green_letter_at_known_wrong_position() {
        // 'e' green at 0 and gray at 1 and 4
        let partial = partial(&[("eerie", "G----")]);
        let probes: LetterSet = b"lt".iter().copied().collect();

        let melee = Word::new("melee").unwrap();
        assert_eq!(score_probe(&melee, &partial, probes), None);

        let tilts = Word::new("tilts").unwrap();
        assert!(score_probe(&tilts, &partial, probes).is_some());
    }

    #[test]
    fn rank_probes_orders_by_score_then_dictionary() {
        let dictionary =
            words_from_slice(&["sowed", "mumbo", "mambo", "bawdy", "latch", "wombs"]);
        let candidates = words_from_slice(&["batch", "catch", "match", "watch"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let partial = partial(&[("latch", "-GGGG")]);

        let ranked: Vec<&str> = rank_probes(&dictionary, &refs, &partial)
            .into_iter()
            .map(Word::text)
            .collect();

        // probes b, m, w
        // wombs: 6 + 3 + 2 = 11; mumbo and mambo: 4 + 3 + 2 = 9; bawdy: 4 + 3 + 1 = 8
        // sowed: 2 + 1 = 3; latch tests nothing and is dropped
        assert_eq!(ranked, vec!["wombs", "mumbo", "mambo", "bawdy", "sowed"]);
    }

    #[test]
    fn no_candidates_means_no_probes() {
        let dictionary = words_from_slice(&["crane", "slate"]);
        let partial = partial(&[("crane", "G----")]);
        assert!(rank_probes(&dictionary, &[], &partial).is_empty());
    }
}
