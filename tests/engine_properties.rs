//! Engine properties checked against the embedded dictionary
//!
//! Rows are generated with `Pattern::calculate`, so every row is the feedback the
//! puzzle would really give.

use wordle_hints::commands::sample_targets;
use wordle_hints::core::{GuessRow, Pattern, Word};
use wordle_hints::engine::{EngineState, Session};
use wordle_hints::wordlists::Dictionary;

fn row(word: &str, feedback: &str) -> GuessRow {
    GuessRow::parse(word, feedback).unwrap()
}

fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
    words.iter().map(|w| w.text()).collect()
}

/// Truthful row for `guess` against `answer`
fn graded(guess: &Word, answer: &Word) -> GuessRow {
    GuessRow::from_pattern(guess, Pattern::calculate(guess, answer))
}

#[test]
fn candidates_shrink_and_keep_the_answer() {
    let dict = Dictionary::embedded();
    let targets = sample_targets(&dict, 40, Some(2024));
    let guesses = sample_targets(&dict, 5, Some(99));

    for target in targets {
        let mut session = Session::new(&dict);
        let mut previous = session.candidate_set();

        for &guess in &guesses {
            if session.state() != EngineState::Collecting {
                break;
            }
            session.submit(graded(guess, target)).unwrap();

            let current = session.candidate_set();
            assert!(
                current.is_subset(&previous),
                "candidates grew after {guess} for {target}"
            );
            assert!(
                current.contains(target.text()),
                "{target} wrongly excluded after {}",
                session.history().last().unwrap()
            );
            previous = current;
        }

        assert_ne!(session.state(), EngineState::Exhausted);
    }
}

#[test]
fn following_best_suggestions_keeps_the_answer() {
    let dict = Dictionary::embedded();

    for target in sample_targets(&dict, 25, Some(7)) {
        let mut session = Session::new(&dict);

        while session.state() == EngineState::Collecting {
            let guess = session.best_suggestions()[0];
            session.submit(graded(guess, target)).unwrap();
            assert!(session.candidate_set().contains(target.text()));
        }

        assert_eq!(session.state(), EngineState::Solved);
    }
}

#[test]
fn doubled_letter_graded_across_rows_never_readmits() {
    let dict = Dictionary::from_strs(&["bless", "guest"]);
    let answer = Word::new("guest").unwrap();
    let mut session = Session::new(&dict);

    for guess in ["sassy", "shark"] {
        let before = session.candidate_set();
        session.submit(graded(&Word::new(guess).unwrap(), &answer)).unwrap();
        let after = session.candidate_set();

        assert!(after.is_subset(&before), "{guess} re-admitted {after:?}");
        assert!(after.contains("guest"));
    }
    assert_eq!(texts(session.candidates()), vec!["guest"]);
}

#[test]
fn green_yellow_and_gray_of_one_letter_keep_the_answer() {
    let dict = Dictionary::from_strs(&["sheep", "steep", "sleep", "cheek", "geese"]);
    let answer = Word::new("sheep").unwrap();
    let guess = Word::new("geese").unwrap();

    let row = graded(&guess, &answer);
    assert_eq!(row.pattern().to_string(), "-YGY-");

    let mut session = Session::new(&dict);
    session.submit(row).unwrap();
    assert!(session.candidate_set().contains("sheep"));
    assert!(!session.candidate_set().contains("geese"));
}

#[test]
fn repeated_letter_guesses_shrink_and_keep_the_answer() {
    let dict = Dictionary::embedded();
    let doubled: Vec<&Word> = dict
        .words()
        .iter()
        .filter(|w| w.distinct_letters().len() < 4)
        .take(8)
        .collect();
    assert!(doubled.len() >= 4);

    for target in sample_targets(&dict, 60, Some(11)) {
        let mut session = Session::new(&dict);
        let mut previous = session.candidate_set();

        for &guess in &doubled {
            if session.state() != EngineState::Collecting {
                break;
            }
            session.submit(graded(guess, target)).unwrap();

            let current = session.candidate_set();
            assert!(current.is_subset(&previous), "{guess} re-admitted words for {target}");
            assert!(current.contains(target.text()), "{target} lost after {guess}");
            previous = current;
        }
    }
}

#[test]
fn all_green_row_solves_whatever_the_candidates() {
    let dict = Dictionary::embedded();
    let mut session = Session::new(&dict);

    session.submit(row("crane", "-----")).unwrap();
    // Contradicts the first row, so no candidate survives
    assert_eq!(session.submit(row("crane", "GGGGG")), Ok(EngineState::Solved));
    assert!(session.candidates().is_empty());
}

#[test]
fn empty_candidates_mean_exhausted_and_no_suggestions() {
    let dict = Dictionary::embedded();
    let mut session = Session::new(&dict);

    session.submit(row("crane", "G----")).unwrap();
    assert_eq!(session.submit(row("cloth", "Y----")), Ok(EngineState::Exhausted));
    assert!(session.candidates().is_empty());
    assert!(session.best_suggestions().is_empty());
    assert!(session.elimination_suggestions().is_empty());
}

#[test]
fn frequency_ranking_is_deterministic() {
    let dict = Dictionary::embedded();
    let mut a = Session::new(&dict);
    let mut b = Session::new(&dict);
    a.submit(row("slate", "---Y-")).unwrap();
    b.submit(row("slate", "---Y-")).unwrap();

    assert_eq!(texts(&a.best_suggestions()), texts(&a.best_suggestions()));
    assert_eq!(texts(&a.best_suggestions()), texts(&b.best_suggestions()));
    assert_eq!(
        texts(&a.elimination_suggestions()),
        texts(&b.elimination_suggestions())
    );
}

#[test]
fn toy_dictionary_crane_scenario() {
    let dict = Dictionary::from_strs(&["crane", "trace", "react", "slate"]);
    let mut session = Session::new(&dict);

    assert_eq!(session.submit(row("crane", "G----")), Ok(EngineState::Exhausted));
    assert!(session.candidates().is_empty());
}

#[test]
fn crane_green_c_over_embedded_dictionary() {
    let dict = Dictionary::embedded();
    let mut session = Session::new(&dict);
    session.submit(row("crane", "G----")).unwrap();

    let candidates = texts(session.candidates());
    assert!(candidates.contains(&"child"));
    for word in candidates {
        assert!(word.starts_with('c'), "{word}");
        assert!(!word.contains(['r', 'a', 'n', 'e']), "{word}");
    }
}

#[test]
fn doubled_letter_keeps_exactly_one_copy() {
    let dict = Dictionary::embedded();
    let mut session = Session::new(&dict);
    session.submit(row("eerie", "G----")).unwrap();

    let candidates = texts(session.candidates());
    assert!(candidates.contains(&"empty"));
    assert!(!candidates.contains(&"eaten"));
    for word in candidates {
        assert!(word.starts_with('e'), "{word}");
        assert_eq!(word.matches('e').count(), 1, "{word}");
    }
}

#[test]
fn empty_history_offers_the_whole_dictionary_and_no_probes() {
    let dict = Dictionary::embedded();
    let session = Session::new(&dict);

    assert_eq!(session.candidates().len(), dict.len());
    assert!(session.elimination_suggestions().is_empty());
    assert_eq!(session.partial_solution().to_string(), "_____");
}

#[test]
fn elimination_words_come_from_the_whole_dictionary() {
    let dict = Dictionary::embedded();
    let mut session = Session::new(&dict);
    session.submit(row("crate", "--GGG")).unwrap();

    assert_eq!(texts(session.candidates()), vec!["slate", "plate", "state"]);
    assert_eq!(session.partial_solution().to_string(), "__ate");

    let candidates = session.candidate_set();
    let probes = session.elimination_suggestions();
    assert!(!probes.is_empty());
    assert!(probes.iter().any(|w| !candidates.contains(w.text())));
}
