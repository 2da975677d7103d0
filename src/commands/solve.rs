//! Word solving command
//!
//! Plays a known target by always taking the top best suggestion, feeding the session
//! the feedback the puzzle would give.

use crate::core::{GuessRow, Pattern, Word};
use crate::engine::{EngineState, Session};
use crate::wordlists::Dictionary;
use anyhow::{Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Best probe word offered before this guess, if any
    pub probe: Option<String>,
}

/// Solve a specific word against `dictionary`
///
/// # Errors
///
/// Returns an error if the target is not a valid word or not in the dictionary.
pub fn solve_word(config: SolveConfig, dictionary: &Dictionary) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())?;
    if !dictionary.contains(target.text()) {
        bail!("'{target}' is not in the dictionary");
    }

    let guesses = play(&target, dictionary, config.max_guesses);
    let success = guesses.last().is_some_and(|step| step.pattern.is_perfect());

    Ok(SolveResult {
        success,
        guesses,
        target: target.text().to_string(),
    })
}

/// Play `target` to completion, at most `max_guesses` rows
pub(crate) fn play(target: &Word, dictionary: &Dictionary, max_guesses: usize) -> Vec<GuessStep> {
    let mut session = Session::new(dictionary);
    let mut steps = Vec::new();

    while steps.len() < max_guesses && session.state() == EngineState::Collecting {
        let candidates_before = session.candidates().len();
        let probe = session
            .elimination_suggestions()
            .first()
            .map(|w| w.text().to_string());

        let Some(guess) = session.best_suggestions().first().copied() else {
            break;
        };

        let pattern = Pattern::calculate(guess, target);
        if session.submit(GuessRow::from_pattern(guess, pattern)).is_err() {
            break;
        }

        steps.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after: session.candidates().len(),
            probe,
        });
    }

    steps
}
