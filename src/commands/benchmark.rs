//! Benchmark command
//!
//! Plays a random sample of dictionary words with the frequency strategy and reports
//! how many rows each took.

use super::solve::play;
use crate::core::Word;
use crate::wordlists::Dictionary;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Benchmark parameters
pub struct BenchmarkConfig {
    pub count: usize,
    pub seed: Option<u64>,
    pub max_guesses: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            max_guesses: 6,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games keyed by number of rows
    pub distribution: FxHashMap<usize, usize>,
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick up to `count` distinct targets, reproducibly when `seed` is given
#[must_use]
pub fn sample_targets<'a>(
    dictionary: &'a Dictionary,
    count: usize,
    seed: Option<u64>,
) -> Vec<&'a Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    dictionary
        .words()
        .choose_multiple(&mut rng, count)
        .collect()
}

/// Run the benchmark
///
/// Games are independent and played in parallel.
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid.
pub fn run_benchmark(dictionary: &Dictionary, config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    let targets = sample_targets(dictionary, config.count, config.seed);

    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message("playing");

    let start = Instant::now();

    let outcomes: Vec<(&Word, Option<usize>)> = targets
        .par_iter()
        .map(|&target| {
            let steps = play(target, dictionary, config.max_guesses);
            let solved = steps
                .last()
                .is_some_and(|step| step.pattern.is_perfect())
                .then_some(steps.len());
            pb.inc(1);
            (target, solved)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();
    for (target, solved) in &outcomes {
        match solved {
            Some(rows) => *distribution.entry(*rows).or_insert(0) += 1,
            None => failures.push(target.text().to_string()),
        }
    }

    let solved = outcomes.len() - failures.len();
    let total_guesses: usize = distribution.iter().map(|(rows, n)| rows * n).sum();
    let total_words = outcomes.len();

    log::debug!("benchmark: {solved}/{total_words} solved in {duration:?}");

    Ok(BenchmarkResult {
        total_words,
        solved,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: distribution.keys().copied().min().unwrap_or(0),
        max_guesses: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
