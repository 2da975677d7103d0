//! Display functions for sessions and command results

use super::formatters::{colored_row, create_progress_bar, numbered_list};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::Word;
use crate::engine::{Constraints, Session};
use colored::Colorize;

/// Longest list shown when suggestions are expanded
pub const EXPANDED_SUGGESTIONS: usize = 21;

/// Candidate lists at or below this size are printed in full
const SHOW_CANDIDATES_BELOW: usize = 10;

fn texts(words: &[&Word], limit: usize) -> Vec<String> {
    words.iter().take(limit).map(|w| w.text().to_string()).collect()
}

/// Print the current hints: history, partial solution and both suggestion lists
pub fn print_hints(session: &Session<'_>, top: usize) {
    let candidates = session.candidates();
    let rows = session.history().rows();

    println!("{}", "─".repeat(60).cyan());
    for row in rows {
        println!("  {}", colored_row(row));
    }
    println!(
        "Known: {}   {} of {} words remain",
        session.partial_solution().to_string().bright_yellow().bold(),
        candidates.len().to_string().bright_cyan(),
        session.dictionary().len()
    );

    if !rows.is_empty() {
        let excluded = Constraints::from_history(session.history()).excluded_letters();
        if !excluded.is_empty() {
            println!("Ruled out: {}", excluded.to_string().to_uppercase().bright_black());
        }
    }

    let best = session.best_suggestions();
    if !best.is_empty() {
        let more = best.len().saturating_sub(top);
        let suffix = if more > 0 {
            format!(" (+{more} more)").bright_black().to_string()
        } else {
            String::new()
        };
        println!(
            "\n💡 {} {}{suffix}",
            "Best guesses:".green().bold(),
            numbered_list(&texts(&best, top))
        );
    }

    let probes = session.elimination_suggestions();
    if !probes.is_empty() {
        println!(
            "🔍 {} {}",
            "Probe words: ".yellow().bold(),
            numbered_list(&texts(&probes, top))
        );
    }

    if !rows.is_empty() && (2..=SHOW_CANDIDATES_BELOW).contains(&candidates.len()) {
        println!("\nRemaining candidates:");
        for candidate in candidates {
            println!("  • {}", candidate.text().to_uppercase());
        }
    }
    println!();
}

/// Print the victory banner with the number of attempts
pub fn print_victory(session: &Session<'_>) {
    let attempts = session.history().len();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "       🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉"
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "attempt" } else { "attempts" }
    );

    println!("\n  Guess history:");
    for (i, row) in session.history().rows().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            row.word().to_uppercase().bright_white().bold(),
            row.pattern().to_emoji()
        );
    }
    println!();
}

/// Print the result of a letter search
pub fn print_found(words: &[&Word]) {
    if words.is_empty() {
        println!("No words found\n");
        return;
    }

    println!("{} words found:", words.len().to_string().bright_cyan().bold());
    for chunk in words.chunks(8) {
        let line: Vec<String> = chunk.iter().map(|w| w.text().to_uppercase()).collect();
        println!("  {}", line.join("  "));
    }
    println!();
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Feedback:   {} green, {} yellow",
                step.pattern.count_greens(),
                step.pattern.count_yellows()
            );
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(probe) = &step.probe {
                println!("  Probe:      {}", probe.to_uppercase());
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:        {}", result.min_guesses.to_string().green());
    println!("   Worst case:       {}", result.max_guesses.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=6 {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = count as f64 / result.total_words as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n😰 {}", "Not solved:".red().bold());
        println!("   {}", result.failures.join(", ").to_uppercase());
    }
}
