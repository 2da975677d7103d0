//! Formatting utilities for terminal output

use crate::core::{GuessRow, Status};
use colored::{ColoredString, Colorize};

/// One letter on its feedback colour
#[must_use]
pub fn colored_letter(letter: char, status: Status) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        Status::Green => tile.black().on_green().bold(),
        Status::Yellow => tile.black().on_yellow().bold(),
        Status::Gray => tile.white().on_bright_black(),
    }
}

/// A submitted row as coloured tiles
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.cells()
        .map(|cell| colored_letter(cell.letter().unwrap_or(' '), cell.status()).to_string())
        .collect()
}

/// Numbered, comma separated word list, e.g. `1. CRATE, 2. SLATE`
#[must_use]
pub fn numbered_list<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| format!("{}. {}", i + 1, w.as_ref().to_uppercase()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_list_uppercases() {
        assert_eq!(numbered_list(&["crate", "slate"]), "1. CRATE, 2. SLATE");
        assert_eq!(numbered_list::<&str>(&[]), "");
    }

    #[test]
    fn colored_row_has_every_letter() {
        colored::control::set_override(false);
        let row = GuessRow::parse("crane", "G-Y--").unwrap();
        assert_eq!(colored_row(&row), " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
