//! Word list loading utilities

use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and `#` comments are ignored; invalid entries are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_hints::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let words = content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!("{}:{}: skipping '{trimmed}': {e}", path.display(), line_no + 1);
                    None
                }
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_hints::wordlists::loader::words_from_slice;
/// use wordle_hints::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| match Word::new(s) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("skipping '{s}': {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn load_from_file_skips_comments_and_junk() {
        let path = std::env::temp_dir().join(format!("wordle_hints_{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "# header\ncrane\n\n  Slate \nnope\n").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("failed to read word list"));
    }
}
