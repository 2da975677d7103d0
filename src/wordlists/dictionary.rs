//! The fixed dictionary a session filters and probes

use super::embedded::WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::{LetterSet, Word};
use crate::error::EngineError;
use anyhow::Result;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Immutable, duplicate-free list of words in load order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build from words, keeping the first occurrence of each
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| {
                let fresh = index.insert(word.text().to_string());
                if !fresh {
                    log::debug!("skipping duplicate dictionary entry {word}");
                }
                fresh
            })
            .collect();
        Self { words, index }
    }

    /// Build from string slices, skipping invalid entries
    #[must_use]
    pub fn from_strs(words: &[&str]) -> Self {
        Self::from_words(words_from_slice(words))
    }

    /// Dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_strs(WORDS)
    }

    /// Load a dictionary file, one word per line
    ///
    /// # Errors
    /// Fails if the file cannot be read or holds no valid word.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let dictionary = Self::from_words(load_from_file(path)?);
        if dictionary.is_empty() {
            anyhow::bail!("no valid five-letter words in {}", path.display());
        }
        log::debug!("loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        if text.bytes().any(|b| b.is_ascii_uppercase()) {
            self.index.contains(&text.to_ascii_lowercase())
        } else {
            self.index.contains(text)
        }
    }

    /// Words containing every letter of `letters`, in dictionary order
    ///
    /// Repeated letters in the query only need to appear once.
    ///
    /// # Errors
    /// Returns `InvalidInput` when `letters` is blank or has anything besides `a`-`z`.
    pub fn find_containing(&self, letters: &str) -> Result<Vec<&Word>, EngineError> {
        let letters = letters.trim().to_ascii_lowercase();
        if letters.is_empty() {
            return Err(EngineError::InvalidInput(
                "Please enter some letters".to_string(),
            ));
        }
        if let Some(bad) = letters.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(EngineError::InvalidInput(format!(
                "'{bad}' is not a letter a-z"
            )));
        }

        let wanted: LetterSet = letters.bytes().collect();
        Ok(self
            .words
            .iter()
            .filter(|word| wanted.iter().all(|l| word.has_letter(l)))
            .collect())
    }
}
