//! Offline word list
//!
//! Serves as both word source and oracle when no network services are wanted.

use super::{ServiceError, WordOracle, WordSource};
use crate::core::Word;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// In-memory list of playable words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a list from words, dropping duplicates
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            if list.index.insert(word.text().to_string()) {
                list.words.push(word);
            }
        }
        list
    }

    /// Parse one word per line, skipping blank lines and anything that is not
    /// a valid five-letter word
    ///
    /// # Examples
    /// ```
    /// use wordle_game::services::WordList;
    ///
    /// let list = WordList::parse("crane\nslate\n\ntoolong\n");
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines().filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        }))
    }

    /// Load words from a file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
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
    pub fn contains(&self, candidate: &str) -> bool {
        self.index.contains(&candidate.to_lowercase())
    }
}

impl WordSource for WordList {
    async fn fetch_target_word(&self) -> Result<Word, ServiceError> {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(ServiceError::EmptyWordList)
    }
}

impl WordOracle for WordList {
    async fn is_valid_word(&self, candidate: &str) -> Result<bool, ServiceError> {
        Ok(self.contains(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_skips_invalid_and_duplicate_lines() {
        let list = WordList::parse("crane\n  SLATE \ntoolong\nabc\n\ncrane\n");

        assert_eq!(list.len(), 2);
        assert!(list.contains("crane"));
        assert!(list.contains("slate"));
        assert!(!list.contains("toolong"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let list = WordList::parse("crane");
        assert!(list.contains("CRANE"));
        assert!(!list.contains("slate"));
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate\nirate").unwrap();

        let list = WordList::load_from_file(file.path()).unwrap();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(WordList::load_from_file("/nonexistent/words.txt").is_err());
    }

    #[tokio::test]
    async fn fetch_target_word_draws_from_list() {
        let list = WordList::parse("crane\nslate");
        let word = list.fetch_target_word().await.unwrap();
        assert!(list.contains(word.text()));
    }

    #[tokio::test]
    async fn empty_list_cannot_supply_a_word() {
        let list = WordList::default();
        assert!(list.is_empty());
        assert!(matches!(
            list.fetch_target_word().await,
            Err(ServiceError::EmptyWordList)
        ));
    }

    #[tokio::test]
    async fn oracle_accepts_only_listed_words() {
        let list = WordList::parse("crane");
        assert!(list.is_valid_word("crane").await.unwrap());
        assert!(!list.is_valid_word("xyzzy").await.unwrap());
    }
}
