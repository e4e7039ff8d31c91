//! Lexicon capabilities used by the word normalizer.
//!
//! The normalizer only sees the [`Dictionary`] and [`SpellChecker`] traits,
//! so tests can inject doubles. Production uses [`WordList`] and
//! [`WordListSpeller`], both loaded from plain one-word-per-line files such
//! as `/usr/share/dict/british-english`.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Membership check against the configured word set.
pub trait Dictionary: Send + Sync {
    /// Case-folded lookup
    fn contains(&self, word: &str) -> bool;
}

/// Spelling validation and correction.
pub trait SpellChecker: Send + Sync {
    fn is_misspelled(&self, word: &str) -> bool;

    /// Ordered correction candidates, best first. May be empty.
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// In-memory set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .collect();

        Self { words }
    }

    /// Load a word list file, one word per line. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;

        let list = Self::from_words(content.lines());
        info!("Loaded {} words from {}", list.len(), path.display());

        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

/// Spellchecker over a word list. Suggests known words one edit away
/// (deletion, transposition, substitution, insertion), in that order.
#[derive(Debug, Clone, Default)]
pub struct WordListSpeller {
    words: WordList,
}

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

impl WordListSpeller {
    pub fn new(words: WordList) -> Self {
        Self { words }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(WordList::load(path)?))
    }

    fn single_edits(word: &str) -> Vec<String> {
        // Cleaned words are ASCII-only, so byte indexing is safe here
        let bytes = word.as_bytes();
        let n = bytes.len();
        let mut edits = Vec::with_capacity(54 * n + 25);

        for i in 0..n {
            let mut e = bytes.to_vec();
            e.remove(i);
            edits.push(e);
        }
        for i in 0..n.saturating_sub(1) {
            let mut e = bytes.to_vec();
            e.swap(i, i + 1);
            edits.push(e);
        }
        for i in 0..n {
            for &c in ALPHABET {
                if bytes[i] != c {
                    let mut e = bytes.to_vec();
                    e[i] = c;
                    edits.push(e);
                }
            }
        }
        for i in 0..=n {
            for &c in ALPHABET {
                let mut e = bytes.to_vec();
                e.insert(i, c);
                edits.push(e);
            }
        }

        edits
            .into_iter()
            .filter_map(|e| String::from_utf8(e).ok())
            .collect()
    }
}

impl SpellChecker for WordListSpeller {
    fn is_misspelled(&self, word: &str) -> bool {
        !self.words.contains(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        let lower = word.to_lowercase();
        if !lower.is_ascii() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        Self::single_edits(&lower)
            .into_iter()
            .filter(|candidate| self.words.contains(candidate))
            .filter(|candidate| seen.insert(candidate.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_word_list_case_insensitive() {
        let list = WordList::from_words(["Hello", "world"]);

        assert!(list.contains("hello"));
        assert!(list.contains("HELLO"));
        assert!(list.contains("World"));
        assert!(!list.contains("xyz"));
    }

    #[test]
    fn test_word_list_skips_blank_and_comment_lines() {
        let list = WordList::from_words(["cat", "", "   ", "# comment", "  dog  "]);

        assert_eq!(list.len(), 2);
        assert!(list.contains("dog"));
        assert!(!list.contains("# comment"));
    }

    #[test]
    fn test_word_list_load_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "apple\nBanana\n\ncherry").expect("Failed to write word list");

        let list = WordList::load(file.path()).expect("Should load word list");

        assert_eq!(list.len(), 3);
        assert!(list.contains("banana"));
        assert!(!list.is_empty());
    }

    #[test]
    fn test_word_list_load_missing_file() {
        let result = WordList::load("/definitely/not/here/words.txt");

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read word list"));
    }

    #[test]
    fn test_speller_known_word_not_misspelled() {
        let speller = WordListSpeller::new(WordList::from_words(["hello"]));

        assert!(!speller.is_misspelled("hello"));
        assert!(!speller.is_misspelled("Hello"));
        assert!(speller.is_misspelled("helllo"));
    }

    #[test]
    fn test_speller_suggests_deletion_first() {
        let speller = WordListSpeller::new(WordList::from_words(["hello", "hellos"]));

        let suggestions = speller.suggest("Helllo");

        assert_eq!(suggestions.first().map(String::as_str), Some("hello"));
    }

    #[test]
    fn test_speller_suggests_transposition_substitution_insertion() {
        let speller = WordListSpeller::new(WordList::from_words(["world", "word", "cat"]));

        assert_eq!(speller.suggest("wrold"), vec!["world".to_string()]);
        assert_eq!(speller.suggest("cot"), vec!["cat".to_string()]);
        assert_eq!(speller.suggest("ct"), vec!["cat".to_string()]);
    }

    #[test]
    fn test_speller_suggestions_are_unique() {
        let speller = WordListSpeller::new(WordList::from_words(["book"]));

        // "boook" reaches "book" by deleting any of three o's
        assert_eq!(speller.suggest("boook"), vec!["book".to_string()]);
    }

    #[test]
    fn test_speller_no_suggestions() {
        let speller = WordListSpeller::new(WordList::from_words(["hello"]));

        assert!(speller.suggest("qqqqqq").is_empty());
    }
}
