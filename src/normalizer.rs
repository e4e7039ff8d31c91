//! Word cleaning pipeline: strip, dictionary check, spell-correct, dedup.

use crate::dictionary::{Dictionary, SpellChecker};
use regex::Regex;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

static NON_ALPHA_REGEX: OnceLock<Regex> = OnceLock::new();

fn non_alpha_regex() -> &'static Regex {
    NON_ALPHA_REGEX.get_or_init(|| Regex::new(r"[^a-zA-Z]").expect("valid regex"))
}

/// Remove every character that is not an ASCII letter.
pub fn strip_non_alphabetic(word: &str) -> String {
    non_alpha_regex().replace_all(word, "").into_owned()
}

/// Validates raw words against an injected dictionary and spellchecker.
#[derive(Clone)]
pub struct WordNormalizer {
    dictionary: Arc<dyn Dictionary>,
    speller: Arc<dyn SpellChecker>,
}

impl WordNormalizer {
    pub fn new(dictionary: Arc<dyn Dictionary>, speller: Arc<dyn SpellChecker>) -> Self {
        Self {
            dictionary,
            speller,
        }
    }

    /// Clean a batch of raw words.
    ///
    /// Returns the surviving words lowercased, in first-occurrence order and
    /// without duplicates. Discarded words are logged, never reported as
    /// errors, so the result may be empty.
    pub fn clean<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        debug!("Cleaning {} words", words.len());

        let valid: Vec<String> = words
            .iter()
            .filter_map(|word| self.clean_one(word.as_ref()))
            .collect();

        let mut seen = HashSet::new();
        let unique: Vec<String> = valid
            .iter()
            .filter(|word| seen.insert(word.as_str()))
            .cloned()
            .collect();

        debug!("Total valid words after cleaning: {}", valid.len());
        debug!("Duplicates removed: {}", valid.len() - unique.len());

        unique
    }

    fn clean_one(&self, word: &str) -> Option<String> {
        let cleaned = strip_non_alphabetic(word);

        if cleaned.is_empty() {
            debug!("Word {:?} was discarded after cleaning", word);
            return None;
        }

        if !self.dictionary.contains(&cleaned.to_lowercase()) {
            debug!("Word {:?} is not a valid English word", cleaned);
            return None;
        }

        if !self.speller.is_misspelled(&cleaned) {
            return Some(cleaned.to_lowercase());
        }

        match self.speller.suggest(&cleaned).into_iter().next() {
            Some(correction) => {
                debug!("Word {:?} was corrected to {:?}", cleaned, correction);
                Some(correction.to_lowercase())
            }
            None => {
                warn!("No corrections found for misspelled word {:?}", cleaned);
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::dictionary::WordList;
    use std::collections::HashMap;

    /// Spellchecker double with a fixed correction table. Words absent from
    /// the table are spelled correctly.
    #[derive(Default)]
    pub struct FixedSpeller {
        pub corrections: HashMap<String, Vec<String>>,
    }

    impl FixedSpeller {
        pub fn with(mut self, word: &str, suggestions: &[&str]) -> Self {
            self.corrections.insert(
                word.to_string(),
                suggestions.iter().map(|s| s.to_string()).collect(),
            );
            self
        }
    }

    impl SpellChecker for FixedSpeller {
        fn is_misspelled(&self, word: &str) -> bool {
            self.corrections.contains_key(word)
        }

        fn suggest(&self, word: &str) -> Vec<String> {
            self.corrections.get(word).cloned().unwrap_or_default()
        }
    }

    pub fn normalizer(words: &[&str], speller: FixedSpeller) -> WordNormalizer {
        WordNormalizer::new(
            Arc::new(WordList::from_words(words.iter().copied())),
            Arc::new(speller),
        )
    }
}
