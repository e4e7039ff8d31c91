//! Clean, spell-check and translate batches of English words.
//!
//! Raw words flow through [`normalizer::WordNormalizer`] (strip, dictionary
//! check, spell-correction, dedup) and are then fanned out to a
//! LibreTranslate-compatible backend by [`translation::Translator`].

pub mod config;
pub mod dictionary;
pub mod error;
pub mod normalizer;
pub mod server;
pub mod translation;

pub use config::Config;
pub use dictionary::{Dictionary, SpellChecker, WordList, WordListSpeller};
pub use error::TranslateError;
pub use normalizer::WordNormalizer;
pub use translation::{TranslationClient, TranslationPair, Translator};
