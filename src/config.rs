#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! config holds the shape of the passphrases to generate.

use crate::error::{Error, Result};
use crate::separators::SeparatorAlphabet;

/// DEFAULT_WORDS is the number of words used when none is configured, matching passwdqc.
pub const DEFAULT_WORDS: usize = 3;

/// PassphraseConfig describes what a generated passphrase looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseConfig {
    /// Number of words, at least 1.
    pub words: usize,
    /// Characters placed between words.
    pub separators: SeparatorAlphabet,
    /// Whether each word gets a random chance of having its first letter uppercased.
    pub capitalize: bool,
}

impl Default for PassphraseConfig {
    fn default() -> PassphraseConfig {
        PassphraseConfig {
            words: DEFAULT_WORDS,
            separators: SeparatorAlphabet::default(),
            capitalize: true,
        }
    }
}

impl PassphraseConfig {
    /// with_words sets the number of words.
    pub fn with_words(mut self, words: usize) -> PassphraseConfig {
        self.words = words;
        self
    }

    /// with_separators sets the separator alphabet.
    pub fn with_separators(mut self, separators: SeparatorAlphabet) -> PassphraseConfig {
        self.separators = separators;
        self
    }

    /// with_capitalize turns random capitalization on or off.
    pub fn with_capitalize(mut self, capitalize: bool) -> PassphraseConfig {
        self.capitalize = capitalize;
        self
    }

    /// validate checks the fields that the types alone do not guarantee.
    pub fn validate(&self) -> Result<()> {
        validate_word_count(self.words)
    }
}

/// validate_word_count rejects word counts below 1.
pub(crate) fn validate_word_count(words: usize) -> Result<()> {
    if words < 1 {
        return Err(Error::invalid_argument(
            "n_words",
            format!("must be a positive integer, got {}", words),
        ));
    }
    Ok(())
}
