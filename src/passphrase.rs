#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! passphrase assembles passphrases from a wordset, a separator alphabet and a byte source.
//!
//! Draw order is fixed because any deterministic source produces different output when the order
//! changes. All n_words - 1 separators are drawn first, left to right. Then each word is drawn in
//! turn, followed by its capitalization bit when capitalization is on.

use tracing::debug;

use crate::bits::random_bits;
use crate::config::{validate_word_count, PassphraseConfig};
use crate::error::Result;
use crate::separators::SeparatorAlphabet;
use crate::source::{ByteSource, SystemRandom};
use crate::wordset::Wordset;

/// generate builds a passphrase of n_words words taken from wordset, joined by separators taken
/// from the alphabet. With capitalize set, each word has an even chance of getting its first
/// character uppercased; the rest of the word is left as stored.
///
/// Invalid input is rejected before any byte is taken from source.
pub fn generate<S>(
    n_words: usize,
    source: &mut S,
    wordset: &Wordset,
    separators: &SeparatorAlphabet,
    capitalize: bool,
) -> Result<String>
where
    S: ByteSource + ?Sized,
{
    validate_word_count(n_words)?;

    let gaps = (1..n_words)
        .map(|_| random_separator(source, separators))
        .collect::<Result<Vec<char>>>()?;

    // Interleave the words with the separators, there is no trailing separator.
    let mut phrase = String::new();
    for i in 0..n_words {
        phrase += &random_word(source, wordset, capitalize)?;
        if let Some(separator) = gaps.get(i) {
            phrase.push(*separator);
        }
    }

    debug!(
        words = n_words,
        entropy_bits = entropy_bits(n_words, wordset, separators, capitalize),
        "generated passphrase"
    );
    Ok(phrase)
}

/// entropy_bits returns how many bits of choice go into one passphrase of the given shape.
pub fn entropy_bits(
    n_words: usize,
    wordset: &Wordset,
    separators: &SeparatorAlphabet,
    capitalize: bool,
) -> u64 {
    if n_words == 0 {
        return 0;
    }
    let n = n_words as u64;
    let per_word = u64::from(wordset.bits()) + u64::from(capitalize);
    n * per_word + (n - 1) * u64::from(separators.bits())
}

fn random_separator<S>(source: &mut S, separators: &SeparatorAlphabet) -> Result<char>
where
    S: ByteSource + ?Sized,
{
    let index = random_bits(source, separators.bits())? as usize;
    Ok(separators.as_slice()[index])
}

fn random_word<S>(source: &mut S, wordset: &Wordset, capitalize: bool) -> Result<String>
where
    S: ByteSource + ?Sized,
{
    let index = random_bits(source, wordset.bits())? as usize;
    let word = wordset.get(index).unwrap_or_default();
    if capitalize && random_bits(source, 1)? == 1 {
        return Ok(capitalize_first(word));
    }
    Ok(word.to_string())
}

/// capitalize_first uppercases the first character of word and leaves the rest untouched.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generator pairs a configuration with a wordset so that repeated generation does not need to
/// pass them around.
#[derive(Debug, Clone)]
pub struct Generator {
    config: PassphraseConfig,
    wordset: Wordset,
}

impl Generator {
    /// new checks the configuration and builds a generator.
    pub fn new(config: PassphraseConfig, wordset: Wordset) -> Result<Generator> {
        config.validate()?;
        Ok(Generator { config, wordset })
    }

    /// config returns the configuration in use.
    pub fn config(&self) -> &PassphraseConfig {
        &self.config
    }

    /// wordset returns the wordset in use.
    pub fn wordset(&self) -> &Wordset {
        &self.wordset
    }

    /// entropy_bits returns the bits of choice in every passphrase this generator makes.
    pub fn entropy_bits(&self) -> u64 {
        entropy_bits(
            self.config.words,
            &self.wordset,
            &self.config.separators,
            self.config.capitalize,
        )
    }

    /// generate_with builds a passphrase drawing from source.
    pub fn generate_with<S>(&self, source: &mut S) -> Result<String>
    where
        S: ByteSource + ?Sized,
    {
        generate(
            self.config.words,
            source,
            &self.wordset,
            &self.config.separators,
            self.config.capitalize,
        )
    }

    /// generate builds a passphrase drawing from the system random source.
    pub fn generate(&self) -> Result<String> {
        self.generate_with(&mut SystemRandom)
    }
}
