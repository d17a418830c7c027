#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! wordset holds the dictionary that passphrase words are drawn from. The dictionary is supplied
//! by the caller, either as a list of words or as a newline separated file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::bits::{bits_for_wordset, MAX_WORDSET};
use crate::error::{Error, Result};

/// Wordset is an immutable, densely indexed list of distinct words. Its length is a power of two
/// so that every index is reachable from a fixed number of bits with equal probability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordset {
    words: Vec<String>,
    bits: u32,
}

impl Wordset {
    /// new builds a wordset from a list of words. The list must hold a power of two number of
    /// words, at most MAX_WORDSET, and no word may be empty or repeated.
    pub fn new<I, S>(words: I) -> Result<Wordset>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        let bits = match bits_for_wordset(words.len()) {
            Some(bits) => bits,
            None => {
                return Err(Error::invalid_argument(
                    "wordset",
                    format!(
                        "length must be a power of two between 1 and {}, got {}",
                        MAX_WORDSET,
                        words.len()
                    ),
                ))
            }
        };

        // A repeated word would make that word more likely than the others.
        let mut seen = HashSet::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(Error::invalid_argument(
                    "wordset",
                    format!("word {} is empty", i),
                ));
            }
            if !seen.insert(word.as_str()) {
                return Err(Error::invalid_argument(
                    "wordset",
                    format!("word {} ({:?}) appears more than once", i, word),
                ));
            }
        }

        Ok(Wordset { words, bits })
    }

    /// parse reads one word per line. Surrounding whitespace is trimmed, and blank lines and lines
    /// starting with '#' are skipped.
    pub fn parse(text: &str) -> Result<Wordset> {
        Wordset::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// load reads a wordset from a file in the format accepted by parse.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Wordset> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("unable to read wordlist {}", path.display()))?;
        let wordset = Wordset::parse(&text)
            .with_context(|| format!("wordlist {} is not usable", path.display()))?;
        debug!(
            path = %path.display(),
            words = wordset.len(),
            bits = wordset.bits(),
            "loaded wordlist"
        );
        Ok(wordset)
    }

    /// len returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// is_empty reports whether there are no words. Construction rejects empty input, so this
    /// only returns true if that invariant has been broken.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// bits returns the number of bits needed to pick one word.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// get returns the word at index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// iter walks the words in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
