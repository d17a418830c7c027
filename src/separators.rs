#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! separators holds the alphabet of single characters placed between passphrase words.

use std::fmt;
use std::str::FromStr;

use crate::bits::{bits_for, MAX_ALPHABET};
use crate::error::{Error, Result};

/// DEFAULT_SEPARATORS is the passwdqc separator set, 16 entries or 4 bits per separator.
pub const DEFAULT_SEPARATORS: &str = "-_!$&*+=23456789";

/// NUMERIC_SEPARATORS is for sites that reject punctuation. It only carries 3 bits per separator.
pub const NUMERIC_SEPARATORS: &str = "23456789";

/// SeparatorAlphabet is an ordered set of separator characters whose size is a power of two no
/// larger than MAX_ALPHABET. Entries do not need to be distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorAlphabet {
    chars: Vec<char>,
    bits: u32,
}

impl SeparatorAlphabet {
    /// new builds an alphabet from a sequence of strings, each of which must be exactly one
    /// character long.
    pub fn new<I, S>(items: I) -> Result<SeparatorAlphabet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chars = Vec::new();
        for (i, item) in items.into_iter().enumerate() {
            let item = item.as_ref();
            let mut item_chars = item.chars();
            match (item_chars.next(), item_chars.next()) {
                (Some(c), None) => chars.push(c),
                _ => {
                    return Err(Error::invalid_argument(
                        "separators",
                        format!("element {} ({:?}) must be exactly one character", i, item),
                    ))
                }
            }
        }
        SeparatorAlphabet::from_vec(chars)
    }

    /// from_chars builds an alphabet with one entry per character of s.
    pub fn from_chars(s: &str) -> Result<SeparatorAlphabet> {
        SeparatorAlphabet::from_vec(s.chars().collect())
    }

    /// numeric returns the NUMERIC_SEPARATORS alphabet.
    pub fn numeric() -> SeparatorAlphabet {
        SeparatorAlphabet::builtin(NUMERIC_SEPARATORS)
    }

    fn from_vec(chars: Vec<char>) -> Result<SeparatorAlphabet> {
        match bits_for(chars.len()) {
            Some(bits) => Ok(SeparatorAlphabet { chars, bits }),
            None => Err(Error::invalid_argument(
                "separators",
                format!(
                    "length must be a power of two between 1 and {}, got {}",
                    MAX_ALPHABET,
                    chars.len()
                ),
            )),
        }
    }

    // builtin is only used for the constant sets, whose lengths are known powers of two.
    fn builtin(s: &str) -> SeparatorAlphabet {
        let chars: Vec<char> = s.chars().collect();
        let bits = chars.len().trailing_zeros();
        SeparatorAlphabet { chars, bits }
    }

    /// len returns the number of entries.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// is_empty reports whether there are no entries. Construction rejects empty input, so this
    /// only returns true if that invariant has been broken.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// bits returns the number of bits needed to pick one entry.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// get returns the entry at index.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// as_slice returns the entries in order.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl Default for SeparatorAlphabet {
    fn default() -> SeparatorAlphabet {
        SeparatorAlphabet::builtin(DEFAULT_SEPARATORS)
    }
}

impl FromStr for SeparatorAlphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<SeparatorAlphabet> {
        SeparatorAlphabet::from_chars(s)
    }
}

impl fmt::Display for SeparatorAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // the built in sets have the expected sizes.
    fn check_builtin_sets() {
        let default = SeparatorAlphabet::default();
        assert_eq!(default.len(), 16);
        assert_eq!(default.bits(), 4);
        assert_eq!(default.get(0), Some('-'));
        assert_eq!(default.get(1), Some('_'));
        assert_eq!(default.to_string(), DEFAULT_SEPARATORS);
        assert!(!default.is_empty());

        let numeric = SeparatorAlphabet::numeric();
        assert_eq!(numeric.len(), 8);
        assert_eq!(numeric.bits(), 3);
        assert_eq!(numeric.get(0), Some('2'));
        assert_eq!(numeric.get(8), None);
        assert!(!numeric.is_empty());

        assert_eq!(SeparatorAlphabet::from_chars(DEFAULT_SEPARATORS), Ok(default));
    }

    #[test]
    // alphabets whose size is not a power of two are rejected.
    fn check_bad_lengths() {
        for bad in ["", "123", "12345", "123456789"] {
            let err = SeparatorAlphabet::from_chars(bad).unwrap_err();
            assert_eq!(err.parameter(), "separators");
        }
        SeparatorAlphabet::new(["1", "2", "3"]).unwrap_err();
        SeparatorAlphabet::new(Vec::<String>::new()).unwrap_err();
    }

    #[test]
    // the ceiling is 4096 entries.
    fn check_ceiling() {
        let at_limit = "-".repeat(MAX_ALPHABET);
        assert_eq!(SeparatorAlphabet::from_chars(&at_limit).unwrap().bits(), 12);
        SeparatorAlphabet::from_chars(&"-".repeat(MAX_ALPHABET * 2)).unwrap_err();
    }

    #[test]
    // every element must be a single character.
    fn check_element_shape() {
        let err = SeparatorAlphabet::new(["1", "22"]).unwrap_err();
        assert!(err.to_string().contains("element 1"));
        SeparatorAlphabet::new(["", "2"]).unwrap_err();

        // a multi byte character is still one character.
        let alphabet = SeparatorAlphabet::new(["é", "ß"]).unwrap();
        assert_eq!(alphabet.as_slice(), &['é', 'ß']);
        assert_eq!(alphabet.bits(), 1);
    }

    #[test]
    // parsing goes through the same validation as from_chars.
    fn check_from_str() {
        let alphabet: SeparatorAlphabet = "2345".parse().unwrap();
        assert_eq!(alphabet.bits(), 2);
        "234".parse::<SeparatorAlphabet>().unwrap_err();
    }
}
