#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! pwqgen generates memorable passphrases in the style of passwdqc's pwqgen: words drawn from a
//! power-of-two wordset, joined by single character separators, with optional random
//! capitalization.
//!
//! Every choice is drawn from a ByteSource. SystemRandom is the default. KeyedByteStream derives a
//! reproducible stream from a key and a seed string, so the same passphrase can be produced again
//! later or pinned in a test.
//!
//! ```no_run
//! use pwqgen::{generate, KeyedByteStream, SeparatorAlphabet, Wordset};
//!
//! # fn main() -> anyhow::Result<()> {
//! let wordset = Wordset::load("wordlist.txt")?;
//! let mut stream = KeyedByteStream::new("bob", "terribly secret key");
//! let phrase = generate(5, &mut stream, &wordset, &SeparatorAlphabet::default(), true)?;
//! println!("{}", phrase);
//! # Ok(())
//! # }
//! ```

pub mod bits;
pub mod config;
pub mod error;
pub mod keyed;
pub mod passphrase;
pub mod separators;
pub mod source;
pub mod wordset;

pub use config::{PassphraseConfig, DEFAULT_WORDS};
pub use error::{Error, Result};
pub use keyed::{KeyedByteStream, HMAC_ITERATIONS};
pub use passphrase::{entropy_bits, generate, Generator};
pub use separators::{SeparatorAlphabet, DEFAULT_SEPARATORS, NUMERIC_SEPARATORS};
pub use source::{ByteSource, SystemRandom};
pub use wordset::Wordset;
