#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! keyed implements a reproducible byte stream derived from a secret key and a seed string. The
//! stream is meant as a stand-in for a real random source when the same passphrase needs to come
//! out every time, for example in tests or for passphrases that are re-derived on demand. It is
//! not a general purpose DRBG.
//!
//! Each expansion round runs HMAC-SHA512 over an accumulator HMAC_ITERATIONS times and emits the
//! final 64 byte digest. The iteration count makes recovering the key from (seed, output) pairs by
//! guessing expensive. After every round the key and accumulator are re-derived, in the manner of
//! HMAC_DRBG reseeding, so that one round's output alone does not expose the state of the next.

use std::collections::VecDeque;
use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha512;
use tracing::{debug, trace};

use crate::source::ByteSource;

type HmacSha512 = Hmac<Sha512>;

/// HMAC_ITERATIONS is the number of chained HMAC calls in every expansion round.
pub const HMAC_ITERATIONS: u32 = 100_000;

/// ROUND_OUTPUT is the number of bytes every expansion round appends to the buffer.
pub const ROUND_OUTPUT: usize = 64;

/// KeyedByteStream produces the same bytes for the same (seed, key) pair and the same sequence of
/// take calls, on every run and every platform.
pub struct KeyedByteStream {
    key: Vec<u8>,
    accumulator: Vec<u8>,
    buffer: VecDeque<u8>,
    iterations: u32,
    rounds: u64,
}

/// keyed_mac returns an HMAC-SHA512 instance keyed with key.
fn keyed_mac(key: &[u8]) -> HmacSha512 {
    match HmacSha512::new_from_slice(key) {
        Ok(mac) => mac,
        Err(_) => unreachable!("hmac accepts keys of any length"),
    }
}

impl KeyedByteStream {
    /// new creates a stream for the given seed and key. Both are used as raw bytes.
    pub fn new(seed: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> KeyedByteStream {
        KeyedByteStream::with_iterations(seed, key, HMAC_ITERATIONS)
    }

    /// with_iterations lets tests trade the key-recovery cost for speed. Streams built this way do
    /// not match streams built with new.
    pub(crate) fn with_iterations(
        seed: impl AsRef<[u8]>,
        key: impl AsRef<[u8]>,
        iterations: u32,
    ) -> KeyedByteStream {
        KeyedByteStream {
            key: key.as_ref().to_vec(),
            accumulator: seed.as_ref().to_vec(),
            buffer: VecDeque::new(),
            iterations: iterations.max(1),
            rounds: 0,
        }
    }

    /// take returns exactly n bytes, running as many expansion rounds as needed. Surplus bytes
    /// stay buffered for the next call.
    pub fn take(&mut self, n: usize) -> Vec<u8> {
        while self.buffer.len() < n {
            self.expand();
        }
        self.buffer.drain(..n).collect()
    }

    /// buffered returns the number of generated bytes that have not been handed out yet.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// expand runs one expansion round, appending ROUND_OUTPUT bytes to the buffer and re-keying.
    fn expand(&mut self) {
        // The key is fixed for the whole chain, so key the mac once and clone it per iteration.
        let mac = keyed_mac(&self.key);
        for _ in 0..self.iterations {
            let mut round = mac.clone();
            round.update(&self.accumulator);
            let digest = round.finalize().into_bytes();
            self.accumulator.clear();
            self.accumulator.extend_from_slice(&digest);
        }
        self.buffer.extend(self.accumulator.iter().copied());

        // Derive a fresh key from the output, then a fresh accumulator under the new key.
        let mut rekey = keyed_mac(&self.key);
        rekey.update(&self.accumulator);
        rekey.update(&[0u8]);
        self.key = rekey.finalize().into_bytes().to_vec();

        let mut reseed = keyed_mac(&self.key);
        reseed.update(&self.accumulator);
        self.accumulator = reseed.finalize().into_bytes().to_vec();

        self.rounds += 1;
        debug!(
            round = self.rounds,
            iterations = self.iterations,
            buffered = self.buffer.len(),
            "keyed byte stream expanded"
        );
    }
}

impl ByteSource for KeyedByteStream {
    fn take(&mut self, n: usize) -> Vec<u8> {
        trace!(n, "keyed byte stream take");
        KeyedByteStream::take(self, n)
    }
}

// Key material and chain state stay out of debug output.
impl fmt::Debug for KeyedByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedByteStream")
            .field("key", &"<redacted>")
            .field("accumulator", &"<redacted>")
            .field("buffered", &self.buffer.len())
            .field("rounds", &self.rounds)
            .finish()
    }
}

// The RngCore adapter lets the stream drive anything built on rand_core. It is deliberately not
// marked CryptoRng: the output is only as secret as the key, and the seed is often public.
impl rand_core::RngCore for KeyedByteStream {
    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = KeyedByteStream::take(self, dest.len());
        dest.copy_from_slice(&bytes);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
