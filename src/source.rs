#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! source defines the byte source contract that decouples passphrase assembly from any particular
//! source of randomness, along with the default system-backed implementation.

use userspace_rng::random256;

/// ByteSource is anything that can hand out bytes on request. A call to take(n) must return
/// exactly n bytes, including for n == 0.
///
/// Sources are trusted to uphold this. Callers that share one source between threads need to
/// synchronize externally, e.g. by holding a `Mutex` guard and passing `&mut *guard`, since the
/// order in which bytes are handed out is part of the output.
pub trait ByteSource {
    /// take returns the next n bytes from the source.
    fn take(&mut self, n: usize) -> Vec<u8>;
}

// Plain closures work as sources, which keeps fixed-byte test stubs short.
impl<F> ByteSource for F
where
    F: FnMut(usize) -> Vec<u8>,
{
    fn take(&mut self, n: usize) -> Vec<u8> {
        self(n)
    }
}

/// SystemRandom draws bytes from the userspace-rng CSPRNG, which is seeded from the operating
/// system. It is the default source for passphrase generation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom;

impl ByteSource for SystemRandom {
    fn take(&mut self, n: usize) -> Vec<u8> {
        // random256 hands out 32 bytes at a time, copy as many blocks as are needed.
        let mut bytes = Vec::with_capacity(n);
        while bytes.len() < n {
            let block = random256();
            let want = (n - bytes.len()).min(block.len());
            bytes.extend_from_slice(&block[..want]);
        }
        bytes
    }
}
