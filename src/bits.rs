#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! bits turns a byte source into uniform choices over power-of-two sized pools.

use crate::error::{Error, Result};
use crate::source::ByteSource;

/// MAX_ALPHABET is the largest separator alphabet that can be used.
pub const MAX_ALPHABET: usize = 4096;

/// MAX_WORDSET is the largest wordset that can be used.
pub const MAX_WORDSET: usize = 1 << 16;

/// MAX_BITS is the widest value random_bits can produce.
pub const MAX_BITS: u32 = 64;

// POWERS_OF_TWO[i] == 2^i for every alphabet size that bits_for accepts.
const POWERS_OF_TWO: [usize; 13] = [1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096];

/// bits_for returns log2(count) when count is a power of two between 1 and MAX_ALPHABET, and None
/// otherwise. The table lookup keeps the computation exact.
pub fn bits_for(count: usize) -> Option<u32> {
    POWERS_OF_TWO
        .iter()
        .position(|&size| size == count)
        .map(|bits| bits as u32)
}

/// bits_for_wordset is bits_for with the larger MAX_WORDSET ceiling.
pub fn bits_for_wordset(count: usize) -> Option<u32> {
    if !count.is_power_of_two() || count > MAX_WORDSET {
        return None;
    }
    Some(count.trailing_zeros())
}

/// random_bits draws a value uniform over [0, 2^n_bits) from source. It requests the smallest
/// number of whole bytes covering n_bits, packs them little-endian and throws away the bits above
/// n_bits. Discarded bits are never used for anything else.
///
/// Asking for more than MAX_BITS bits is rejected before anything is taken from source.
pub fn random_bits<S>(source: &mut S, n_bits: u32) -> Result<u64>
where
    S: ByteSource + ?Sized,
{
    if n_bits > MAX_BITS {
        return Err(Error::invalid_argument(
            "n_bits",
            format!("cannot draw {} bits, the limit is {}", n_bits, MAX_BITS),
        ));
    }
    let n_bytes = ((n_bits + 7) / 8) as usize;
    let bytes = source.take(n_bytes);

    // Only the requested bytes are read. A short source leaves the missing bytes as zero.
    let mut value: u64 = 0;
    for (i, byte) in bytes.iter().take(n_bytes).enumerate() {
        value |= u64::from(*byte) << (8 * i);
    }

    if n_bits == MAX_BITS {
        return Ok(value);
    }
    Ok(value & ((1u64 << n_bits) - 1))
}
