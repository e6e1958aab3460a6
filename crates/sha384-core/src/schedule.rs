//! # Message Schedule
//!
//! Expands one 128-byte block into the 80-word schedule consumed by the
//! compression rounds (FIPS 180-4 §6.4.2 step 1).

use crate::constants::{BLOCK_SIZE, ROUNDS};

/// The 80-word expansion of one block.
pub type Schedule = [u64; ROUNDS];

/// Γ0 (lower-case sigma 0 in FIPS 180-4).
#[inline(always)]
pub const fn gamma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

/// Γ1 (lower-case sigma 1 in FIPS 180-4).
#[inline(always)]
pub const fn gamma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

/// Decode a block into 16 big-endian words and extend them to 80.
///
/// Words 0..16 are the block unchanged; each later word mixes four earlier
/// ones with wrapping addition.
pub fn expand(block: &[u8; BLOCK_SIZE]) -> Schedule {
    let mut w = [0u64; ROUNDS];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_be_bytes(bytes);
    }

    for i in 16..ROUNDS {
        w[i] = gamma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(gamma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }
    w
}
